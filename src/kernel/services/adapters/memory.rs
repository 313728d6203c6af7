//! In-process host for tests and embedders without a real editor.

use rustc_hash::FxHashMap;

use crate::core::{CommandId, DocumentId, WindowId, WorkspaceId};
use crate::kernel::services::ports::{DisplayTarget, PropertyValue, WorkspaceHost};

const FALLBACK_NAME: &str = "*scratch*";

/// Side effects the host performed, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    DocumentDestroyed(DocumentId),
    WorkspaceRemoved(WorkspaceId),
    WindowDocumentSet {
        window: WindowId,
        document: DocumentId,
    },
}

#[derive(Debug)]
pub struct MemoryHost {
    next_id: u64,
    names: FxHashMap<DocumentId, String>,
    /// Most recently used first.
    recency: Vec<DocumentId>,
    workspaces: Vec<WorkspaceId>,
    current: WorkspaceId,
    properties: FxHashMap<(WorkspaceId, String), PropertyValue>,
    windows: Vec<(WindowId, DocumentId)>,
    command: Option<CommandId>,
    fallback: DocumentId,
    journal: Vec<HostEvent>,
    refreshes: usize,
}

impl MemoryHost {
    /// One workspace, one window, showing the fallback document.
    pub fn new() -> Self {
        let fallback = DocumentId::new(1);
        let workspace = WorkspaceId::new(2);
        let window = WindowId::new(3);
        let mut names = FxHashMap::default();
        names.insert(fallback, FALLBACK_NAME.to_string());

        Self {
            next_id: 4,
            names,
            recency: vec![fallback],
            workspaces: vec![workspace],
            current: workspace,
            properties: FxHashMap::default(),
            windows: vec![(window, fallback)],
            command: None,
            fallback,
            journal: Vec::new(),
            refreshes: 0,
        }
    }

    fn alloc(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    /// New documents start at the end of the recency order.
    pub fn create_document(&mut self, name: &str) -> DocumentId {
        let id = DocumentId::new(self.alloc());
        self.names.insert(id, name.to_string());
        self.recency.push(id);
        id
    }

    pub fn document_name(&self, document: DocumentId) -> Option<&str> {
        self.names.get(&document).map(String::as_str)
    }

    pub fn create_workspace(&mut self) -> WorkspaceId {
        let id = WorkspaceId::new(self.alloc());
        self.workspaces.push(id);
        id
    }

    pub fn switch_workspace(&mut self, workspace: WorkspaceId) -> bool {
        if !self.workspaces.contains(&workspace) || self.current == workspace {
            return false;
        }
        self.current = workspace;
        true
    }

    /// Drops the workspace. The last workspace cannot be removed.
    pub fn remove_workspace(&mut self, workspace: WorkspaceId) -> bool {
        if self.workspaces.len() <= 1 {
            return false;
        }
        let before = self.workspaces.len();
        self.workspaces.retain(|ws| *ws != workspace);
        if self.workspaces.len() == before {
            return false;
        }
        if self.current == workspace {
            self.current = self.workspaces[0];
        }
        self.journal.push(HostEvent::WorkspaceRemoved(workspace));
        true
    }

    pub fn main_window(&self) -> WindowId {
        self.windows[0].0
    }

    pub fn create_window(&mut self, document: DocumentId) -> WindowId {
        let id = WindowId::new(self.alloc());
        self.windows.push((id, document));
        id
    }

    /// Shows `document` in `window` and marks it most recently used.
    pub fn display(&mut self, document: DocumentId, window: WindowId) -> DisplayTarget {
        if let Some(slot) = self.windows.iter_mut().find(|(w, _)| *w == window) {
            slot.1 = document;
        }
        self.touch(document);
        DisplayTarget::Window(window)
    }

    pub fn touch(&mut self, document: DocumentId) {
        if let Some(pos) = self.recency.iter().position(|d| *d == document) {
            let doc = self.recency.remove(pos);
            self.recency.insert(0, doc);
        }
    }

    pub fn set_command(&mut self, command: Option<&str>) {
        self.command = command.map(CommandId::new);
    }

    pub fn journal(&self) -> &[HostEvent] {
        &self.journal
    }

    pub fn refresh_count(&self) -> usize {
        self.refreshes
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkspaceHost for MemoryHost {
    fn current_workspace(&self) -> WorkspaceId {
        self.current
    }

    fn all_workspaces(&self) -> Vec<WorkspaceId> {
        self.workspaces.clone()
    }

    fn workspace_property(&self, workspace: WorkspaceId, key: &str) -> Option<PropertyValue> {
        self.properties.get(&(workspace, key.to_string())).cloned()
    }

    fn set_workspace_property(&mut self, workspace: WorkspaceId, key: &str, value: PropertyValue) {
        self.properties.insert((workspace, key.to_string()), value);
    }

    fn clear_workspace_property(&mut self, workspace: WorkspaceId, key: &str) {
        self.properties.remove(&(workspace, key.to_string()));
    }

    fn is_live(&self, document: DocumentId) -> bool {
        self.names.contains_key(&document)
    }

    fn true_recency_order(&self) -> Vec<DocumentId> {
        self.recency.clone()
    }

    fn current_command(&self) -> Option<CommandId> {
        self.command.clone()
    }

    fn fallback_document(&self) -> DocumentId {
        self.fallback
    }

    fn window_document(&self, window: WindowId) -> Option<DocumentId> {
        self.windows
            .iter()
            .find(|(w, _)| *w == window)
            .map(|(_, d)| *d)
    }

    fn set_window_document(&mut self, window: WindowId, document: DocumentId) {
        if let Some(slot) = self.windows.iter_mut().find(|(w, _)| *w == window) {
            slot.1 = document;
            self.journal
                .push(HostEvent::WindowDocumentSet { window, document });
        }
    }

    fn windows_showing(&self, document: DocumentId) -> Vec<WindowId> {
        self.windows
            .iter()
            .filter(|(_, d)| *d == document)
            .map(|(w, _)| *w)
            .collect()
    }

    fn destroy_document(&mut self, document: DocumentId) {
        if self.names.remove(&document).is_none() {
            return;
        }
        self.recency.retain(|d| *d != document);
        let fallback = self.fallback;
        for slot in self.windows.iter_mut().filter(|(_, d)| *d == document) {
            slot.1 = fallback;
        }
        self.journal.push(HostEvent::DocumentDestroyed(document));
    }

    fn refresh_ui(&mut self) {
        self.refreshes += 1;
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/memory.rs"]
mod tests;
