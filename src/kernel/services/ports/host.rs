//! The capabilities the kernel borrows from the host editor.
//!
//! Every method is synchronous: the host dispatches one interactive operation
//! at a time and the kernel runs to completion inside it.

use serde::{Deserialize, Serialize};

use crate::core::{CommandId, DocumentId, WindowId, WorkspaceId};

/// Value stored in the host's per-workspace property table.
///
/// The table is shared with the rest of the host. The kernel only ever writes
/// `Documents`; `Text` and `Flag` are what other host features keep there
/// (workspace names, pinned markers) and are read back as "not a membership
/// list".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PropertyValue {
    Documents(Vec<DocumentId>),
    Text(String),
    Flag(bool),
}

/// What a "display this" request ended up showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayTarget {
    Document(DocumentId),
    /// The request resolved to a window; the shown document is whatever that
    /// window holds now.
    Window(WindowId),
    /// Anything else the host handed back, described for error reporting.
    Other(String),
}

pub trait WorkspaceHost {
    fn current_workspace(&self) -> WorkspaceId;

    fn all_workspaces(&self) -> Vec<WorkspaceId>;

    fn workspace_property(&self, workspace: WorkspaceId, key: &str) -> Option<PropertyValue>;

    fn set_workspace_property(&mut self, workspace: WorkspaceId, key: &str, value: PropertyValue);

    fn clear_workspace_property(&mut self, workspace: WorkspaceId, key: &str);

    fn is_live(&self, document: DocumentId) -> bool;

    /// All live documents, most recently used first.
    fn true_recency_order(&self) -> Vec<DocumentId>;

    /// The interactive command currently executing, if any.
    fn current_command(&self) -> Option<CommandId>;

    /// The always-present document shown when nothing else is available.
    fn fallback_document(&self) -> DocumentId;

    fn window_document(&self, window: WindowId) -> Option<DocumentId>;

    fn set_window_document(&mut self, window: WindowId, document: DocumentId);

    fn windows_showing(&self, document: DocumentId) -> Vec<WindowId>;

    fn destroy_document(&mut self, document: DocumentId);

    fn refresh_ui(&mut self);
}
