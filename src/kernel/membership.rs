//! Per-workspace document membership.
//!
//! The lists themselves live in the host's workspace property table under
//! [`MEMBERSHIP_KEY`]; this store only keeps the bookkeeping needed to enforce
//! and repair exclusivity.

use rustc_hash::FxHashMap;

use crate::core::{DocumentId, WorkspaceId};
use crate::error::ScopeError;
use crate::kernel::services::ports::{PropertyValue, WorkspaceHost};

pub const MEMBERSHIP_KEY: &str = "zscope.documents";

/// A live document found in more than one workspace while exclusivity is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub document: DocumentId,
    pub workspaces: Vec<WorkspaceId>,
}

impl From<Violation> for ScopeError {
    fn from(v: Violation) -> Self {
        ScopeError::InvariantViolation {
            document: v.document,
            workspaces: v.workspaces,
        }
    }
}

#[derive(Debug, Default)]
pub struct MembershipStore {
    exclusive: bool,
    /// Workspace that most recently received each document.
    last_owner: FxHashMap<DocumentId, WorkspaceId>,
}

impl MembershipStore {
    pub fn new(exclusive: bool) -> Self {
        Self {
            exclusive,
            last_owner: FxHashMap::default(),
        }
    }

    pub fn is_exclusive(&self) -> bool {
        self.exclusive
    }

    pub fn last_owner(&self, document: DocumentId) -> Option<WorkspaceId> {
        self.last_owner.get(&document).copied()
    }

    /// Raw stored list, stale entries included.
    pub fn stored<H: WorkspaceHost + ?Sized>(host: &H, workspace: WorkspaceId) -> Vec<DocumentId> {
        match host.workspace_property(workspace, MEMBERSHIP_KEY) {
            Some(PropertyValue::Documents(docs)) => docs,
            Some(other) => {
                tracing::warn!(
                    workspace = %workspace,
                    value = ?other,
                    "membership property holds a non-document value, treating as empty"
                );
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    fn live<H: WorkspaceHost + ?Sized>(
        host: &H,
        workspace: WorkspaceId,
    ) -> (Vec<DocumentId>, bool) {
        let stored = Self::stored(host, workspace);
        let before = stored.len();
        let live: Vec<DocumentId> = stored.into_iter().filter(|d| host.is_live(*d)).collect();
        let pruned = live.len() != before;
        (live, pruned)
    }

    fn write<H: WorkspaceHost + ?Sized>(
        host: &mut H,
        workspace: WorkspaceId,
        docs: Vec<DocumentId>,
    ) {
        host.set_workspace_property(workspace, MEMBERSHIP_KEY, PropertyValue::Documents(docs));
    }

    /// Adds `document` to `workspace`. Under exclusivity it is taken out of
    /// every other workspace first. Returns whether any list changed.
    pub fn add<H: WorkspaceHost + ?Sized>(
        &mut self,
        host: &mut H,
        workspace: WorkspaceId,
        document: DocumentId,
    ) -> bool {
        let mut changed = false;
        if self.exclusive {
            for other in host.all_workspaces() {
                if other != workspace {
                    changed |= Self::remove_from(host, other, document);
                }
            }
        }

        let (mut docs, pruned) = Self::live(host, workspace);
        let inserted = !docs.contains(&document);
        if inserted {
            docs.push(document);
        }
        if inserted || pruned {
            Self::write(host, workspace, docs);
        }
        if inserted {
            tracing::debug!(document = %document, workspace = %workspace, "document added");
        }

        self.last_owner.insert(document, workspace);
        changed | inserted
    }

    /// Removes `document` from `workspace`. No-op when it is not a member.
    pub fn remove<H: WorkspaceHost + ?Sized>(
        &mut self,
        host: &mut H,
        workspace: WorkspaceId,
        document: DocumentId,
    ) -> bool {
        if self.last_owner.get(&document) == Some(&workspace) {
            self.last_owner.remove(&document);
        }
        Self::remove_from(host, workspace, document)
    }

    fn remove_from<H: WorkspaceHost + ?Sized>(
        host: &mut H,
        workspace: WorkspaceId,
        document: DocumentId,
    ) -> bool {
        let (mut docs, pruned) = Self::live(host, workspace);
        let before = docs.len();
        docs.retain(|d| *d != document);
        let removed = docs.len() != before;
        if removed || pruned {
            Self::write(host, workspace, docs);
        }
        if removed {
            tracing::debug!(document = %document, workspace = %workspace, "document removed");
        }
        removed
    }

    /// Live members of `workspace`; never empty. A workspace without live
    /// members shows the host's fallback document.
    pub fn get<H: WorkspaceHost + ?Sized>(
        &self,
        host: &H,
        workspace: WorkspaceId,
    ) -> Vec<DocumentId> {
        let (docs, _) = Self::live(host, workspace);
        if docs.is_empty() {
            return vec![host.fallback_document()];
        }
        docs
    }

    /// Writes back the live-only list. Returns the number of entries dropped.
    pub fn prune<H: WorkspaceHost + ?Sized>(&self, host: &mut H, workspace: WorkspaceId) -> usize {
        let before = Self::stored(host, workspace).len();
        let (docs, pruned) = Self::live(host, workspace);
        let dropped = before - docs.len();
        if pruned {
            Self::write(host, workspace, docs);
        }
        dropped
    }

    /// Drops the stored list and ownership records of a destroyed workspace.
    pub fn forget<H: WorkspaceHost + ?Sized>(&mut self, host: &mut H, workspace: WorkspaceId) {
        host.clear_workspace_property(workspace, MEMBERSHIP_KEY);
        self.last_owner.retain(|_, owner| *owner != workspace);
    }

    /// Drops the ownership record of a document the host has destroyed.
    pub fn forget_document(&mut self, document: DocumentId) -> bool {
        self.last_owner.remove(&document).is_some()
    }

    pub fn owner_count(&self) -> usize {
        self.last_owner.len()
    }

    /// Every known workspace whose stored list holds `document`.
    pub fn workspaces_of<H: WorkspaceHost + ?Sized>(
        host: &H,
        document: DocumentId,
    ) -> Vec<WorkspaceId> {
        host.all_workspaces()
            .into_iter()
            .filter(|ws| Self::stored(host, *ws).contains(&document))
            .collect()
    }

    pub fn violations<H: WorkspaceHost + ?Sized>(&self, host: &H) -> Vec<Violation> {
        let mut holders: FxHashMap<DocumentId, Vec<WorkspaceId>> = FxHashMap::default();
        for ws in host.all_workspaces() {
            for doc in Self::stored(host, ws) {
                if host.is_live(doc) {
                    let entry = holders.entry(doc).or_default();
                    if !entry.contains(&ws) {
                        entry.push(ws);
                    }
                }
            }
        }

        let mut out: Vec<Violation> = holders
            .into_iter()
            .filter(|(_, workspaces)| workspaces.len() > 1)
            .map(|(document, workspaces)| Violation {
                document,
                workspaces,
            })
            .collect();
        out.sort_by_key(|v| v.document);
        out
    }

    pub fn check_exclusive<H: WorkspaceHost + ?Sized>(&self, host: &H) -> Result<(), ScopeError> {
        match self.violations(host).into_iter().next() {
            Some(v) => Err(v.into()),
            None => Ok(()),
        }
    }

    /// Keeps the document only in the workspace that received it last (or the
    /// first holder when that is unknown). Returns the kept workspace.
    pub fn repair<H: WorkspaceHost + ?Sized>(
        &mut self,
        host: &mut H,
        violation: &Violation,
    ) -> Option<WorkspaceId> {
        let keeper = self
            .last_owner
            .get(&violation.document)
            .copied()
            .filter(|ws| violation.workspaces.contains(ws))
            .or_else(|| violation.workspaces.first().copied())?;

        for ws in &violation.workspaces {
            if *ws != keeper {
                Self::remove_from(host, *ws, violation.document);
            }
        }
        self.last_owner.insert(violation.document, keeper);
        Some(keeper)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/membership.rs"]
mod tests;
