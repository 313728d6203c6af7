//! The hook object a host registers at its extension points.
//!
//! `Session` owns the store and the host, turns host events into actions and
//! applies the resulting effects in order. Destruction requests issued by the
//! kernel itself go back through the same guards as the host's own.

use crate::core::{DocumentId, WorkspaceId};
use crate::error::ScopeError;
use crate::kernel::services::ports::{DisplayTarget, WorkspaceHost};

use super::{Action, DispatchResult, Effect, ListingHook, ScopeConfig, Store};

pub struct Session<H: WorkspaceHost> {
    store: Store,
    host: H,
}

impl<H: WorkspaceHost> Session<H> {
    pub fn new(config: ScopeConfig, host: H) -> Self {
        Self {
            store: Store::new(config),
            host,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn dispatch(&mut self, action: Action) -> Result<DispatchResult, ScopeError> {
        let result = self.store.dispatch(&mut self.host, action)?;
        self.apply(&result.effects)?;
        Ok(result)
    }

    fn apply(&mut self, effects: &[Effect]) -> Result<(), ScopeError> {
        for effect in effects {
            match effect {
                Effect::RefreshUi => self.host.refresh_ui(),
                Effect::DestroyDocument(document) => {
                    self.destroy_document(*document)?;
                }
                Effect::SetWindowDocument { window, document } => {
                    self.host.set_window_document(*window, *document)
                }
                // Consumed by `destroy_document`.
                Effect::VetoDestroy(_) => {}
            }
        }
        Ok(())
    }

    /// Call after the host displayed something.
    pub fn shown(&mut self, target: DisplayTarget) -> Result<DispatchResult, ScopeError> {
        self.dispatch(Action::DocumentShown(target))
    }

    /// Call after the host switched to `document` directly.
    pub fn switched(&mut self, document: DocumentId) -> Result<DispatchResult, ScopeError> {
        self.dispatch(Action::DocumentSwitched(document))
    }

    pub fn list_documents(&self, hook: ListingHook) -> Vec<DocumentId> {
        self.store.list_documents(&self.host, hook)
    }

    pub fn members(&self, workspace: WorkspaceId) -> Vec<DocumentId> {
        self.store.members(&self.host, workspace)
    }

    /// Runs the destroy guards, moves every window off `document`, then asks
    /// the host to destroy it. Returns `false` when the destruction was vetoed.
    pub fn destroy_document(&mut self, document: DocumentId) -> Result<bool, ScopeError> {
        let verdict = self
            .store
            .dispatch(&mut self.host, Action::DocumentDestroying(document))?;
        if verdict.vetoes(document) {
            return Ok(false);
        }
        self.apply(&verdict.effects)?;

        if !self.host.is_live(document) {
            return Ok(false);
        }
        for window in self.host.windows_showing(document) {
            self.dispatch(Action::WindowVacating(window))?;
        }
        self.host.destroy_document(document);
        self.dispatch(Action::DocumentDestroyed(document))?;
        tracing::debug!(document = %document, "document destroyed");
        Ok(true)
    }

    /// Call before the host destroys `workspace`: its documents go first.
    pub fn workspace_destroying(&mut self, workspace: WorkspaceId) -> Result<(), ScopeError> {
        self.dispatch(Action::WorkspaceDestroying(workspace))?;
        Ok(())
    }

    /// Call once the host has destroyed `workspace`.
    pub fn workspace_destroyed(&mut self, workspace: WorkspaceId) -> Result<(), ScopeError> {
        self.dispatch(Action::WorkspaceDestroyed(workspace))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/session.rs"]
mod tests;
