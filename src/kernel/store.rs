use crate::core::{CommandId, DocumentId, WindowId, WorkspaceId};
use crate::error::ScopeError;
use crate::kernel::services::ports::{DisplayTarget, WorkspaceHost};

use super::filter::filtered_order;
use super::membership::MembershipStore;
use super::{Action, Effect, ScopeConfig};

/// Host extension points whose result the kernel overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingHook {
    AllDocuments,
    QuickSwitch,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self::default()
    }

    pub fn vetoes(&self, document: DocumentId) -> bool {
        self.effects
            .iter()
            .any(|e| matches!(e, Effect::VetoDestroy(d) if *d == document))
    }
}

pub struct Store {
    config: ScopeConfig,
    membership: MembershipStore,
}

impl Store {
    pub fn new(config: ScopeConfig) -> Self {
        let membership = MembershipStore::new(config.exclusive);
        Self { config, membership }
    }

    pub fn config(&self) -> &ScopeConfig {
        &self.config
    }

    pub fn membership(&self) -> &MembershipStore {
        &self.membership
    }

    /// Live members of `workspace`, falling back to the host's default document.
    pub fn members<H: WorkspaceHost + ?Sized>(
        &self,
        host: &H,
        workspace: WorkspaceId,
    ) -> Vec<DocumentId> {
        self.membership.get(host, workspace)
    }

    pub fn filtered_order<H: WorkspaceHost + ?Sized>(
        &self,
        host: &H,
        running_command: Option<&CommandId>,
        workspace: WorkspaceId,
        true_order: &[DocumentId],
    ) -> Vec<DocumentId> {
        let members = self.membership.get(host, workspace);
        filtered_order(&self.config, running_command, &members, true_order)
    }

    /// Result the host should return from one of its listing primitives.
    pub fn list_documents<H: WorkspaceHost + ?Sized>(
        &self,
        host: &H,
        hook: ListingHook,
    ) -> Vec<DocumentId> {
        let true_order = host.true_recency_order();
        let command = host.current_command();
        tracing::trace!(hook = ?hook, command = ?command, "listing documents");
        self.filtered_order(host, command.as_ref(), host.current_workspace(), &true_order)
    }

    pub fn dispatch<H: WorkspaceHost + ?Sized>(
        &mut self,
        host: &mut H,
        action: Action,
    ) -> Result<DispatchResult, ScopeError> {
        match action {
            Action::DocumentShown(target) => {
                let document = Self::resolve_display(host, target)?;
                Ok(self.add_to_current(host, document))
            }
            Action::DocumentSwitched(document) => Ok(self.add_to_current(host, document)),
            Action::AddDocument {
                workspace,
                document,
            } => {
                let state_changed = self.membership.add(host, workspace, document);
                self.audit(host);
                Ok(DispatchResult {
                    effects: vec![Effect::RefreshUi],
                    state_changed,
                })
            }
            Action::RemoveDocument {
                workspace,
                document,
            } => {
                let state_changed = self.membership.remove(host, workspace, document);
                Ok(DispatchResult {
                    effects: vec![Effect::RefreshUi],
                    state_changed,
                })
            }
            Action::ImportDocuments { from } => Ok(self.import(host, from)),
            Action::WorkspaceDestroying(workspace) => Ok(self.teardown(host, workspace)),
            Action::WorkspaceDestroyed(workspace) => {
                self.membership.forget(host, workspace);
                Ok(DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                })
            }
            Action::WindowVacating(window) => Ok(self.replace_window_document(host, window)),
            Action::DocumentDestroying(document) => {
                if document == host.fallback_document() {
                    tracing::debug!(document = %document, "refusing to destroy fallback document");
                    return Ok(DispatchResult {
                        effects: vec![Effect::VetoDestroy(document)],
                        state_changed: false,
                    });
                }
                Ok(DispatchResult::unchanged())
            }
            Action::DocumentDestroyed(document) => Ok(DispatchResult {
                effects: Vec::new(),
                state_changed: self.membership.forget_document(document),
            }),
        }
    }

    fn resolve_display<H: WorkspaceHost + ?Sized>(
        host: &H,
        target: DisplayTarget,
    ) -> Result<DocumentId, ScopeError> {
        match target {
            DisplayTarget::Document(document) => Ok(document),
            DisplayTarget::Window(window) => host.window_document(window).ok_or_else(|| {
                tracing::error!(window = %window, "displayed window holds no document");
                ScopeError::UnresolvableDisplay(format!("{window} holds no document"))
            }),
            DisplayTarget::Other(what) => {
                tracing::error!(target = %what, "unexpected display result");
                Err(ScopeError::UnresolvableDisplay(what))
            }
        }
    }

    fn add_to_current<H: WorkspaceHost + ?Sized>(
        &mut self,
        host: &mut H,
        document: DocumentId,
    ) -> DispatchResult {
        let workspace = host.current_workspace();
        let state_changed = self.membership.add(host, workspace, document);
        self.audit(host);
        DispatchResult {
            effects: vec![Effect::RefreshUi],
            state_changed,
        }
    }

    fn import<H: WorkspaceHost + ?Sized>(
        &mut self,
        host: &mut H,
        from: WorkspaceId,
    ) -> DispatchResult {
        let workspace = host.current_workspace();
        if from == workspace {
            return DispatchResult::unchanged();
        }

        let mut state_changed = false;
        for document in MembershipStore::stored(host, from) {
            if host.is_live(document) {
                state_changed |= self.membership.add(host, workspace, document);
            }
        }
        self.audit(host);
        tracing::debug!(
            from = %from,
            workspace = %workspace,
            changed = state_changed,
            "imported documents"
        );
        DispatchResult {
            effects: vec![Effect::RefreshUi],
            state_changed,
        }
    }

    fn teardown<H: WorkspaceHost + ?Sized>(
        &self,
        host: &H,
        workspace: WorkspaceId,
    ) -> DispatchResult {
        let fallback = host.fallback_document();
        let effects: Vec<Effect> = self
            .membership
            .get(host, workspace)
            .into_iter()
            .filter(|doc| *doc != fallback)
            .map(Effect::DestroyDocument)
            .collect();
        tracing::debug!(
            workspace = %workspace,
            documents = effects.len(),
            "tearing down workspace"
        );
        DispatchResult {
            effects,
            state_changed: false,
        }
    }

    fn replace_window_document<H: WorkspaceHost + ?Sized>(
        &self,
        host: &H,
        window: WindowId,
    ) -> DispatchResult {
        let current = host.window_document(window);
        let command = host.current_command();
        let true_order = host.true_recency_order();
        let order =
            self.filtered_order(host, command.as_ref(), host.current_workspace(), &true_order);

        // order[0] is the document being vacated.
        let document = match order.get(1) {
            Some(next) if Some(*next) != current => *next,
            _ => host.fallback_document(),
        };
        tracing::debug!(window = %window, document = %document, "window successor chosen");
        DispatchResult {
            effects: vec![Effect::SetWindowDocument { window, document }],
            state_changed: false,
        }
    }

    fn audit<H: WorkspaceHost + ?Sized>(&mut self, host: &mut H) {
        if !self.membership.is_exclusive() {
            return;
        }
        let violations = self.membership.violations(host);
        debug_assert!(violations.is_empty(), "exclusivity violated: {violations:?}");
        for violation in violations {
            let err = ScopeError::from(violation.clone());
            tracing::error!(error = %err, "repairing membership");
            self.membership.repair(host, &violation);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
