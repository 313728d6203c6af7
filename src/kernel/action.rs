use crate::core::{DocumentId, WindowId, WorkspaceId};
use crate::kernel::services::ports::DisplayTarget;

/// Host lifecycle events and explicit membership edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Something was displayed in a window.
    DocumentShown(DisplayTarget),
    /// A document was switched to without going through display.
    DocumentSwitched(DocumentId),
    AddDocument {
        workspace: WorkspaceId,
        document: DocumentId,
    },
    RemoveDocument {
        workspace: WorkspaceId,
        document: DocumentId,
    },
    /// Pull every member of `from` into the current workspace.
    ImportDocuments {
        from: WorkspaceId,
    },
    WorkspaceDestroying(WorkspaceId),
    WorkspaceDestroyed(WorkspaceId),
    /// The window is about to lose its document.
    WindowVacating(WindowId),
    DocumentDestroying(DocumentId),
    /// The host has destroyed the document.
    DocumentDestroyed(DocumentId),
}
