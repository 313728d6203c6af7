use crate::core::{DocumentId, WindowId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    RefreshUi,
    DestroyDocument(DocumentId),
    SetWindowDocument {
        window: WindowId,
        document: DocumentId,
    },
    /// The pending destruction of this document must not happen.
    VetoDestroy(DocumentId),
}
