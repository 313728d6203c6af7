use std::path::PathBuf;

use thiserror::Error;

use crate::core::{DocumentId, WorkspaceId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScopeError {
    /// The host answered a display request with something that is neither a
    /// document nor a window showing one.
    #[error("cannot resolve displayed target to a document: {0}")]
    UnresolvableDisplay(String),

    #[error("{document} is a member of several workspaces: {workspaces:?}")]
    InvariantViolation {
        document: DocumentId,
        workspaces: Vec<WorkspaceId>,
    },
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
