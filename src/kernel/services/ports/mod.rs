//! Service ports: traits + data contracts.

pub mod host;

pub use host::{DisplayTarget, PropertyValue, WorkspaceHost};
