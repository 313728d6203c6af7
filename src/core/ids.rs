//! Host handles.
//!
//! Documents, workspaces and windows are owned by the host editor. The kernel
//! only ever stores their identities and asks the host whether they are still
//! alive.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! host_handle {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            pub const fn raw(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

host_handle!(
    /// 宿主文档（buffer）的身份
    DocumentId,
    "doc"
);
host_handle!(
    /// 宿主工作区（screen）的身份
    WorkspaceId,
    "ws"
);
host_handle!(WindowId, "win");

#[cfg(test)]
#[path = "../../tests/unit/core/ids.rs"]
mod tests;
