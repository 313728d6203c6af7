//! 命令标识：宿主当前正在执行的交互命令
//!
//! The kernel never dispatches commands itself. It only compares the running
//! command against the exempt set, so a command is just an interned name.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// The document browser. It must always see every open document.
pub const LIST_DOCUMENTS: &str = "listDocuments";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandId(CompactString);

impl CommandId {
    pub fn new(name: &str) -> Self {
        Self(CompactString::new(name))
    }

    pub fn list_documents() -> Self {
        Self::new(LIST_DOCUMENTS)
    }

    pub fn name(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for CommandId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl Borrow<str> for CommandId {
    fn borrow(&self) -> &str {
        self.name()
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
