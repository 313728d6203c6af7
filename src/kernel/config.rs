use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::CommandId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeConfig {
    /// A document belongs to at most one workspace at a time.
    pub exclusive: bool,
    /// Commands that see the host's unfiltered document list.
    pub exempt_commands: FxHashSet<CommandId>,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        let mut exempt_commands = FxHashSet::default();
        exempt_commands.insert(CommandId::list_documents());
        Self {
            exclusive: true,
            exempt_commands,
        }
    }
}

impl ScopeConfig {
    pub fn is_exempt(&self, command: Option<&CommandId>) -> bool {
        command.is_some_and(|cmd| self.exempt_commands.contains(cmd))
    }

    pub fn with_exclusive(mut self, exclusive: bool) -> Self {
        self.exclusive = exclusive;
        self
    }

    pub fn with_exempt_command(mut self, command: impl Into<CommandId>) -> Self {
        self.exempt_commands.insert(command.into());
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/config.rs"]
mod tests;
