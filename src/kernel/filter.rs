//! Workspace-scoped view of the host's recency order.
//!
//! The kernel never tracks recency itself. It narrows the host's own
//! most-recently-used sequence to the members of one workspace, so the result
//! is always ordered the way the host sees it.

use rustc_hash::FxHashSet;

use crate::core::{CommandId, DocumentId};
use crate::kernel::config::ScopeConfig;

/// Stable filter of `true_order` by `members`.
///
/// An exempt `running_command` gets `true_order` back untouched. The result
/// may be empty when the host order holds none of the members.
pub fn filtered_order(
    config: &ScopeConfig,
    running_command: Option<&CommandId>,
    members: &[DocumentId],
    true_order: &[DocumentId],
) -> Vec<DocumentId> {
    if config.is_exempt(running_command) {
        return true_order.to_vec();
    }

    let members: FxHashSet<DocumentId> = members.iter().copied().collect();
    true_order
        .iter()
        .copied()
        .filter(|doc| members.contains(doc))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/filter.rs"]
mod tests;
