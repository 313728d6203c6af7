use super::*;
use crate::core::command::LIST_DOCUMENTS;

fn docs(raw: &[u64]) -> Vec<DocumentId> {
    raw.iter().copied().map(DocumentId::new).collect()
}

#[test]
fn test_filter_preserves_true_order() {
    let config = ScopeConfig::default();
    let order = docs(&[1, 2, 3, 4]);
    let members = docs(&[2, 4]);
    assert_eq!(filtered_order(&config, None, &members, &order), docs(&[2, 4]));
}

#[test]
fn test_member_order_does_not_affect_result() {
    let config = ScopeConfig::default();
    let order = docs(&[5, 1, 9, 3]);
    let members = docs(&[3, 9, 5]);
    assert_eq!(
        filtered_order(&config, None, &members, &order),
        docs(&[5, 9, 3])
    );
}

#[test]
fn test_exempt_command_bypasses_filter() {
    let config = ScopeConfig::default();
    let order = docs(&[1, 2, 3, 4]);
    let command = CommandId::new(LIST_DOCUMENTS);
    assert_eq!(
        filtered_order(&config, Some(&command), &docs(&[2]), &order),
        order
    );
}

#[test]
fn test_other_command_is_filtered() {
    let config = ScopeConfig::default();
    let order = docs(&[1, 2, 3]);
    let command = CommandId::new("switchDocument");
    assert_eq!(
        filtered_order(&config, Some(&command), &docs(&[3]), &order),
        docs(&[3])
    );
}

#[test]
fn test_no_overlap_yields_empty_order() {
    let config = ScopeConfig::default();
    assert!(filtered_order(&config, None, &docs(&[7, 8]), &docs(&[1, 2])).is_empty());
}
