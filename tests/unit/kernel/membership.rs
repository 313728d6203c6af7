use super::*;
use crate::kernel::services::adapters::MemoryHost;

struct Fixture {
    host: MemoryHost,
    w1: WorkspaceId,
    w2: WorkspaceId,
}

fn fixture() -> Fixture {
    let mut host = MemoryHost::new();
    let w1 = host.current_workspace();
    let w2 = host.create_workspace();
    Fixture { host, w1, w2 }
}

#[test]
fn test_exclusive_add_moves_document() {
    let Fixture { mut host, w1, w2 } = fixture();
    let d = host.create_document("a.rs");
    let mut store = MembershipStore::new(true);

    assert!(store.add(&mut host, w1, d));
    assert!(store.add(&mut host, w2, d));

    assert_eq!(MembershipStore::stored(&host, w2), vec![d]);
    assert!(!MembershipStore::stored(&host, w1).contains(&d));
    assert_eq!(store.last_owner(d), Some(w2));
}

#[test]
fn test_non_exclusive_add_keeps_both() {
    let Fixture { mut host, w1, w2 } = fixture();
    let d = host.create_document("a.rs");
    let mut store = MembershipStore::new(false);

    store.add(&mut host, w1, d);
    store.add(&mut host, w2, d);

    assert_eq!(MembershipStore::stored(&host, w1), vec![d]);
    assert_eq!(MembershipStore::stored(&host, w2), vec![d]);
    assert_eq!(MembershipStore::workspaces_of(&host, d), vec![w1, w2]);
}

#[test]
fn test_add_is_idempotent() {
    let Fixture { mut host, w1, .. } = fixture();
    let a = host.create_document("a.rs");
    let b = host.create_document("b.rs");
    let mut store = MembershipStore::new(true);

    assert!(store.add(&mut host, w1, a));
    assert!(store.add(&mut host, w1, b));
    let once = MembershipStore::stored(&host, w1);
    assert!(!store.add(&mut host, w1, b));

    assert_eq!(MembershipStore::stored(&host, w1), once);
    assert_eq!(once, vec![a, b]);
}

#[test]
fn test_get_of_unknown_workspace_is_fallback() {
    let Fixture { host, w2, .. } = fixture();
    let store = MembershipStore::new(true);
    assert_eq!(store.get(&host, w2), vec![host.fallback_document()]);
}

#[test]
fn test_get_prunes_without_writing_back() {
    let Fixture { mut host, w1, .. } = fixture();
    let a = host.create_document("a.rs");
    let b = host.create_document("b.rs");
    let mut store = MembershipStore::new(true);
    store.add(&mut host, w1, a);
    store.add(&mut host, w1, b);

    host.destroy_document(a);

    assert_eq!(store.get(&host, w1), vec![b]);
    assert_eq!(MembershipStore::stored(&host, w1), vec![a, b]);

    // Any mutation of the workspace persists the pruned list.
    assert!(!store.remove(&mut host, w1, DocumentId::new(999)));
    assert_eq!(MembershipStore::stored(&host, w1), vec![b]);
}

#[test]
fn test_get_with_only_stale_members_is_fallback() {
    let Fixture { mut host, w1, .. } = fixture();
    let a = host.create_document("a.rs");
    let mut store = MembershipStore::new(true);
    store.add(&mut host, w1, a);
    host.destroy_document(a);

    assert_eq!(store.get(&host, w1), vec![host.fallback_document()]);
}

#[test]
fn test_prune_reports_dropped_entries() {
    let Fixture { mut host, w1, .. } = fixture();
    let a = host.create_document("a.rs");
    let b = host.create_document("b.rs");
    let c = host.create_document("c.rs");
    let mut store = MembershipStore::new(true);
    for d in [a, b, c] {
        store.add(&mut host, w1, d);
    }
    host.destroy_document(a);
    host.destroy_document(c);

    assert_eq!(store.prune(&mut host, w1), 2);
    assert_eq!(MembershipStore::stored(&host, w1), vec![b]);
    assert_eq!(store.prune(&mut host, w1), 0);
}

#[test]
fn test_remove_is_idempotent() {
    let Fixture { mut host, w1, .. } = fixture();
    let a = host.create_document("a.rs");
    let mut store = MembershipStore::new(true);
    store.add(&mut host, w1, a);

    assert!(store.remove(&mut host, w1, a));
    assert!(!store.remove(&mut host, w1, a));
    assert!(MembershipStore::stored(&host, w1).is_empty());
    assert_eq!(store.last_owner(a), None);
}

#[test]
fn test_foreign_property_value_reads_as_empty() {
    let Fixture { mut host, w1, .. } = fixture();
    host.set_workspace_property(w1, MEMBERSHIP_KEY, PropertyValue::Text("junk".into()));
    let store = MembershipStore::new(true);

    assert!(MembershipStore::stored(&host, w1).is_empty());
    assert_eq!(store.get(&host, w1), vec![host.fallback_document()]);
}

#[test]
fn test_violations_detect_shared_live_documents() {
    let Fixture { mut host, w1, w2 } = fixture();
    let a = host.create_document("a.rs");
    let b = host.create_document("b.rs");
    host.set_workspace_property(w1, MEMBERSHIP_KEY, PropertyValue::Documents(vec![a, b]));
    host.set_workspace_property(w2, MEMBERSHIP_KEY, PropertyValue::Documents(vec![b]));
    let store = MembershipStore::new(true);

    assert_eq!(
        store.violations(&host),
        vec![Violation {
            document: b,
            workspaces: vec![w1, w2],
        }]
    );
    assert_eq!(
        store.check_exclusive(&host),
        Err(ScopeError::InvariantViolation {
            document: b,
            workspaces: vec![w1, w2],
        })
    );

    host.destroy_document(b);
    assert!(store.violations(&host).is_empty());
    assert!(store.check_exclusive(&host).is_ok());
}

#[test]
fn test_repair_keeps_first_holder_without_history() {
    let Fixture { mut host, w1, w2 } = fixture();
    let a = host.create_document("a.rs");
    host.set_workspace_property(w1, MEMBERSHIP_KEY, PropertyValue::Documents(vec![a]));
    host.set_workspace_property(w2, MEMBERSHIP_KEY, PropertyValue::Documents(vec![a]));
    let mut store = MembershipStore::new(true);

    let violation = store.violations(&host).remove(0);
    assert_eq!(store.repair(&mut host, &violation), Some(w1));
    assert_eq!(MembershipStore::workspaces_of(&host, a), vec![w1]);
}

#[test]
fn test_repair_keeps_most_recent_owner() {
    let Fixture { mut host, w1, w2 } = fixture();
    let a = host.create_document("a.rs");
    let mut store = MembershipStore::new(true);
    store.add(&mut host, w2, a);
    host.set_workspace_property(w1, MEMBERSHIP_KEY, PropertyValue::Documents(vec![a]));

    let violation = store.violations(&host).remove(0);
    assert_eq!(store.repair(&mut host, &violation), Some(w2));
    assert_eq!(MembershipStore::workspaces_of(&host, a), vec![w2]);
    assert!(store.violations(&host).is_empty());
}

#[test]
fn test_forget_drops_list_and_ownership() {
    let Fixture { mut host, w2, .. } = fixture();
    let a = host.create_document("a.rs");
    let mut store = MembershipStore::new(true);
    store.add(&mut host, w2, a);

    store.forget(&mut host, w2);

    assert_eq!(host.workspace_property(w2, MEMBERSHIP_KEY), None);
    assert_eq!(store.last_owner(a), None);
}

#[test]
fn test_forget_document_clears_owner() {
    let Fixture { mut host, w1, .. } = fixture();
    let a = host.create_document("a.rs");
    let mut store = MembershipStore::new(true);
    store.add(&mut host, w1, a);
    assert_eq!(store.owner_count(), 1);

    assert!(store.forget_document(a));
    assert!(!store.forget_document(a));
    assert_eq!(store.owner_count(), 0);
}

#[test]
fn test_flag_property_under_membership_key_is_replaced_on_add() {
    let Fixture { mut host, w1, w2 } = fixture();
    host.set_workspace_property(w1, MEMBERSHIP_KEY, PropertyValue::Flag(true));
    host.set_workspace_property(w2, "pinned", PropertyValue::Flag(true));
    let a = host.create_document("a.rs");
    let mut store = MembershipStore::new(true);

    assert!(store.add(&mut host, w1, a));
    assert_eq!(
        host.workspace_property(w1, MEMBERSHIP_KEY),
        Some(PropertyValue::Documents(vec![a]))
    );
    assert_eq!(
        host.workspace_property(w2, "pinned"),
        Some(PropertyValue::Flag(true))
    );
}
