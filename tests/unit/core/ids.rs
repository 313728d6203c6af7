use super::*;

#[test]
fn test_handles_roundtrip_raw_value() {
    assert_eq!(DocumentId::new(7).raw(), 7);
    assert_eq!(WorkspaceId::new(0).raw(), 0);
    assert_eq!(WindowId::new(u64::MAX).raw(), u64::MAX);
}

#[test]
fn test_handles_display_with_kind_prefix() {
    assert_eq!(DocumentId::new(3).to_string(), "doc#3");
    assert_eq!(WorkspaceId::new(4).to_string(), "ws#4");
    assert_eq!(WindowId::new(5).to_string(), "win#5");
}

#[test]
fn test_handles_serialize_as_plain_numbers() {
    let json = serde_json::to_string(&vec![DocumentId::new(1), DocumentId::new(2)]).unwrap();
    assert_eq!(json, "[1,2]");
    let back: Vec<DocumentId> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, vec![DocumentId::new(1), DocumentId::new(2)]);
}
