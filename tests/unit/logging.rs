use super::*;
use tempfile::tempdir;

#[test]
fn test_init_installs_once() {
    let dir = tempdir().unwrap();
    let log_dir = dir.path().join("logs");

    let guard = init(&log_dir).expect("first init installs subscriber");
    assert_eq!(guard.log_dir(), log_dir.as_path());
    assert!(log_dir.is_dir());

    assert!(init(&log_dir).is_none());
}
