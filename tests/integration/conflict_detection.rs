//! Conflict detection through the public check entry point

use super::test_utils::{write_file, MergeFixture};
use trimerge::error::MergeError;
use trimerge::merge::Merger;

#[test]
fn test_check_reports_only_true_conflicts() {
    let fx = MergeFixture::new();
    write_file(&fx.base, "conflict.txt", "1");
    write_file(&fx.a, "conflict.txt", "2");
    write_file(&fx.b, "conflict.txt", "3");

    write_file(&fx.base, "convergent.txt", "1");
    write_file(&fx.a, "convergent.txt", "2");
    write_file(&fx.b, "convergent.txt", "2");

    write_file(&fx.a, "double_add.txt", "x");
    write_file(&fx.b, "double_add.txt", "y");

    let conflicts = Merger::new().check(&fx.base, &fx.a, &fx.b).unwrap();
    assert_eq!(conflicts, vec!["conflict.txt"]);
    assert!(!fx.out.exists());
}

#[test]
fn test_check_empty_when_a_equals_b() {
    let fx = MergeFixture::new();
    write_file(&fx.base, "f.txt", "old");
    write_file(&fx.a, "f.txt", "new");
    write_file(&fx.b, "f.txt", "new");

    assert!(Merger::new().check(&fx.base, &fx.a, &fx.b).unwrap().is_empty());
}

#[test]
fn test_invalid_roots_reported_together() {
    let fx = MergeFixture::new();
    let missing_base = fx.base.join("nope");
    let missing_b = fx.b.join("nope");

    match Merger::new().merge(&missing_base, &fx.a, &missing_b) {
        Err(MergeError::InvalidRoot { roots }) => {
            assert_eq!(roots, vec![missing_base, missing_b]);
        }
        other => panic!("expected InvalidRoot, got {:?}", other),
    }
}
