//! End-to-end merge scenarios

use super::test_utils::{read_tree, write_file, MergeFixture};
use std::fs;
use trimerge::merge::{MergeOutcome, Merger, PathOutcome};
use trimerge::tree::fingerprint::Fingerprinter;

fn merge(fx: &MergeFixture) -> MergeOutcome {
    Merger::new()
        .with_output_parent(&fx.out)
        .merge(&fx.base, &fx.a, &fx.b)
        .unwrap()
}

/// Base f=1, A f=2, B f=1: A's change is taken
#[test]
fn test_change_in_a_is_taken() {
    let fx = MergeFixture::new();
    write_file(&fx.base, "f.txt", "1");
    write_file(&fx.a, "f.txt", "2");
    write_file(&fx.b, "f.txt", "1");

    let outcome = merge(&fx);
    let merged = read_tree(outcome.merged_tree().unwrap());
    assert_eq!(merged["f.txt"], "2");
    assert!(outcome.conflicts().is_empty());
}

/// Base f=1, A f=2, B f=3: conflict, nothing written
#[test]
fn test_three_distinct_versions_conflict() {
    let fx = MergeFixture::new();
    write_file(&fx.base, "f.txt", "1");
    write_file(&fx.a, "f.txt", "2");
    write_file(&fx.b, "f.txt", "3");

    let outcome = merge(&fx);
    assert_eq!(
        outcome,
        MergeOutcome::Conflicted {
            conflicts: vec!["f.txt".to_string()]
        }
    );
    assert!(!fx.out.exists());
}

/// A adds g=x: merged tree contains it
#[test]
fn test_addition_in_a_is_taken() {
    let fx = MergeFixture::new();
    write_file(&fx.base, "keep.txt", "k");
    write_file(&fx.a, "keep.txt", "k");
    write_file(&fx.b, "keep.txt", "k");
    write_file(&fx.a, "g.txt", "x");

    let outcome = merge(&fx);
    let merged = read_tree(outcome.merged_tree().unwrap());
    assert_eq!(merged["g.txt"], "x");
    assert_eq!(merged["keep.txt"], "k");
}

/// A adds h=x, B adds h=y, Base lacks h: not a conflict, h left out
#[test]
fn test_independent_double_addition_is_dropped() {
    let fx = MergeFixture::new();
    write_file(&fx.a, "h.txt", "x");
    write_file(&fx.b, "h.txt", "y");

    let outcome = merge(&fx);
    assert!(outcome.conflicts().is_empty());
    let merged = read_tree(outcome.merged_tree().unwrap());
    assert!(!merged.contains_key("h.txt"));
}

/// Merging Base against two untouched copies reproduces Base exactly
#[test]
fn test_merge_of_unmodified_copies_is_identity() {
    let fx = MergeFixture::new();
    for root in [&fx.base, &fx.a, &fx.b] {
        write_file(root, "top.txt", "top");
        write_file(root, "dir/nested/deep.bin", "deep");
        write_file(root, "dir/other.txt", "other");
    }
    fs::create_dir_all(fx.base.join("empty")).unwrap();

    let outcome = merge(&fx);
    let merged_root = outcome.merged_tree().unwrap().to_path_buf();
    assert_eq!(read_tree(&merged_root), read_tree(&fx.base));
    assert!(merged_root.join("empty").is_dir());
    match outcome {
        MergeOutcome::Merged { overlays, .. } => assert!(overlays.is_empty()),
        other => panic!("expected Merged, got {:?}", other),
    }
}

/// Changes on both sides to different files combine
#[test]
fn test_disjoint_changes_combine() {
    let fx = MergeFixture::new();
    for root in [&fx.base, &fx.a, &fx.b] {
        write_file(root, "a_side.txt", "orig");
        write_file(root, "b_side.txt", "orig");
        write_file(root, "both.txt", "orig");
    }
    write_file(&fx.a, "a_side.txt", "from a");
    write_file(&fx.b, "b_side.txt", "from b");
    write_file(&fx.a, "both.txt", "same edit");
    write_file(&fx.b, "both.txt", "same edit");
    write_file(&fx.b, "new/from_b.txt", "added");

    let outcome = merge(&fx);
    let merged = read_tree(outcome.merged_tree().unwrap());
    assert_eq!(merged["a_side.txt"], "from a");
    assert_eq!(merged["b_side.txt"], "from b");
    assert_eq!(merged["both.txt"], "same edit");
    assert_eq!(merged["new/from_b.txt"], "added");

    match outcome {
        MergeOutcome::Merged { overlays, .. } => {
            let outcomes: Vec<_> = overlays.iter().map(|o| (o.path.as_str(), o.outcome)).collect();
            assert_eq!(
                outcomes,
                vec![
                    ("a_side.txt", PathOutcome::ChangedInA),
                    ("b_side.txt", PathOutcome::ChangedInB),
                    ("both.txt", PathOutcome::ChangedIdentically),
                    ("new/from_b.txt", PathOutcome::AddedInB),
                ]
            );
        }
        other => panic!("expected Merged, got {:?}", other),
    }
}

/// A path removed from both A and B survives through the Base seed
#[test]
fn test_base_only_path_is_retained() {
    let fx = MergeFixture::new();
    write_file(&fx.base, "gone_everywhere.txt", "still here");
    write_file(&fx.base, "f.txt", "1");
    write_file(&fx.a, "f.txt", "1");
    write_file(&fx.b, "f.txt", "1");

    let outcome = merge(&fx);
    let merged = read_tree(outcome.merged_tree().unwrap());
    assert_eq!(merged["gone_everywhere.txt"], "still here");
}

/// A path deleted on one side and untouched on the other keeps its Base copy
#[test]
fn test_one_sided_deletion_keeps_base_copy() {
    let fx = MergeFixture::new();
    write_file(&fx.base, "f.txt", "1");
    write_file(&fx.a, "f.txt", "1");

    let outcome = merge(&fx);
    let merged = read_tree(outcome.merged_tree().unwrap());
    assert_eq!(merged["f.txt"], "1");
}

/// Conflicts are listed in sorted order and block the whole merge
#[test]
fn test_conflicts_sorted_and_blocking() {
    let fx = MergeFixture::new();
    for (rel, versions) in [("z/last.txt", ["1", "2", "3"]), ("a/first.txt", ["1", "2", "3"])] {
        write_file(&fx.base, rel, versions[0]);
        write_file(&fx.a, rel, versions[1]);
        write_file(&fx.b, rel, versions[2]);
    }
    write_file(&fx.a, "clean_addition.txt", "x");

    let outcome = merge(&fx);
    assert_eq!(outcome.conflicts(), ["a/first.txt", "z/last.txt"]);
    assert!(outcome.merged_tree().is_none());
}

/// Without an output parent the merged tree is created next to Base
#[test]
fn test_default_output_location() {
    let fx = MergeFixture::new();
    write_file(&fx.base, "f.txt", "1");

    let outcome = Merger::new().merge(&fx.base, &fx.a, &fx.b).unwrap();
    let merged = outcome.merged_tree().unwrap();

    let name = merged.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("Merged_"));
    assert_eq!(name.len(), "Merged_".len() + "YYYYMMDD_HHmmss".len());
    assert_eq!(
        dunce::canonicalize(merged.parent().unwrap()).unwrap(),
        dunce::canonicalize(fx.parent()).unwrap()
    );
}

/// Sequential and parallel fingerprinting produce the same merged tree
#[test]
fn test_sequential_and_parallel_agree() {
    let fx = MergeFixture::new();
    for i in 0..40 {
        let rel = format!("d{}/f{}.txt", i % 5, i);
        write_file(&fx.base, &rel, "base");
        write_file(&fx.a, &rel, if i % 3 == 0 { "a" } else { "base" });
        write_file(&fx.b, &rel, if i % 4 == 1 { "b" } else { "base" });
    }

    let sequential = Merger::new()
        .with_output_parent(fx.out.join("seq"))
        .with_fingerprinter(Fingerprinter::new().with_parallel(false))
        .merge(&fx.base, &fx.a, &fx.b)
        .unwrap();
    let parallel = Merger::new()
        .with_output_parent(fx.out.join("par"))
        .with_fingerprinter(Fingerprinter::new().with_parallel(true).with_workers(3))
        .merge(&fx.base, &fx.a, &fx.b)
        .unwrap();

    assert_eq!(
        read_tree(sequential.merged_tree().unwrap()),
        read_tree(parallel.merged_tree().unwrap())
    );
}
