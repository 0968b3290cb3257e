//! Fingerprint verification against BLAKE3 and across trees

use super::test_utils::write_file;
use tempfile::TempDir;
use trimerge::tree::fingerprint::Fingerprinter;
use trimerge::tree::hasher;
use trimerge::tree::walker::WalkerConfig;

/// Content digest matches BLAKE3 directly
#[test]
fn test_content_digest_matches_blake3() {
    let content = b"test content";
    let ours = hasher::hash_bytes(content);
    let direct = blake3::hash(content);
    assert_eq!(ours.as_bytes(), direct.as_bytes());
    assert_eq!(ours.to_hex(), direct.to_hex().to_string());
}

/// Same content in two different trees produces equal maps
#[test]
fn test_equal_trees_equal_maps() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();
    for root in [left.path(), right.path()] {
        write_file(root, "a.txt", "a");
        write_file(root, "sub/b.txt", "b");
    }

    let fingerprinter = Fingerprinter::new();
    assert_eq!(
        fingerprinter.fingerprint(left.path()).unwrap(),
        fingerprinter.fingerprint(right.path()).unwrap()
    );
}

/// Changing one byte changes only that path's digest
#[test]
fn test_content_change_changes_one_entry() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "a.txt", "a");
    write_file(temp.path(), "b.txt", "b");

    let fingerprinter = Fingerprinter::new();
    let before = fingerprinter.fingerprint(temp.path()).unwrap();
    write_file(temp.path(), "b.txt", "c");
    let after = fingerprinter.fingerprint(temp.path()).unwrap();

    assert_eq!(before.get("a.txt"), after.get("a.txt"));
    assert_ne!(before.get("b.txt"), after.get("b.txt"));
}

/// Ignored names are left out of the map
#[test]
fn test_ignore_patterns_apply() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "src/lib.rs", "code");
    write_file(temp.path(), "target/debug/out", "artifact");

    let map = Fingerprinter::new()
        .with_walker_config(WalkerConfig {
            ignore_patterns: vec!["target".to_string()],
        })
        .fingerprint(temp.path())
        .unwrap();

    let paths: Vec<_> = map.paths().cloned().collect();
    assert_eq!(paths, vec!["src/lib.rs"]);
}
