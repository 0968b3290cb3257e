//! Shared test utilities for integration tests
//!
//! Builds Base/A/B tree triples in a temporary directory and reads merged
//! output back as path → content maps.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Base, A and B trees plus a dedicated output parent, all inside one temp dir
pub struct MergeFixture {
    _temp: TempDir,
    pub base: PathBuf,
    pub a: PathBuf,
    pub b: PathBuf,
    pub out: PathBuf,
}

impl MergeFixture {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("base");
        let a = temp.path().join("a");
        let b = temp.path().join("b");
        let out = temp.path().join("out");
        for dir in [&base, &a, &b] {
            fs::create_dir_all(dir).unwrap();
        }
        Self {
            _temp: temp,
            base,
            a,
            b,
            out,
        }
    }

    /// Directory that would hold a merged tree created with default settings
    pub fn parent(&self) -> &Path {
        self._temp.path()
    }
}

/// Write `content` at `rel` (forward slashes) under `root`, creating parents
pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = rel.split('/').fold(root.to_path_buf(), |acc, s| acc.join(s));
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Read every file below `root` into a relative path → content map
pub fn read_tree(root: &Path) -> BTreeMap<String, String> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e
                .path()
                .strip_prefix(root)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_string_lossy().to_string())
                .collect::<Vec<_>>()
                .join("/");
            (rel, fs::read_to_string(e.path()).unwrap())
        })
        .collect()
}
