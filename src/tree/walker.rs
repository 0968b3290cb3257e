//! Filesystem walker for enumerating a tree's files and directories

use crate::error::MergeError;
use crate::tree::path;
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::{DirEntry, WalkDir};

/// Filesystem entry types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A regular file (or a symlink to one) with its absolute path and relative key
    File { path: PathBuf, key: String },
    /// A directory with its absolute path and relative key
    Directory { path: PathBuf, key: String },
}

impl Entry {
    pub fn key(&self) -> &str {
        match self {
            Entry::File { key, .. } | Entry::Directory { key, .. } => key,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Entry::File { path, .. } | Entry::Directory { path, .. } => path,
        }
    }
}

/// Filesystem walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Component names to skip entirely (e.g. ".git"). Empty by default so
    /// that a merge sees every file.
    pub ignore_patterns: Vec<String>,
}

/// Filesystem walker
///
/// Symbolic links are never traversed. A link whose target is a regular
/// file is reported as a file; other links and special files are skipped.
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the filesystem and collect all entries below the root
    ///
    /// Returns entries sorted by relative key for determinism. The root
    /// itself is not included.
    pub fn walk(&self) -> Result<Vec<Entry>, MergeError> {
        if !self.root.is_dir() {
            return Err(MergeError::InvalidRoot {
                roots: vec![self.root.clone()],
            });
        }

        let mut entries = Vec::new();
        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .min_depth(1)
            .into_iter()
            .filter_entry(|e| !self.should_ignore(e));

        for entry in walker {
            let entry = entry.map_err(|e| MergeError::Walk {
                root: self.root.clone(),
                message: e.to_string(),
            })?;

            let entry_path = entry.path().to_path_buf();
            let file_type = entry.file_type();

            if file_type.is_dir() {
                let key = path::relative_key(&self.root, &entry_path)?;
                entries.push(Entry::Directory {
                    path: entry_path,
                    key,
                });
            } else if file_type.is_file() || self.is_link_to_file(&entry) {
                let key = path::relative_key(&self.root, &entry_path)?;
                entries.push(Entry::File {
                    path: entry_path,
                    key,
                });
            } else {
                trace!(path = %entry_path.display(), "Skipping non-regular entry");
            }
        }

        entries.sort_by(|a, b| a.key().cmp(b.key()));
        Ok(entries)
    }

    /// Walk and keep only file entries
    pub fn files(&self) -> Result<Vec<Entry>, MergeError> {
        Ok(self
            .walk()?
            .into_iter()
            .filter(|e| matches!(e, Entry::File { .. }))
            .collect())
    }

    fn is_link_to_file(&self, entry: &DirEntry) -> bool {
        entry.path_is_symlink()
            && std::fs::metadata(entry.path())
                .map(|m| m.is_file())
                .unwrap_or(false)
    }

    /// Check if an entry should be ignored based on ignore patterns
    fn should_ignore(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        self.config
            .ignore_patterns
            .iter()
            .any(|pattern| name == pattern.as_str())
    }
}
