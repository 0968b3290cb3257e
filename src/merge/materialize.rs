//! Writing the merged tree: whole-tree copy and single-file overlays

use crate::error::MergeError;
use crate::tree::path;
use crate::tree::walker::{Entry, Walker, WalkerConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Copies trees and files into a destination root
///
/// The first failing copy aborts the operation. Files already written stay
/// in place.
#[derive(Debug, Clone, Default)]
pub struct Materializer {
    walker_config: WalkerConfig,
}

impl Materializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip the same entries the fingerprinter skips
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }

    /// Replicate every directory and file under `src` into `dst`
    ///
    /// Empty directories are reproduced. Existing destination files are
    /// overwritten. Returns the number of files copied.
    #[instrument(skip_all, fields(src = %src.display(), dst = %dst.display()))]
    pub fn copy_tree(&self, src: &Path, dst: &Path) -> Result<usize, MergeError> {
        fs::create_dir_all(dst).map_err(|e| MergeError::io(dst, e))?;

        let entries = Walker::with_config(src.to_path_buf(), self.walker_config.clone()).walk()?;
        let mut copied = 0;
        for entry in entries {
            match entry {
                Entry::Directory { key, .. } => {
                    let target = path::key_to_path(dst, &key);
                    fs::create_dir_all(&target).map_err(|e| MergeError::io(&target, e))?;
                }
                Entry::File { path: source, key } => {
                    copy_file(&source, &path::key_to_path(dst, &key))?;
                    copied += 1;
                }
            }
        }

        debug!(files = copied, "Copied tree");
        Ok(copied)
    }

    /// Copy the file at `key` from `src_root` to the same key under `dst_root`
    pub fn overlay_file(&self, key: &str, src_root: &Path, dst_root: &Path) -> Result<PathBuf, MergeError> {
        let source = path::key_to_path(src_root, key);
        let target = path::key_to_path(dst_root, key);
        copy_file(&source, &target)?;
        Ok(target)
    }
}

/// Copy one file, creating the target's parent directories
fn copy_file(source: &Path, target: &Path) -> Result<(), MergeError> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| MergeError::io(parent, e))?;
    }
    fs::copy(source, target).map_err(|e| MergeError::io(source, e))?;
    Ok(())
}
