//! Relative path keys and root canonicalization

use crate::error::MergeError;
use std::path::{Component, Path, PathBuf};

/// Build the fingerprint key for `path` relative to `root`
///
/// Components are joined with `/` regardless of platform. Case is preserved.
/// Names that are not valid UTF-8 are rejected, since the key must map back
/// to the same file in every tree.
pub fn relative_key(root: &Path, path: &Path) -> Result<String, MergeError> {
    let rel = path.strip_prefix(root).map_err(|_| {
        MergeError::InvalidPath(format!("{:?} is not below {:?}", path, root))
    })?;

    let mut segments = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(name) => {
                let name = name.to_str().ok_or_else(|| {
                    MergeError::InvalidPath(format!("Non UTF-8 file name in {:?}", path))
                })?;
                segments.push(name);
            }
            Component::CurDir => {}
            _ => {
                return Err(MergeError::InvalidPath(format!(
                    "Unexpected component in relative path {:?}",
                    rel
                )))
            }
        }
    }

    if segments.is_empty() {
        return Err(MergeError::InvalidPath(format!(
            "{:?} has no components below {:?}",
            path, root
        )));
    }

    Ok(segments.join("/"))
}

/// Resolve a fingerprint key back to a filesystem path under `root`
pub fn key_to_path(root: &Path, key: &str) -> PathBuf {
    key.split('/')
        .filter(|s| !s.is_empty())
        .fold(root.to_path_buf(), |acc, segment| acc.join(segment))
}

/// Canonicalize a root directory
///
/// Uses dunce so Windows paths stay free of the `\\?\` prefix.
pub fn canonicalize_root(root: &Path) -> Result<PathBuf, MergeError> {
    dunce::canonicalize(root).map_err(|e| MergeError::io(root, e))
}
