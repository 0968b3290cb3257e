//! Error types for the three-way tree merge.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while fingerprinting, resolving or materializing a merge
///
/// A conflict is not an error: it is reported as data through
/// [`crate::merge::MergeOutcome::Conflicted`].
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("Invalid root directory: {}", display_roots(.roots))]
    InvalidRoot { roots: Vec<PathBuf> },

    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk directory {root:?}: {message}")]
    Walk { root: PathBuf, message: String },

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Base directory {0:?} has no parent to place the merged tree in")]
    NoOutputParent(PathBuf),

    #[error("Unresolved conflict at {0}; run conflict detection before resolving")]
    UnresolvedConflict(String),

    #[error("Merge cancelled")]
    Cancelled,

    #[error("Worker failure: {0}")]
    Worker(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl MergeError {
    /// Wrap an I/O error with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MergeError::Io {
            path: path.into(),
            source,
        }
    }
}

fn display_roots(roots: &[PathBuf]) -> String {
    roots
        .iter()
        .map(|r| format!("{:?}", r))
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<config::ConfigError> for MergeError {
    fn from(err: config::ConfigError) -> Self {
        MergeError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for MergeError {
    fn from(err: serde_json::Error) -> Self {
        MergeError::Serialization(err.to_string())
    }
}

impl From<tokio::task::JoinError> for MergeError {
    fn from(err: tokio::task::JoinError) -> Self {
        MergeError::Worker(err.to_string())
    }
}
