//! Merge entry point: validate, fingerprint, detect, seed, overlay

use crate::concurrency::CancelToken;
use crate::config::MergeSettings;
use crate::error::MergeError;
use crate::merge::conflict::detect_conflicts;
use crate::merge::materialize::Materializer;
use crate::merge::resolve::{resolve, Overlay};
use crate::merge::Side;
use crate::tree::fingerprint::Fingerprinter;
use crate::tree::path::canonicalize_root;
use crate::tree::walker::WalkerConfig;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Default name prefix of the merged tree directory
pub const DEFAULT_OUTPUT_PREFIX: &str = "Merged_";

/// Timestamp suffix format of generated names (local time, second precision)
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Result of a merge attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MergeOutcome {
    /// Conflicts were found; nothing was written
    Conflicted { conflicts: Vec<String> },
    /// The merged tree was fully materialized
    Merged {
        merged_tree: PathBuf,
        overlays: Vec<Overlay>,
    },
}

impl MergeOutcome {
    pub fn conflicts(&self) -> &[String] {
        match self {
            MergeOutcome::Conflicted { conflicts } => conflicts,
            MergeOutcome::Merged { .. } => &[],
        }
    }

    pub fn merged_tree(&self) -> Option<&Path> {
        match self {
            MergeOutcome::Merged { merged_tree, .. } => Some(merged_tree),
            MergeOutcome::Conflicted { .. } => None,
        }
    }
}

/// Three-way directory merge
///
/// One `Merger` may run several merges, but merges into the same output
/// directory must not overlap.
#[derive(Debug, Clone)]
pub struct Merger {
    fingerprinter: Fingerprinter,
    materializer: Materializer,
    output_prefix: String,
    output_parent: Option<PathBuf>,
    cancel: CancelToken,
}

impl Default for Merger {
    fn default() -> Self {
        let cancel = CancelToken::new();
        Self {
            fingerprinter: Fingerprinter::new().with_cancel_token(cancel.clone()),
            materializer: Materializer::new(),
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            output_parent: None,
            cancel,
        }
    }
}

impl Merger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a merger from loaded settings
    pub fn from_settings(settings: &MergeSettings) -> Self {
        let walker_config = WalkerConfig {
            ignore_patterns: settings.ignore.clone(),
        };
        let cancel = CancelToken::new();
        let fingerprinter = Fingerprinter::from_settings(settings).with_cancel_token(cancel.clone());

        Self {
            fingerprinter,
            materializer: Materializer::new().with_walker_config(walker_config),
            output_prefix: settings.output_prefix.clone(),
            output_parent: settings.output_parent.clone(),
            cancel,
        }
    }

    pub fn with_fingerprinter(mut self, fingerprinter: Fingerprinter) -> Self {
        self.fingerprinter = fingerprinter.with_cancel_token(self.cancel.clone());
        self
    }

    /// Directory the merged tree is created in, instead of Base's parent
    pub fn with_output_parent(mut self, parent: impl Into<PathBuf>) -> Self {
        self.output_parent = Some(parent.into());
        self
    }

    pub fn with_output_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.output_prefix = prefix.into();
        self
    }

    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.fingerprinter = self.fingerprinter.with_cancel_token(cancel.clone());
        self.cancel = cancel;
        self
    }

    /// Token that cancels this merger's in-flight work
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Detect conflicts without writing anything
    #[instrument(skip_all, fields(base = %base.display(), a = %a.display(), b = %b.display()))]
    pub fn check(&self, base: &Path, a: &Path, b: &Path) -> Result<Vec<String>, MergeError> {
        validate_roots(base, a, b)?;
        let trees = self.fingerprinter.fingerprint_trees(base, a, b)?;
        Ok(detect_conflicts(&trees))
    }

    /// Merge A and B against Base into a new timestamped directory
    pub fn merge(&self, base: &Path, a: &Path, b: &Path) -> Result<MergeOutcome, MergeError> {
        self.merge_at(base, a, b, Local::now())
    }

    /// Merge using `now` for the output directory name
    #[instrument(skip_all, fields(base = %base.display(), a = %a.display(), b = %b.display()))]
    pub fn merge_at(
        &self,
        base: &Path,
        a: &Path,
        b: &Path,
        now: DateTime<Local>,
    ) -> Result<MergeOutcome, MergeError> {
        let start = Instant::now();
        validate_roots(base, a, b)?;

        let trees = self.fingerprinter.fingerprint_trees(base, a, b)?;
        info!(
            base_files = trees.base.len(),
            a_files = trees.a.len(),
            b_files = trees.b.len(),
            "Fingerprinted trees"
        );

        let conflicts = detect_conflicts(&trees);
        if !conflicts.is_empty() {
            warn!(conflict_count = conflicts.len(), "Merge blocked by conflicts");
            return Ok(MergeOutcome::Conflicted { conflicts });
        }

        let overlays = resolve(&trees)?;
        self.cancel.check()?;

        let merged_tree = self.output_path(base, now)?;
        prepare_output_dir(&merged_tree)?;

        let seeded = self.materializer.copy_tree(base, &merged_tree)?;
        debug!(files = seeded, "Seeded merged tree from base");

        for overlay in &overlays {
            let src_root = match overlay.side {
                Side::A => a,
                Side::B => b,
            };
            self.materializer
                .overlay_file(&overlay.path, src_root, &merged_tree)?;
            debug!(path = %overlay.path, side = %overlay.side, outcome = %overlay.outcome, "Applied overlay");
        }

        info!(
            merged_tree = %merged_tree.display(),
            overlays = overlays.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Merge completed"
        );
        Ok(MergeOutcome::Merged {
            merged_tree,
            overlays,
        })
    }

    /// Path of the merged tree for a merge started at `now`
    ///
    /// `<parent>/<prefix><YYYYMMDD_HHmmss>` where parent is the configured
    /// output parent or the directory containing Base.
    pub fn output_path(&self, base: &Path, now: DateTime<Local>) -> Result<PathBuf, MergeError> {
        let parent = match &self.output_parent {
            Some(parent) => parent.clone(),
            None => {
                let base = canonicalize_root(base)?;
                base.parent()
                    .map(Path::to_path_buf)
                    .ok_or(MergeError::NoOutputParent(base.clone()))?
            }
        };
        Ok(parent.join(format!(
            "{}{}",
            self.output_prefix,
            now.format(TIMESTAMP_FORMAT)
        )))
    }
}

/// Merge with default settings
pub fn merge_trees(base: &Path, a: &Path, b: &Path) -> Result<MergeOutcome, MergeError> {
    Merger::new().merge(base, a, b)
}

/// Check that all three roots exist and are directories
///
/// Every invalid root is reported in a single error.
pub fn validate_roots(base: &Path, a: &Path, b: &Path) -> Result<(), MergeError> {
    let roots: Vec<PathBuf> = [base, a, b]
        .into_iter()
        .filter(|root| !root.is_dir())
        .map(Path::to_path_buf)
        .collect();

    if roots.is_empty() {
        Ok(())
    } else {
        Err(MergeError::InvalidRoot { roots })
    }
}

/// Replace any existing directory at `path` with an empty one
///
/// A failed removal is only logged: the create step then fails on the
/// leftover directory and reports it.
fn prepare_output_dir(path: &Path) -> Result<(), MergeError> {
    if path.exists() {
        if let Err(e) = fs::remove_dir_all(path) {
            warn!(path = %path.display(), error = %e, "Failed to remove existing output directory");
        }
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| MergeError::io(parent, e))?;
    }
    fs::create_dir(path).map_err(|e| MergeError::io(path, e))
}
