//! Per-path overlay plan for a conflict-free merge

use crate::error::MergeError;
use crate::merge::classify::{classify, PathOutcome, Side};
use crate::types::TreeFingerprints;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::trace;

/// One file to copy over the Base seed of the merged tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overlay {
    pub path: String,
    pub side: Side,
    pub outcome: PathOutcome,
}

/// Decide, for every path in A or B, which tree the merged copy comes from
///
/// Paths that keep their Base version (or stay absent) produce no overlay.
/// The result is sorted by path. Meeting a conflict means detection was
/// skipped; it is reported instead of silently dropped.
pub fn resolve(trees: &TreeFingerprints) -> Result<Vec<Overlay>, MergeError> {
    let union: BTreeSet<&String> = trees.a.paths().chain(trees.b.paths()).collect();

    let mut overlays = Vec::new();
    for path in union {
        let (base, a, b) = trees.lookup(path);
        let outcome = classify(base, a, b);
        trace!(path = %path, outcome = %outcome, "Classified path");

        if outcome == PathOutcome::Conflict {
            return Err(MergeError::UnresolvedConflict(path.clone()));
        }
        if let Some(side) = outcome.source() {
            overlays.push(Overlay {
                path: path.clone(),
                side,
                outcome,
            });
        }
    }

    Ok(overlays)
}
