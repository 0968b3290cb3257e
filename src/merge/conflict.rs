//! Conflict detection across the paths shared by A and B

use crate::merge::classify::{classify, PathOutcome};
use crate::types::TreeFingerprints;
use tracing::debug;

/// Collect every path present in both A and B that classifies as a conflict
///
/// The result is sorted. An empty result is the precondition for writing a
/// merged tree.
pub fn detect_conflicts(trees: &TreeFingerprints) -> Vec<String> {
    let conflicts: Vec<String> = trees
        .a
        .iter()
        .filter(|(path, _)| trees.b.contains(path))
        .filter(|(path, _)| {
            let (base, a, b) = trees.lookup(path);
            classify(base, a, b) == PathOutcome::Conflict
        })
        .map(|(path, _)| path.clone())
        .collect();

    debug!(conflict_count = conflicts.len(), "Conflict detection finished");
    conflicts
}
