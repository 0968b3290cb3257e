//! Three-way classification of a single path

use crate::types::Digest;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source tree an overlay copies from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => f.write_str("A"),
            Side::B => f.write_str("B"),
        }
    }
}

/// Merge outcome for one relative path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathOutcome {
    /// Keep whatever Base has (possibly nothing)
    Unchanged,
    ChangedInA,
    ChangedInB,
    /// A and B agree with each other but not with Base
    ChangedIdentically,
    AddedInA,
    AddedInB,
    /// Base, A and B all present and pairwise distinct
    Conflict,
}

impl PathOutcome {
    /// Tree to copy the path from, or `None` when Base is retained
    ///
    /// A convergent edit copies from A. `Conflict` has no source.
    pub fn source(self) -> Option<Side> {
        match self {
            PathOutcome::ChangedInA | PathOutcome::AddedInA | PathOutcome::ChangedIdentically => {
                Some(Side::A)
            }
            PathOutcome::ChangedInB | PathOutcome::AddedInB => Some(Side::B),
            PathOutcome::Unchanged | PathOutcome::Conflict => None,
        }
    }
}

impl fmt::Display for PathOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PathOutcome::Unchanged => "unchanged",
            PathOutcome::ChangedInA => "changed in A",
            PathOutcome::ChangedInB => "changed in B",
            PathOutcome::ChangedIdentically => "changed identically",
            PathOutcome::AddedInA => "added in A",
            PathOutcome::AddedInB => "added in B",
            PathOutcome::Conflict => "conflict",
        };
        f.write_str(name)
    }
}

/// Classify one path from its digest in Base, A and B
///
/// Rules are tried in order and the first match wins. A path added on both
/// sides with different content while absent from Base matches no rule and
/// is `Unchanged`, so it does not appear in the merged tree.
pub fn classify(base: Option<&Digest>, a: Option<&Digest>, b: Option<&Digest>) -> PathOutcome {
    let differs_from_base = |side: &Digest| base.map_or(true, |base| side != base);

    match (base, a, b) {
        (Some(base), Some(a), Some(b)) if a == base && b != base => PathOutcome::ChangedInB,
        (Some(base), Some(a), Some(b)) if b == base && a != base => PathOutcome::ChangedInA,
        (_, Some(a), Some(b)) if a == b && differs_from_base(a) => PathOutcome::ChangedIdentically,
        (_, Some(a), None) if differs_from_base(a) => PathOutcome::AddedInA,
        (_, None, Some(b)) if differs_from_base(b) => PathOutcome::AddedInB,
        (Some(base), Some(a), Some(b)) if a != base && b != base && a != b => PathOutcome::Conflict,
        _ => PathOutcome::Unchanged,
    }
}
