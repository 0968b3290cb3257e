//! Three-way merge of directory trees
//!
//! Base, A and B are fingerprinted; every path's digests are classified by
//! [`classify`]; any conflict stops the merge before anything is written.
//! Otherwise Base is copied into a fresh output directory and the files that
//! changed on one side (or identically on both) are copied over it.

pub mod classify;
pub mod conflict;
pub mod engine;
pub mod materialize;
pub mod resolve;

pub use classify::{classify, PathOutcome, Side};
pub use conflict::detect_conflicts;
pub use engine::{merge_trees, validate_roots, MergeOutcome, Merger};
pub use materialize::Materializer;
pub use resolve::{resolve, Overlay};
