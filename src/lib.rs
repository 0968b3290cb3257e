//! Trimerge: Three-Way Directory Merge
//!
//! Merges two directory trees against their common ancestor. Every file is
//! identified by the BLAKE3 digest of its content; per-path digests decide
//! whether a change is taken from one side, agreed on by both, or a conflict
//! that blocks the merge.

pub mod cli;
pub mod concurrency;
pub mod config;
pub mod error;
pub mod logging;
pub mod merge;
pub mod report;
pub mod tree;
pub mod types;

pub use error::MergeError;
pub use merge::{merge_trees, MergeOutcome, Merger};
