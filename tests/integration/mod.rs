//! Integration tests for the three-way directory merge

mod conflict_detection;
mod merge_scenarios;
mod test_utils;
mod tree_fingerprint;
