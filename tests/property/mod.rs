//! Property-based tests for determinism and classification guarantees

mod determinism;
