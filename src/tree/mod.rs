//! Directory trees as fingerprint maps
//!
//! Walks a tree and maps every file's root-relative path to the BLAKE3
//! digest of its content.

pub mod fingerprint;
pub mod hasher;
pub mod path;
pub mod walker;

pub use fingerprint::Fingerprinter;
