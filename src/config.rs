//! Configuration System
//!
//! Layered configuration for merges and logging. Sources, lowest precedence
//! first: built-in defaults, the global config file, an explicit file given
//! on the command line.

use crate::logging::LoggingConfig;
use crate::merge::engine::DEFAULT_OUTPUT_PREFIX;
use crate::tree::fingerprint::default_workers;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrimergeConfig {
    /// Merge behaviour
    #[serde(default)]
    pub merge: MergeSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Merge settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeSettings {
    /// Name prefix of the merged tree directory; a timestamp is appended
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,

    /// Directory the merged tree is created in (default: Base's parent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_parent: Option<PathBuf>,

    /// Fingerprint Base, A and B concurrently
    #[serde(default = "default_true")]
    pub parallel: bool,

    /// Files hashed concurrently per tree when `parallel` is set
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// File or directory names skipped in all three trees and the output
    #[serde(default)]
    pub ignore: Vec<String>,
}

fn default_output_prefix() -> String {
    DEFAULT_OUTPUT_PREFIX.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for MergeSettings {
    fn default() -> Self {
        Self {
            output_prefix: default_output_prefix(),
            output_parent: None,
            parallel: true,
            workers: default_workers(),
            ignore: Vec::new(),
        }
    }
}

impl MergeSettings {
    /// Validate merge settings
    pub fn validate(&self) -> Result<(), String> {
        if self.output_prefix.is_empty() {
            return Err("output_prefix cannot be empty".to_string());
        }
        if self.output_prefix.contains('/') || self.output_prefix.contains('\\') {
            return Err(format!(
                "output_prefix '{}' must not contain a path separator",
                self.output_prefix
            ));
        }
        if self.workers == 0 {
            return Err("workers must be at least 1".to_string());
        }
        if self.ignore.iter().any(|p| p.is_empty()) {
            return Err("ignore patterns cannot be empty".to_string());
        }
        Ok(())
    }
}

impl TrimergeConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if let Err(e) = self.merge.validate() {
            errors.push(format!("merge: {}", e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(format!("logging: {}", e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
