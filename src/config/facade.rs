//! Config loading facade: assembles sources and deserializes the result.

use super::merge::merge_policy;
use super::sources::{explicit_file, global_file};
use super::TrimergeConfig;
use crate::error::MergeError;
use std::path::{Path, PathBuf};

/// Loads [`TrimergeConfig`] from defaults and config files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults overlaid with the global config file, if any
    pub fn load() -> Result<TrimergeConfig, MergeError> {
        Self::load_layers(Self::global_config_path().as_deref(), None)
    }

    /// Load defaults, the global config file, then `path` on top
    pub fn load_from_file(path: &Path) -> Result<TrimergeConfig, MergeError> {
        Self::load_layers(Self::global_config_path().as_deref(), Some(path))
    }

    /// Load defaults, then `global` if it exists, then `explicit` (required)
    pub fn load_layers(
        global: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<TrimergeConfig, MergeError> {
        let mut builder = merge_policy::builder_with_defaults()?;
        if let Some(global) = global {
            builder = global_file::add_to_builder(builder, global)?;
        }
        if let Some(explicit) = explicit {
            builder = explicit_file::add_to_builder(builder, explicit)?;
        }
        Self::finish(builder)
    }

    /// Load from `path` when given, otherwise from the default sources
    pub fn load_optional(path: Option<&Path>) -> Result<TrimergeConfig, MergeError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load(),
        }
    }

    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<TrimergeConfig, MergeError> {
        let config: TrimergeConfig = builder.build()?.try_deserialize()?;
        config.validate().map_err(|errors| {
            MergeError::Config(format!(
                "Configuration validation failed:\n{}",
                errors.join("\n")
            ))
        })?;
        Ok(config)
    }
}
