//! Global config file source: $XDG_CONFIG_HOME/trimerge/config.toml (platform config dir)

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File, FileFormat};
use directories::BaseDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path to global config file.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.config_dir().join("trimerge").join("config.toml"))
}

/// Add the global config file at `path` to builder if it exists.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if path.exists() {
        builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
    } else {
        debug!(config_path = %path.display(), "No global configuration file");
    }
    Ok(builder)
}
