//! Merge rules: defaults, override order, conflict handling.

use crate::merge::engine::DEFAULT_OUTPUT_PREFIX;
use crate::tree::fingerprint::default_workers;
use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("merge.output_prefix", DEFAULT_OUTPUT_PREFIX)?
        .set_default("merge.parallel", true)?
        .set_default("merge.workers", default_workers() as i64)?
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")
}
