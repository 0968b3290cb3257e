//! CLI route: single route table and run context. Dispatches to merge services and presentation.

use crate::cli::parse::{Commands, ConfigCommands};
use crate::cli::presentation::{
    format_conflicts_json, format_conflicts_text, format_fingerprint_json,
    format_fingerprint_text, format_merge_outcome_json, format_merge_outcome_text,
};
use crate::config::{ConfigLoader, TrimergeConfig};
use crate::error::MergeError;
use crate::merge::{MergeOutcome, Merger};
use crate::report::write_conflict_report;
use crate::tree::fingerprint::Fingerprinter;
use std::path::{Path, PathBuf};
use tracing::info;

/// Process exit status when a merge or check finds conflicts
pub const EXIT_CONFLICTS: i32 = 2;

/// Rendered command result and the exit status it maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub exit_code: i32,
}

impl CommandOutput {
    fn success(text: String) -> Self {
        Self { text, exit_code: 0 }
    }

    fn conflicts(text: String) -> Self {
        Self {
            text,
            exit_code: EXIT_CONFLICTS,
        }
    }
}

/// Runtime context for CLI execution: the loaded configuration.
pub struct RunContext {
    config: TrimergeConfig,
}

impl RunContext {
    /// Create run context from an optional config path. Uses ConfigLoader only.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, MergeError> {
        let config = ConfigLoader::load_optional(config_path.as_deref())?;
        Ok(Self { config })
    }

    pub fn with_config(config: TrimergeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrimergeConfig {
        &self.config
    }

    /// Execute one command
    pub fn execute(&self, command: &Commands) -> Result<CommandOutput, MergeError> {
        match command {
            Commands::Merge {
                base,
                a,
                b,
                output_parent,
                conflicts_out,
                sequential,
                format,
            } => self.handle_merge(
                base,
                a,
                b,
                output_parent.as_deref(),
                conflicts_out.as_deref(),
                *sequential,
                format,
            ),
            Commands::Check {
                base,
                a,
                b,
                conflicts_out,
                format,
            } => self.handle_check(base, a, b, conflicts_out.as_deref(), format),
            Commands::Fingerprint { dir, format } => self.handle_fingerprint(dir, format),
            Commands::Config { command } => self.handle_config(command),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn handle_merge(
        &self,
        base: &Path,
        a: &Path,
        b: &Path,
        output_parent: Option<&Path>,
        conflicts_out: Option<&Path>,
        sequential: bool,
        format: &str,
    ) -> Result<CommandOutput, MergeError> {
        let mut settings = self.config.merge.clone();
        if sequential {
            settings.parallel = false;
        }
        if let Some(parent) = output_parent {
            settings.output_parent = Some(parent.to_path_buf());
        }

        let outcome = Merger::from_settings(&settings).merge(base, a, b)?;
        if let MergeOutcome::Conflicted { conflicts } = &outcome {
            export_conflicts(conflicts_out, conflicts)?;
        }

        let text = match format {
            "json" => format_merge_outcome_json(&outcome)?,
            _ => format_merge_outcome_text(&outcome),
        };
        Ok(match outcome {
            MergeOutcome::Conflicted { .. } => CommandOutput::conflicts(text),
            MergeOutcome::Merged { .. } => CommandOutput::success(text),
        })
    }

    fn handle_check(
        &self,
        base: &Path,
        a: &Path,
        b: &Path,
        conflicts_out: Option<&Path>,
        format: &str,
    ) -> Result<CommandOutput, MergeError> {
        let conflicts = Merger::from_settings(&self.config.merge).check(base, a, b)?;
        if !conflicts.is_empty() {
            export_conflicts(conflicts_out, &conflicts)?;
        }

        let text = match format {
            "json" => format_conflicts_json(&conflicts)?,
            _ => format_conflicts_text(&conflicts),
        };
        Ok(if conflicts.is_empty() {
            CommandOutput::success(text)
        } else {
            CommandOutput::conflicts(text)
        })
    }

    fn handle_fingerprint(&self, dir: &Path, format: &str) -> Result<CommandOutput, MergeError> {
        let map = Fingerprinter::from_settings(&self.config.merge).fingerprint_tree(dir)?;
        let text = match format {
            "json" => format_fingerprint_json(&map)?,
            _ => format_fingerprint_text(&map),
        };
        Ok(CommandOutput::success(text))
    }

    fn handle_config(&self, command: &ConfigCommands) -> Result<CommandOutput, MergeError> {
        let text = match command {
            ConfigCommands::Show => toml::to_string_pretty(&self.config)
                .map_err(|e| MergeError::Serialization(e.to_string()))?,
            ConfigCommands::Path => ConfigLoader::global_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "No configuration directory available".to_string()),
        };
        Ok(CommandOutput::success(text))
    }
}

fn export_conflicts(target: Option<&Path>, conflicts: &[String]) -> Result<(), MergeError> {
    if let Some(path) = target {
        write_conflict_report(path, conflicts)?;
        info!(report = %path.display(), count = conflicts.len(), "Wrote conflict report");
    }
    Ok(())
}
