//! CLI parse: clap types for trimerge. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Trimerge CLI - three-way directory merge
#[derive(Parser)]
#[command(name = "trimerge")]
#[command(about = "Three-way merge of directory trees using content hashes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge A and B against Base into a new Merged_<timestamp> directory
    Merge {
        /// Common ancestor tree
        base: PathBuf,
        /// First modified tree
        a: PathBuf,
        /// Second modified tree
        b: PathBuf,
        /// Directory to create the merged tree in (default: Base's parent)
        #[arg(long)]
        output_parent: Option<PathBuf>,
        /// Write the conflict list to this file when the merge is blocked
        #[arg(long)]
        conflicts_out: Option<PathBuf>,
        /// Fingerprint trees one after another on a single thread
        #[arg(long)]
        sequential: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Report conflicts without merging
    Check {
        base: PathBuf,
        a: PathBuf,
        b: PathBuf,
        /// Write the conflict list to this file when conflicts are found
        #[arg(long)]
        conflicts_out: Option<PathBuf>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the fingerprint map of one tree
    Fingerprint {
        dir: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the global configuration file path
    Path,
}
