//! CLI domain: parse, route, output, and presentation only.
//! Merge logic lives in `crate::merge`; the route table only calls into it.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, ConfigCommands};
pub use presentation::{
    format_conflicts_json, format_conflicts_text, format_fingerprint_json,
    format_fingerprint_text, format_merge_outcome_json, format_merge_outcome_text,
};
pub use route::{CommandOutput, RunContext, EXIT_CONFLICTS};
