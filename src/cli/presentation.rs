//! CLI presentation: text and JSON rendering of merge results.

use crate::error::MergeError;
use crate::merge::MergeOutcome;
use crate::types::FingerprintMap;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;

pub fn format_merge_outcome_text(outcome: &MergeOutcome) -> String {
    match outcome {
        MergeOutcome::Conflicted { conflicts } => format_conflicts_text(conflicts),
        MergeOutcome::Merged {
            merged_tree,
            overlays,
        } => {
            let mut s = format!(
                "{} {}",
                "Merge completed:".green().bold(),
                merged_tree.display()
            );
            if overlays.is_empty() {
                s.push_str("\n  No changes from A or B; merged tree matches Base.");
            } else {
                s.push_str(&format!("\n  Applied {} change(s):", overlays.len()));
                for overlay in overlays {
                    s.push_str(&format!(
                        "\n  {} {:<20} {}",
                        overlay.side,
                        overlay.outcome.to_string(),
                        overlay.path
                    ));
                }
            }
            s
        }
    }
}

pub fn format_merge_outcome_json(outcome: &MergeOutcome) -> Result<String, MergeError> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

pub fn format_conflicts_text(conflicts: &[String]) -> String {
    if conflicts.is_empty() {
        return format!("{}", "No conflicts.".green());
    }
    let mut lines = vec![format!(
        "{} ({}), merge not performed:",
        "Conflicts detected".red().bold(),
        conflicts.len()
    )];
    lines.extend(conflicts.iter().map(|path| format!("  {}", path)));
    lines.join("\n")
}

pub fn format_conflicts_json(conflicts: &[String]) -> Result<String, MergeError> {
    let out = json!({
        "conflict_count": conflicts.len(),
        "conflicts": conflicts,
    });
    Ok(serde_json::to_string_pretty(&out)?)
}

pub fn format_fingerprint_text(map: &FingerprintMap) -> String {
    if map.is_empty() {
        return "No files.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Path", "Digest"]);
    for (path, digest) in map.iter() {
        table.add_row(vec![path.clone(), digest.to_hex()]);
    }
    format!("{}\n{} file(s)", table, map.len())
}

pub fn format_fingerprint_json(map: &FingerprintMap) -> Result<String, MergeError> {
    Ok(serde_json::to_string_pretty(map)?)
}
