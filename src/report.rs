//! Plain-text conflict report: one relative path per line, UTF-8.

use crate::error::MergeError;
use crate::merge::engine::TIMESTAMP_FORMAT;
use chrono::{DateTime, Local};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default report file name for a report written at `now`
pub fn default_report_name(now: DateTime<Local>) -> String {
    format!("Conflicts_{}.txt", now.format(TIMESTAMP_FORMAT))
}

/// Serialize a conflict list: each path followed by `\n`
pub fn render_conflict_report(conflicts: &[String]) -> String {
    conflicts.iter().map(|path| format!("{}\n", path)).collect()
}

/// Write the conflict list to `path`, replacing any existing file
pub fn write_conflict_report(path: &Path, conflicts: &[String]) -> Result<(), MergeError> {
    let file = File::create(path).map_err(|e| MergeError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(render_conflict_report(conflicts).as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| MergeError::io(path, e))
}
