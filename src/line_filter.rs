//! Marker line filtering for commit messages
//!
//! Drops every line that contains the marker (case-insensitive) and writes the
//! remaining lines back to the same file, keeping their terminators and order.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Marker used when neither the command line nor the config sets one
pub const DEFAULT_MARKER: &str = "claude";

/// A line dropped by the filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedLine {
    /// 1-based line number in the original file
    pub line_number: usize,
    /// Line content without its terminator
    pub content: String,
}

/// What a filter pass did to a file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSummary {
    pub kept: usize,
    pub removed: Vec<RemovedLine>,
}

impl FilterSummary {
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }

    pub fn is_unchanged(&self) -> bool {
        self.removed.is_empty()
    }
}

/// Returns true when `line` does not mention `marker`, ignoring case
pub fn line_is_kept(line: &str, marker: &str) -> bool {
    !line.to_lowercase().contains(&marker.to_lowercase())
}

/// Filter `content` line by line.
///
/// Lines keep their original terminator (`\n`, `\r\n`, or none for a final
/// unterminated line), so the output is byte-identical to the input whenever
/// no line is removed.
pub fn filter_lines(content: &str, marker: &str) -> (String, FilterSummary) {
    let needle = marker.to_lowercase();
    let mut output = String::with_capacity(content.len());
    let mut summary = FilterSummary::default();

    for (idx, line) in content.split_inclusive('\n').enumerate() {
        if line.to_lowercase().contains(&needle) {
            summary.removed.push(RemovedLine {
                line_number: idx + 1,
                content: line.trim_end_matches(['\n', '\r']).to_string(),
            });
        } else {
            output.push_str(line);
            summary.kept += 1;
        }
    }

    (output, summary)
}

/// Filter a file in place.
///
/// The file is opened for writing before anything is changed, so a file the
/// caller may not write fails even when no line would be removed. The new
/// content is written through that handle, which keeps the inode, owner, mode
/// and any symlink pointing at it.
pub fn filter_file(file_path: &Path, marker: &str) -> Result<FilterSummary> {
    let content = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

    let mut file = OpenOptions::new()
        .write(true)
        .open(file_path)
        .with_context(|| format!("Failed to open file for writing: {}", file_path.display()))?;

    let (filtered, summary) = filter_lines(&content, marker);

    if summary.is_unchanged() {
        debug!(file = %file_path.display(), "no marker lines, leaving content untouched");
        return Ok(summary);
    }

    file.set_len(0)
        .with_context(|| format!("Failed to truncate file: {}", file_path.display()))?;
    file.write_all(filtered.as_bytes())
        .with_context(|| format!("Failed to write file: {}", file_path.display()))?;
    file.flush()
        .with_context(|| format!("Failed to flush file: {}", file_path.display()))?;

    info!(
        file = %file_path.display(),
        kept = summary.kept,
        removed = summary.removed_count(),
        "stripped marker lines"
    );

    Ok(summary)
}

/// Report what `filter_file` would remove without touching the file
pub fn preview_file(file_path: &Path, marker: &str) -> Result<FilterSummary> {
    let content = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

    let (_, summary) = filter_lines(&content, marker);
    debug!(
        file = %file_path.display(),
        removed = summary.removed_count(),
        "dry run"
    );

    Ok(summary)
}
