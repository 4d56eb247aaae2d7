use crate::line_filter::FilterSummary;
use colored::*;
use std::io::IsTerminal;
use std::path::Path;

pub struct DiffFormatter;

impl DiffFormatter {
    /// Auto-detect if we should use colors
    pub fn should_use_color() -> bool {
        // Check NO_COLOR env var (https://no-color.org/)
        if std::env::var("NO_COLOR").is_ok() {
            return false;
        }

        std::io::stdout().is_terminal()
    }

    /// Dry-run report for the line filter: one `L<n>: - <line>` per removed line
    pub fn format_removed_lines(file_path: &Path, summary: &FilterSummary, use_color: bool) -> String {
        let mut output = String::new();
        let header = file_path.display().to_string();

        if use_color {
            output.push_str(&format!("{}\n", header.bold().cyan()));
        } else {
            output.push_str(&format!("{}\n", header));
        }

        if summary.is_unchanged() {
            output.push_str("No lines would be removed.\n");
            return output;
        }

        for removed in &summary.removed {
            if use_color {
                output.push_str(&format!(
                    "L{}: {} {}\n",
                    removed.line_number,
                    "-".red().bold(),
                    removed.content.red()
                ));
            } else {
                output.push_str(&format!("L{}: - {}\n", removed.line_number, removed.content));
            }
        }

        output.push_str(&format!(
            "{} line(s) would be removed, {} kept\n",
            summary.removed_count(),
            summary.kept
        ));

        output
    }
}
