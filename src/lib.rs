//! devhooks: small developer tools for git hooks and linting
//!
//! - `line_filter` strips marker lines from a commit message file in place
//!   (`strip-marker-lines` binary).
//! - `scanner` finds Tailwind utility-class strings in `string_attr "class"`
//!   attributes (`tailwind-lint` binary).

pub mod cli;
pub mod config;
pub mod diff_formatter;
pub mod line_filter;
pub mod logger;
pub mod scanner;

// Re-export commonly used types for convenience
pub use config::Config;
pub use line_filter::{filter_file, filter_lines, line_is_kept, preview_file, FilterSummary, RemovedLine, DEFAULT_MARKER};
pub use scanner::{report, ClassMatch, ClassScanner, FileOutcome, OutputFormat, ScanStats};
