use crate::scanner::OutputFormat;
use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "

License: MIT
Rust Edition: 2024"
);

#[derive(Parser, Debug)]
#[command(name = "strip-marker-lines")]
#[command(about = "Remove lines containing a marker word from a commit message file")]
#[command(long_about = "Removes every line that contains the marker (case-insensitive, default \"claude\")
and rewrites the file in place. Line endings and the order of the remaining
lines are preserved. The rewrite goes through a temporary file, so the target
is never left half-written.

Intended as a commit-msg git hook:

  #!/bin/sh
  exec strip-marker-lines \"$1\"

CONFIGURATION:
  ~/.devhooks/config.toml (or $DEVHOOKS_CONFIG)

  [filter]
    marker = \"claude\"

EXAMPLES:
  strip-marker-lines .git/COMMIT_EDITMSG          Filter in place
  strip-marker-lines -d .git/COMMIT_EDITMSG       Show what would be removed
  strip-marker-lines --marker copilot msg.txt     Use another marker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = LONG_VERSION)]
struct FilterCli {
    /// File to filter in place
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Show the lines that would be removed without modifying the file
    #[arg(short = 'd', long = "dry-run")]
    dry_run: bool,

    /// Marker text (overrides the config file)
    #[arg(short, long, value_name = "TEXT")]
    marker: Option<String>,
}

#[derive(Parser, Debug)]
#[command(name = "tailwind-lint")]
#[command(about = "Find string_attr \"class\" values that contain Tailwind utility classes")]
#[command(long_about = "Scans each FILE for `string_attr \"class\" ... \"<classes>\"` attributes whose
value contains a utility-class token (bg-, text-, p-, m-, flex, grid, border,
rounded, shadow, hover:, focus:, w-, h-, gap-, space-, opacity-) and prints
one line per match:

  <file>:<line>:<classes>

Files that cannot be read are reported on stderr and skipped. The exit code
is always 0.

EXAMPLES:
  tailwind-lint src/*.ml                  Plain output
  tailwind-lint --format json src/*.ml    One JSON object per match")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = LONG_VERSION)]
struct ScanCli {
    /// Files to scan, reported in the order given
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Output format for matches
    #[arg(short, long, value_enum, default_value_t = FormatArg::Plain)]
    format: FormatArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// <file>:<line>:<classes>
    Plain,
    /// {"file": ..., "line": ..., "classes": ...}
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterArgs {
    pub file: PathBuf,
    pub dry_run: bool,
    pub marker: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanArgs {
    pub files: Vec<PathBuf>,
    pub format: OutputFormat,
}

pub fn parse_filter_args() -> FilterArgs {
    filter_args_from(FilterCli::parse())
}

pub fn parse_scan_args() -> ScanArgs {
    scan_args_from(ScanCli::parse())
}

/// Parse line filter arguments from an explicit argv (first item is the binary name)
pub fn try_parse_filter_args<I, T>(argv: I) -> Result<FilterArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    FilterCli::try_parse_from(argv).map(filter_args_from)
}

/// Parse scanner arguments from an explicit argv (first item is the binary name)
pub fn try_parse_scan_args<I, T>(argv: I) -> Result<ScanArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    ScanCli::try_parse_from(argv).map(scan_args_from)
}

fn filter_args_from(cli: FilterCli) -> FilterArgs {
    FilterArgs {
        file: cli.file,
        dry_run: cli.dry_run,
        marker: cli.marker,
    }
}

fn scan_args_from(cli: ScanCli) -> ScanArgs {
    ScanArgs {
        files: cli.files,
        format: cli.format.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_requires_file() {
        assert!(try_parse_filter_args(["strip-marker-lines"]).is_err());
    }

    #[test]
    fn test_filter_rejects_extra_files() {
        assert!(try_parse_filter_args(["strip-marker-lines", "a", "b"]).is_err());
    }

    #[test]
    fn test_filter_args() {
        let args = try_parse_filter_args(["strip-marker-lines", "-d", "--marker", "bot", "msg"]).unwrap();
        assert_eq!(
            args,
            FilterArgs {
                file: PathBuf::from("msg"),
                dry_run: true,
                marker: Some("bot".to_string()),
            }
        );
    }

    #[test]
    fn test_scan_accepts_no_files() {
        let args = try_parse_scan_args(["tailwind-lint"]).unwrap();
        assert!(args.files.is_empty());
        assert_eq!(args.format, OutputFormat::Plain);
    }

    #[test]
    fn test_scan_keeps_file_order() {
        let args = try_parse_scan_args(["tailwind-lint", "b.ml", "a.ml", "--format", "json"]).unwrap();
        assert_eq!(args.files, vec![PathBuf::from("b.ml"), PathBuf::from("a.ml")]);
        assert_eq!(args.format, OutputFormat::Json);
    }
}
