//! Tailwind class string scanner
//!
//! Finds `string_attr "class" ... "<classes>"` attributes whose value contains
//! at least one utility-class token and reports where they are.

use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// The attribute pattern.
///
/// Free-spacing mode also strips whitespace inside character classes, hence
/// `\x20` for the literal space.
const CLASS_ATTR_PATTERN: &str = r#"(?msx)
    string_attr
    \s+
    "class"
    .*?
    "
    (?P<classes>
        [^"]*?
        (?P<keyword>
            bg- | text- | p[xy]*- | m[xy]*- | flex | grid | border | rounded
            | shadow | hover: | focus: | w- | h- | gap- | space- | opacity-
        )
        [^"\x20]*?
    )
    "
"#;

/// A located class string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassMatch {
    pub file: PathBuf,
    /// 1-based
    pub line: usize,
    pub classes: String,
}

impl ClassMatch {
    /// `<file>:<line>:<classes>`
    pub fn to_plain_line(&self) -> String {
        format!("{}:{}:{}", self.file.display(), self.line, self.classes)
    }
}

/// Result of scanning one file
#[derive(Debug)]
pub enum FileOutcome {
    Matches(Vec<ClassMatch>),
    NotFound,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

/// Totals gathered while reporting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub files_scanned: usize,
    pub files_failed: usize,
    pub matches: usize,
}

pub struct ClassScanner {
    pattern: Regex,
}

impl ClassScanner {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(CLASS_ATTR_PATTERN).context("Failed to compile class attribute pattern")?;
        Ok(Self { pattern })
    }

    /// All matches in `content`, in order of their start offset
    pub fn scan_str(&self, file: &Path, content: &str) -> Vec<ClassMatch> {
        self.pattern
            .captures_iter(content)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let classes = caps.name("classes")?;
                Some(ClassMatch {
                    file: file.to_path_buf(),
                    line: line_number_at(content, whole.start()),
                    classes: classes.as_str().to_string(),
                })
            })
            .collect()
    }

    pub fn scan_file(&self, file: &Path) -> FileOutcome {
        match fs::read_to_string(file) {
            Ok(content) => {
                let matches = self.scan_str(file, &content);
                debug!(file = %file.display(), matches = matches.len(), "scanned");
                FileOutcome::Matches(matches)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(file = %file.display(), "file not found");
                FileOutcome::NotFound
            }
            Err(e) => {
                warn!(file = %file.display(), error = %e, "failed to read file");
                FileOutcome::Failed(e.to_string())
            }
        }
    }

    /// Scan every path in the order given; a failing file never stops the run.
    ///
    /// Lazy: a file is only read when the iterator reaches it.
    pub fn scan_files<'a, P: AsRef<Path>>(
        &'a self,
        files: &'a [P],
    ) -> impl Iterator<Item = (PathBuf, FileOutcome)> + 'a {
        files
            .iter()
            .map(|f| (f.as_ref().to_path_buf(), self.scan_file(f.as_ref())))
    }
}

/// 1-based line number of byte `offset` in `content`
pub fn line_number_at(content: &str, offset: usize) -> usize {
    content.as_bytes()[..offset].iter().filter(|&&b| b == b'\n').count() + 1
}

/// Write matches to `out` and diagnostics to `err`, one file at a time
pub fn report<I, O, E>(
    outcomes: I,
    format: OutputFormat,
    out: &mut O,
    err: &mut E,
) -> io::Result<ScanStats>
where
    I: IntoIterator<Item = (PathBuf, FileOutcome)>,
    O: Write,
    E: Write,
{
    let mut stats = ScanStats::default();

    for (file, outcome) in outcomes {
        match outcome {
            FileOutcome::Matches(matches) => {
                stats.files_scanned += 1;
                stats.matches += matches.len();
                for m in &matches {
                    match format {
                        OutputFormat::Plain => writeln!(out, "{}", m.to_plain_line())?,
                        OutputFormat::Json => {
                            let json = serde_json::to_string(m).map_err(io::Error::other)?;
                            writeln!(out, "{}", json)?;
                        }
                    }
                }
            }
            FileOutcome::NotFound => {
                stats.files_failed += 1;
                writeln!(err, "Error: File not found {}", file.display())?;
            }
            FileOutcome::Failed(reason) => {
                stats.files_failed += 1;
                writeln!(err, "Error processing file {}: {}", file.display(), reason)?;
            }
        }
        out.flush()?;
    }

    Ok(stats)
}
