use anyhow::Result;
use devhooks::cli::parse_scan_args;
use devhooks::scanner::{report, ClassScanner};
use devhooks::{config, logger};
use std::io;
use tracing::debug;

fn main() -> Result<()> {
    let args = parse_scan_args();

    if args.files.is_empty() {
        return Ok(());
    }

    let config = config::load_config().unwrap_or_default();
    let _ = logger::init_debug_logging(&config.logging);

    let scanner = ClassScanner::new()?;
    let stats = report(
        scanner.scan_files(&args.files),
        args.format,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    debug!(
        target: "devhooks",
        files_scanned = stats.files_scanned,
        files_failed = stats.files_failed,
        matches = stats.matches,
        "scan finished"
    );

    // Unreadable files are reported but never change the exit code
    Ok(())
}
