use anyhow::Result;
use devhooks::cli::parse_filter_args;
use devhooks::diff_formatter::DiffFormatter;
use devhooks::{config, line_filter, logger};

fn main() -> Result<()> {
    let args = parse_filter_args();

    // A broken config must not block a commit
    let config = config::load_config().unwrap_or_default();
    // Logging is best effort
    let _ = logger::init_debug_logging(&config.logging);

    let marker = config::resolve_marker(args.marker, &config)?;

    if args.dry_run {
        let summary = line_filter::preview_file(&args.file, &marker)?;
        let use_color = DiffFormatter::should_use_color();
        print!("{}", DiffFormatter::format_removed_lines(&args.file, &summary, use_color));
        return Ok(());
    }

    line_filter::filter_file(&args.file, &marker)?;

    Ok(())
}
