//! CLI entry point for the dirviz tool.
//!
//! This binary scans a directory tree, aggregates file counts and sizes
//! by extension, and writes a standalone HTML visualization into the
//! scanned directory.
//!
//! # Usage
//!
//! ```bash
//! # Scan and open the report in a browser
//! dirviz /path/to/directory
//!
//! # Scan without opening the report
//! dirviz /path/to/directory --no-open
//!
//! # Quiet scan with a custom template
//! dirviz /path/to/directory --no-progress --template ./my_template.html
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use dv_core::{Config, ScanResult, format_bytes};
use dv_report::{ReportPayload, Reporter};
use dv_scanner::Scanner;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Analyze directory composition by file extension.
///
/// Walks the given directory, tallies files and bytes per extension, and
/// generates an HTML report with the data embedded.
#[derive(Debug, Parser)]
#[command(name = "dirviz", version, about, long_about = None)]
struct Cli {
    /// Directory to analyze.
    directory: Utf8PathBuf,

    /// Do not open the generated report in a browser.
    #[arg(long)]
    no_open: bool,

    /// Disable progress output.
    #[arg(long)]
    no_progress: bool,

    /// Directory names to exclude from the scan (repeatable).
    #[arg(long = "exclude", value_name = "DIR")]
    exclude: Vec<String>,

    /// Follow symbolic links during traversal.
    #[arg(long)]
    follow_links: bool,

    /// Path to a custom HTML template.
    ///
    /// Must contain the `__DIRVIZ_DATA__` placeholder. Defaults to the
    /// built-in template.
    #[arg(long, env = "DIRVIZ_TEMPLATE")]
    template: Option<Utf8PathBuf>,

    /// Output file path.
    ///
    /// Defaults to `directory_visualization.html` inside the scanned
    /// directory.
    #[arg(short, long)]
    output: Option<Utf8PathBuf>,

    /// Path to a JSON configuration file.
    ///
    /// CLI flags override values from the file.
    #[arg(long, value_name = "FILE", env = "DIRVIZ_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `warn` level by default so
/// progress and summary output stay uncluttered.
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "warn" };
        EnvFilter::new(level)
    });

    // Check if colors should be disabled (flag or NO_COLOR env var)
    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_ansi(use_ansi))
        .with(filter)
        .init();
}

/// Builds a [`Config`] from CLI arguments.
///
/// Starts from the configuration file if one was given, then applies CLI
/// flags on top.
fn build_config(cli: &Cli) -> color_eyre::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    config.scan.root_path.clone_from(&cli.directory);
    config.scan.skip_dirs.extend(cli.exclude.iter().cloned());
    if cli.follow_links {
        config.scan.follow_links = true;
    }
    if cli.template.is_some() {
        config.report.template_path.clone_from(&cli.template);
    }

    Ok(config)
}

/// Resolves the output path for the report.
///
/// An explicit `--output` wins; otherwise the report lands inside the
/// scanned directory under the configured file name.
fn output_path(cli: &Cli, config: &Config) -> Utf8PathBuf {
    cli.output
        .clone()
        .unwrap_or_else(|| cli.directory.join(&config.report.output_file_name))
}

// =============================================================================
// COMMAND IMPLEMENTATION
// =============================================================================

/// Scans the directory, showing a progress line unless suppressed.
fn run_scan(config: &Config, no_progress: bool) -> color_eyre::Result<ScanResult> {
    let scanner = Scanner::new(config.scan.clone())?;

    let result = if no_progress {
        scanner.scan()?
    } else {
        let stderr = std::io::stderr();
        let mut handle = stderr.lock();
        let _ = writeln!(handle, "Analyzing directory: {}", config.scan.root_path);

        let result = scanner.scan_with_progress(|count| {
            let _ = write!(handle, "\r  Processed {count} files...");
            let _ = handle.flush();
        })?;

        let _ = writeln!(handle, "\r  Completed! Processed {} files", result.total_files);
        result
    };

    Ok(result)
}

/// Renders the report and writes it next to the scanned files.
fn run_report(
    config: &Config,
    result: &ScanResult,
    output: &Utf8PathBuf,
) -> color_eyre::Result<()> {
    let reporter = match &config.report.template_path {
        Some(path) => Reporter::from_template_file(path)?,
        None => Reporter::new(),
    };

    // Embed the canonical directory path so the report is self-describing
    // wherever the file ends up.
    let directory = config
        .scan
        .root_path
        .canonicalize_utf8()
        .unwrap_or_else(|_| config.scan.root_path.clone());

    let payload = ReportPayload::new(&directory, result);
    reporter.write_report(&payload, output)?;

    Ok(())
}

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

/// Prints a summary of the scan results.
fn print_summary(result: &ScanResult) {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let _ = writeln!(handle);
    let _ = writeln!(handle, "Directory Composition Summary");
    let _ = writeln!(handle, "=============================");
    let _ = writeln!(handle);
    let _ = writeln!(handle, "Total files:       {}", result.total_files);
    let _ = writeln!(
        handle,
        "Total size:        {} ({} bytes)",
        format_bytes(result.total_bytes),
        result.total_bytes
    );
    let _ = writeln!(handle, "Unique extensions: {}", result.unique_extensions());
    if result.errors_skipped > 0 {
        let _ = writeln!(handle, "Entries skipped:   {}", result.errors_skipped);
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
fn main() -> color_eyre::Result<()> {
    // Install color-eyre first, before any potential failure
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.no_color);

    let config = build_config(&cli)?;
    let output = output_path(&cli, &config);

    info!(directory = %config.scan.root_path, "Starting analysis");

    let result = run_scan(&config, cli.no_progress)?;
    print_summary(&result);
    run_report(&config, &result, &output)?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    let _ = writeln!(handle);
    let _ = writeln!(handle, "Report written to {output}");
    drop(handle);

    if !cli.no_open {
        info!(path = %output, "Opening report in browser");
        if let Err(e) = open::that(output.as_str()) {
            warn!(error = %e, "Could not open report in browser");
        }
    }

    Ok(())
}
