use std::io;
use std::path::PathBuf;

use clap::Parser;
use depthscan_scan::{scan_source, ScanConfig, ScanError, ScanReport};
use depthscan_source::{NumberSource, SourceError};
use depthscan_window::WindowError;
use log::{info, LevelFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "depthscan",
    version,
    about = "Count increases of sliding-window sums over a depth report",
    long_about = "depthscan reads one signed integer per line and, for every window size,\n\
        counts how often the sum of the last W values is larger than the previous sum.\n\n\
        Window sizes default to 1 and 3 and can be set with DEPTHSCAN_WINDOWS or --window.\n\n\
        EXAMPLES:\n\
        \n  depthscan input.txt                 Scan with windows 1 and 3\n\
        \n  depthscan -w 5 --json input.txt     Scan one window, print JSON\n\
        \n  cat input.txt | depthscan           Read the report from stdin"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Depth report, one integer per line (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Window size to scan; repeat for several windows
    #[arg(short = 'w', long = "window", value_name = "N")]
    windows: Vec<usize>,

    /// Treat blank lines as errors instead of skipping them
    #[arg(long = "keep-blank")]
    keep_blank: bool,

    /// Reject lines longer than this many bytes
    #[arg(long = "max-line-len", value_name = "BYTES")]
    max_line_len: Option<usize>,

    /// Print the reports as JSON
    #[arg(long)]
    json: bool,
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn);
    builder.parse_env("RUST_LOG");
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        2 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    let _ = builder.try_init();
}

/// Layer command-line flags over `base`.
fn resolve_config(cli: &Cli, mut base: ScanConfig) -> ScanConfig {
    if !cli.windows.is_empty() {
        base.windows = cli.windows.clone();
    }
    if cli.keep_blank {
        base.source.skip_blank_lines = false;
    }
    if let Some(max) = cli.max_line_len {
        base.source.max_line_len = Some(max);
    }
    base
}

fn run_scan(cli: &Cli, config: &ScanConfig) -> Result<Vec<ScanReport>, ScanError> {
    match &cli.input {
        Some(path) => {
            let source = NumberSource::<_, i32>::from_file(path, config.source)?;
            scan_source(source, &config.windows)
        }
        None => {
            info!("reading depth report from stdin");
            let source = NumberSource::<_, i32>::from_reader(io::stdin().lock(), config.source);
            scan_source(source, &config.windows)
        }
    }
}

fn render_reports(reports: &[ScanReport], mode: OutputMode) -> Result<String, serde_json::Error> {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(reports),
        OutputMode::Text => Ok(reports
            .iter()
            .map(|r| {
                format!(
                    "window {}: {} increases across {} full windows",
                    r.window, r.increases, r.full_windows
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// 2 for bad invocations (unreadable input, unusable windows), 1 for scan failures.
fn exit_code(err: &ScanError) -> i32 {
    match err {
        ScanError::Source(SourceError::Open { .. })
        | ScanError::NoWindows
        | ScanError::Window {
            source: WindowError::InvalidCapacity,
            ..
        } => 2,
        _ => 1,
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = resolve_config(&cli, ScanConfig::from_env());
    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };

    let reports = match run_scan(&cli, &config) {
        Ok(reports) => reports,
        Err(e) => {
            eprintln!("error: {e}");
            return exit_code(&e);
        }
    };

    match render_reports(&reports, mode) {
        Ok(out) => {
            println!("{out}");
            0
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            1
        }
    }
}

fn main() {
    std::process::exit(run_cli());
}
