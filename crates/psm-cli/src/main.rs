//! # psm-reqs CLI entry point
//!
//! Parses command-line arguments, ingests the RTM once, and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use psm_cli::config::resolve_reqs_path;
use psm_cli::export::{run_export, ExportArgs};
use psm_cli::inspect::{run_list, run_show, run_summary, ListArgs, ShowArgs};
use psm_rtm::TracingSink;

/// Exit code when `--deny-warnings` is set and ingestion reported anything.
const EXIT_DIAGNOSTICS: u8 = 2;

/// PSM requirements catalog tool.
///
/// Reads the Requirements Traceability Matrix spreadsheet and reports on
/// the requirements it contains.
#[derive(Parser, Debug)]
#[command(name = "psm-reqs", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    /// Path to the dashboard configuration file
    /// (default: psm-dashboard-config.json).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to the RTM spreadsheet or CSV export. Overrides the
    /// configuration file.
    #[arg(long, global = true)]
    reqs: Option<PathBuf>,

    /// Exit with status 2 if ingestion emitted any diagnostics.
    #[arg(long, global = true)]
    deny_warnings: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Requirement counts per family.
    Summary,

    /// One line per requirement.
    List(ListArgs),

    /// Full record for one or more requirement IDs.
    Show(ShowArgs),

    /// Write the catalog as JSON.
    Export(ExportArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_format);

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<u8> {
    let path = resolve_reqs_path(cli.reqs.as_deref(), cli.config.as_deref())?;
    let mut sink = TracingSink::new();
    let catalog = psm_cli::load(&path, &mut sink)?;

    let mut stdout = std::io::stdout().lock();
    let code = match &cli.command {
        Commands::Summary => run_summary(&catalog, sink.emitted(), &mut stdout),
        Commands::List(args) => run_list(args, &catalog, &mut stdout),
        Commands::Show(args) => run_show(args, &catalog, &mut stdout),
        Commands::Export(args) => run_export(args, &catalog, &mut stdout),
    }?;

    if code == 0 && cli.deny_warnings && sink.emitted() > 0 {
        tracing::error!(
            diagnostics = sink.emitted(),
            "ingestion reported diagnostics and --deny-warnings is set"
        );
        return Ok(EXIT_DIAGNOSTICS);
    }
    Ok(code)
}

/// Logs go to stderr. `RUST_LOG` overrides the `-v` level.
fn init_tracing(verbose: u8, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
