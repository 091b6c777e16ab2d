use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;
mod process;
mod testing;

/// Run Python doctests over directory trees.
///
/// Walks every DIR recursively, runs `python -m doctest` on each file whose
/// name ends in `.py`, and prints a pass/fail line per file followed by a
/// summary. Failing files never abort the walk, and the exit status does not
/// reflect test failures.
///
/// EXAMPLES:
///     doctests src/                   Test every module under src/
///     doctests src/ lib/ -v           Verbose doctest output
///     doctests . --python python3.11  Use a specific interpreter
///     doctests . --json               Machine-readable report
///
/// ENVIRONMENT VARIABLES:
///     DOCTESTS_PYTHON   Interpreter to run (default: python3)
///     DOCTESTS_VERBOSE  Set to '1' for verbose output by default
///     DOCTESTS_JSON     Set to '1' for JSON output by default
///     DOCTESTS_LOG      Log filter for diagnostics on stderr (default: warn)
///     NO_COLOR          Set to disable colored output
#[derive(Parser)]
#[command(name = "doctests")]
#[command(version)]
struct Cli {
    /// Directories to search for doctest files
    #[arg(value_name = "DIR")]
    dirs: Vec<PathBuf>,
    /// Run doctest with -v and show the output of failing files
    #[arg(long, short = 'v')]
    verbose: bool,
    /// Python interpreter to run doctests with
    #[arg(long, value_name = "PROGRAM")]
    python: Option<String>,
    /// Disable colored output
    #[arg(long)]
    no_color: bool,
    /// Output a JSON report instead of per-file lines
    #[arg(long)]
    json: bool,
    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("DOCTESTS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    // Command-line flags override environment variables
    let cli_config = config::Config::from_env();
    let args = commands::doctest::DoctestArgs {
        dirs: cli.dirs,
        verbose: cli.verbose || cli_config.verbose,
        python: cli.python.unwrap_or(cli_config.python),
        no_color: cli.no_color || cli_config.no_color,
        json: cli.json || cli_config.json,
    };
    commands::doctest::run(args)?;

    Ok(())
}
