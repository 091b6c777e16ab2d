//! Doctest command - walk the given roots and tally the results

use crate::error::DoctestResult;
use crate::process::{CommandRunner, SystemRunner};
use crate::testing::runner::DEFAULT_PYTHON;
use crate::testing::{DoctestRunner, ReportFormat, Tally, TestReporter};
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, warn};

/// Printed when no directories are given
pub const USAGE: &str = "usage: doctests DIR ...";

/// Arguments for the doctest command
pub struct DoctestArgs {
    /// Root directories, processed in order
    pub dirs: Vec<PathBuf>,
    /// Pass `-v` to doctest and show output of failing files
    pub verbose: bool,
    /// Interpreter program
    pub python: String,
    /// Disable colored output
    pub no_color: bool,
    /// Output in JSON format
    pub json: bool,
}

impl Default for DoctestArgs {
    fn default() -> Self {
        Self {
            dirs: Vec::new(),
            verbose: false,
            python: DEFAULT_PYTHON.to_string(),
            no_color: false,
            json: false,
        }
    }
}

/// Run the doctest command against real processes and stdout
pub fn run(args: DoctestArgs) -> Result<Tally> {
    let stdout = io::stdout();
    let tally = run_with(&args, SystemRunner, stdout.lock()).context("doctest run aborted")?;
    info!(passed = tally.passed, failed = tally.failed, "doctest run finished");
    Ok(tally)
}

/// Run the doctest command with an explicit command runner and output
pub fn run_with<R: CommandRunner, W: Write>(
    args: &DoctestArgs,
    runner: R,
    out: W,
) -> DoctestResult<Tally> {
    let format = if args.json {
        ReportFormat::Json
    } else {
        ReportFormat::Human
    };
    let mut reporter = TestReporter::new(out, format)
        .with_verbose(args.verbose)
        .with_color(!args.no_color);

    let mut tally = Tally::default();

    if args.dirs.is_empty() {
        reporter.report_usage(USAGE)?;
        return Ok(tally);
    }

    let runner = DoctestRunner::with_runner(runner)
        .with_python(args.python.clone())
        .with_verbose(args.verbose);

    for dir in &args.dirs {
        if crate::testing::discovery::is_root(dir) {
            runner.run_tests_in_dir(dir, &mut tally, &mut reporter)?;
        } else {
            warn!(path = %dir.display(), "skipping root that is not a directory");
            reporter.report_not_a_dir(dir)?;
        }
    }

    reporter.finish(&tally)?;
    Ok(tally)
}
