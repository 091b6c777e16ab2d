//! Doctest runner - invoke the interpreter on discovered files

use crate::error::DoctestResult;
use crate::process::{CommandOutput, CommandRunner, SystemRunner};
use crate::testing::discovery::doctest_files;
use crate::testing::reporter::TestReporter;
use crate::testing::tally::Tally;
use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Interpreter used when none is configured
pub const DEFAULT_PYTHON: &str = "python3";

/// Result of checking a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Every example in the file matched its expected output
    Passed(CommandOutput),
    /// The doctest module exited non-zero
    Failed(CommandOutput),
}

impl FileOutcome {
    /// Check if this outcome is a pass
    pub fn is_pass(&self) -> bool {
        matches!(self, FileOutcome::Passed(_))
    }

    /// Captured output of the interpreter
    pub fn output(&self) -> &CommandOutput {
        match self {
            FileOutcome::Passed(output) | FileOutcome::Failed(output) => output,
        }
    }
}

/// Runs `<python> -m doctest [-v] <file>` for each eligible file
pub struct DoctestRunner<R = SystemRunner> {
    runner: R,
    python: String,
    verbose: bool,
}

impl<R: CommandRunner> DoctestRunner<R> {
    /// Create a runner over a custom command runner
    pub fn with_runner(runner: R) -> Self {
        Self {
            runner,
            python: DEFAULT_PYTHON.to_string(),
            verbose: false,
        }
    }

    /// Set the interpreter program
    pub fn with_python(mut self, python: impl Into<String>) -> Self {
        self.python = python.into();
        self
    }

    /// Pass `-v` to the doctest module
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Arguments handed to the interpreter for `file`
    fn doctest_args(&self, file: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["-m".into(), "doctest".into()];
        if self.verbose {
            args.push("-v".into());
        }
        args.push(file.as_os_str().to_os_string());
        args
    }

    /// Run the doctests of one file
    pub fn check_file(&self, file: &Path) -> DoctestResult<FileOutcome> {
        let args = self.doctest_args(file);
        let output = self.runner.run(&self.python, &args)?;

        Ok(if output.success() {
            FileOutcome::Passed(output)
        } else {
            FileOutcome::Failed(output)
        })
    }

    /// Check every eligible file under `dir`, reporting as it goes.
    ///
    /// Failing files are counted and the walk continues. Spawn failures and
    /// unreadable directories stop the walk with an error.
    pub fn run_tests_in_dir<W: Write>(
        &self,
        dir: &Path,
        tally: &mut Tally,
        reporter: &mut TestReporter<W>,
    ) -> DoctestResult<()> {
        debug!(dir = %dir.display(), "walking");

        for file in doctest_files(dir) {
            let file = file?;
            let outcome = self.check_file(&file)?;
            tally.record(&outcome);
            reporter.report_file(&file, &outcome)?;
        }

        Ok(())
    }
}
