//! Test reporter - display doctest results

use crate::testing::runner::FileOutcome;
use crate::testing::tally::Tally;
use colored::*;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

/// How results are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// One line per file as it finishes, then a summary line
    #[default]
    Human,
    /// A single JSON document once the run is over
    Json,
}

/// One evaluated file, kept for JSON output
#[derive(Debug, Serialize)]
struct FileRecord {
    /// Lossy so non-UTF-8 names cannot break serialization
    path: String,
    passed: bool,
    output: String,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    passed: usize,
    failed: usize,
    total: usize,
    results: &'a [FileRecord],
    invalid_roots: &'a [String],
}

/// Test reporter with output configuration
pub struct TestReporter<W: Write> {
    out: W,
    format: ReportFormat,
    /// Show captured output of failing files
    verbose: bool,
    color: bool,
    results: Vec<FileRecord>,
    invalid_roots: Vec<String>,
}

impl<W: Write> TestReporter<W> {
    /// Create a reporter writing to `out`
    pub fn new(out: W, format: ReportFormat) -> Self {
        Self {
            out,
            format,
            verbose: false,
            color: false,
            results: Vec::new(),
            invalid_roots: Vec::new(),
        }
    }

    /// Show captured output of failing files
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Color the pass/fail labels
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn label(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Report one evaluated file
    pub fn report_file(&mut self, path: &Path, outcome: &FileOutcome) -> io::Result<()> {
        let output = outcome.output();

        if self.format == ReportFormat::Json {
            self.results.push(FileRecord {
                path: path.to_string_lossy().into_owned(),
                passed: outcome.is_pass(),
                output: output.stderrout(),
            });
            return Ok(());
        }

        match outcome {
            FileOutcome::Passed(_) => {
                let label = self.label("passed", Color::Green);
                writeln!(self.out, "{} {}", label, path.display())?;
                for stream in [output.stderr.trim(), output.stdout.trim()] {
                    if !stream.is_empty() {
                        writeln!(self.out, "{}", stream)?;
                    }
                }
            }
            FileOutcome::Failed(_) => {
                let label = self.label("failed", Color::Red);
                writeln!(self.out, "{} {}", label, path.display())?;
                if self.verbose {
                    let combined = output.stderrout();
                    if !combined.is_empty() {
                        writeln!(self.out, "{}", combined)?;
                    }
                }
            }
        }

        self.out.flush()
    }

    /// Report a root argument that is not a directory
    pub fn report_not_a_dir(&mut self, path: &Path) -> io::Result<()> {
        if self.format == ReportFormat::Json {
            self.invalid_roots
                .push(path.to_string_lossy().into_owned());
            return Ok(());
        }

        let label = self.label("not a dir:", Color::Yellow);
        writeln!(self.out, "{} {}", label, path.display())
    }

    /// Print the usage line
    pub fn report_usage(&mut self, usage: &str) -> io::Result<()> {
        writeln!(self.out, "{}", usage)
    }

    /// Print the final summary
    pub fn finish(&mut self, tally: &Tally) -> io::Result<()> {
        match self.format {
            ReportFormat::Human => writeln!(self.out, "{}", tally)?,
            ReportFormat::Json => {
                let report = JsonReport {
                    passed: tally.passed,
                    failed: tally.failed,
                    total: tally.total(),
                    results: &self.results,
                    invalid_roots: &self.invalid_roots,
                };
                let json = serde_json::to_string_pretty(&report)
                    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
                writeln!(self.out, "{}", json)?;
            }
        }
        self.out.flush()
    }

    /// Consume the reporter, returning the writer
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
