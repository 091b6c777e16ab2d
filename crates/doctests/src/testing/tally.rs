//! Pass/fail accumulator threaded through a run

use crate::testing::runner::FileOutcome;
use serde::Serialize;
use std::fmt;

/// Counts of evaluated doctest files
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
}

impl Tally {
    /// Count one evaluated file
    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Passed(_) => self.passed += 1,
            FileOutcome::Failed(_) => self.failed += 1,
        }
    }

    /// Number of files evaluated
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "passed {}, failed {}, total {}",
            self.passed,
            self.failed,
            self.total()
        )
    }
}
