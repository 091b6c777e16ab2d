//! Doctest runner infrastructure
//!
//! Discovery walks the roots, the runner invokes the interpreter on each
//! eligible file, the reporter prints the running commentary, and the tally
//! accumulates the counts.

pub mod discovery;
pub mod reporter;
pub mod runner;
pub mod tally;

pub use reporter::{ReportFormat, TestReporter};
pub use runner::DoctestRunner;
pub use tally::Tally;
