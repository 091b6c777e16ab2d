//! Error types for the doctest runner
//!
//! Only unrecoverable conditions live here. A failing doctest or a root
//! that is not a directory is reported on the console and counted, never
//! raised.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort a doctest run
#[derive(Error, Debug)]
pub enum DoctestError {
    #[error("failed to start `{program}`: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk {root}: {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

/// Result type for doctest operations
pub type DoctestResult<T> = Result<T, DoctestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_failed_names_program() {
        let err = DoctestError::SpawnFailed {
            program: "python3".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        let msg = err.to_string();
        assert!(msg.contains("`python3`"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn test_output_error_from_io() {
        let err: DoctestError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, DoctestError::Output(_)));
        assert!(err.to_string().starts_with("failed to write report"));
    }
}
