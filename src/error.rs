//! Fatal error taxonomy. Probe failures are not errors and never show up here.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ValidatorError {
    #[error("attempts must be > 0 (got {0})")]
    InvalidAttempts(i64),

    #[error("attempts must be at most {} (got {0})", u32::MAX)]
    AttemptsOutOfRange(i64),

    #[error("timeout must be a finite, non-negative number of seconds (got {0})")]
    InvalidTimeout(f64),

    #[error("failed to read input file {path}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("output file {path} already exists")]
    OutputExists { path: PathBuf },

    #[error("failed to write output file {path}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
