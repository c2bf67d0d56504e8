/// Error taxonomy for loading and rendering twister results
use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce a report from a results file.
///
/// All of these are fatal; a run with failing test configs is a normal
/// outcome and is reported through the return value instead.
#[derive(Debug, Error)]
pub enum DataError {
    /// The results file (or the report file) could not be opened or read
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The results file is not valid JSON, or lacks the expected fields
    #[error("invalid twister results in {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Writing the report to its sink failed
    #[error("cannot write report: {0}")]
    Write(#[from] std::io::Error),
}
