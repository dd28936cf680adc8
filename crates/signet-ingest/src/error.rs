//! Error types for ingest

use thiserror::Error;

/// Errors that can occur while loading input files
#[derive(Error, Debug)]
pub enum IngestError {
    /// I/O failure reading an input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A row did not match the expected layout; fatal for the whole load
    #[error("Malformed row {line}: {reason}")]
    MalformedRow {
        /// 1-based line number
        line: usize,
        /// What was wrong with the row
        reason: String,
    },

    /// The measurement matrix has no header row
    #[error("Measurement matrix is empty")]
    EmptyMatrix,
}
