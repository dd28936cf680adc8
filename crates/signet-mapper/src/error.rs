//! Error types for the mapper

use signet_domain::ChangeError;
use thiserror::Error;

/// Errors that can occur during network mapping
#[derive(Error, Debug)]
pub enum MapperError {
    /// A record was queried for its change value in an invalid state
    #[error("Invalid record state: {0}")]
    InvalidState(#[from] ChangeError),

    /// I/O failure reading the regulator table
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A regulator-table line did not match the expected layout
    #[error("Malformed regulator line {line}: {reason}")]
    MalformedLine {
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        reason: String,
    },
}
