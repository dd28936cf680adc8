//! Error types for export

use signet_domain::ChangeError;
use thiserror::Error;

/// Errors that can occur while writing output artifacts
#[derive(Error, Debug)]
pub enum ExportError {
    /// I/O failure writing an output file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A styled record could not produce a change value
    #[error("Invalid record state: {0}")]
    InvalidState(#[from] ChangeError),
}
