//! Error types for the resolver

use thiserror::Error;

/// Errors that can occur while loading the knowledge base
#[derive(Error, Debug)]
pub enum ResolveError {
    /// I/O failure reading the knowledge-base table
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A knowledge-base line did not match the expected layout
    #[error("Malformed knowledge-base line {line}: {reason}")]
    MalformedLine {
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        reason: String,
    },
}
