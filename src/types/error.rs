//! Error types for the dgraph library.

use thiserror::Error;

/// All errors that can occur in the dgraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A mutation was given an absent vertex identity.
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed line in an edge-list file.
    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// Convenience result type for dgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
