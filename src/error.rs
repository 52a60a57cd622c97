//! Error types for the snag CLI.
//!
//! Uses thiserror for derive macros. Every variant carries a short,
//! component-prefixed message and maps to a distinct exit code.
//!
//! Operator cancellation is deliberately NOT an error: the picker reports it
//! as an [`Outcome`](crate::select::Outcome) and the process exits cleanly
//! with no output.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for snag operations.
#[derive(Error, Debug)]
pub enum SnagError {
    /// Bad arguments or invalid configuration.
    #[error("{0}")]
    User(String),

    /// Template load, parse, or render failure.
    #[error("oneliners: {0}")]
    Template(String),

    /// Filesystem walk failure other than per-entry permission denial.
    #[error("scan: {0}")]
    Enumeration(String),

    /// Interactive picker failure other than operator cancellation.
    #[error("picker: {0}")]
    Selector(String),

    /// The enumerated tree contained no files to pick from.
    #[error("no files to pick: {0}")]
    NoItems(String),
}

impl SnagError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SnagError::User(_) => exit_codes::USER_ERROR,
            SnagError::Template(_) => exit_codes::TEMPLATE_FAILURE,
            SnagError::Enumeration(_) => exit_codes::SCAN_FAILURE,
            SnagError::Selector(_) => exit_codes::PICKER_FAILURE,
            SnagError::NoItems(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for snag operations.
pub type Result<T> = std::result::Result<T, SnagError>;
