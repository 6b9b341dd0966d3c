/*!
 * Error types for the subedit application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when operating on a subtitle document
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DocumentError {
    /// Error when an operation requires a selection but none is set
    #[error("No line is currently selected")]
    NoLineSelected,

    /// Error when a line index falls outside the document
    #[error("Line index {index} is out of range (document has {len} lines)")]
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// Number of lines in the document
        len: usize,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a document operation
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
