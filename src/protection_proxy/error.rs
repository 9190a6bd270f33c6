//! Error types for file access.

use thiserror::Error;

/// Errors that can occur while reading a [`File`](super::File).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FileError {
    /// The proxy's password did not match its secret.
    #[error("Incorrect password. Access denied!")]
    AccessDenied,

    /// The file could not be read.
    #[error("Unable to read file: {0}")]
    Unreadable(String),
}
