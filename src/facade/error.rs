//! Error types for the preference store.

use thiserror::Error;

/// Errors that can occur while committing cached preferences.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The cache could not be rendered for commit.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
