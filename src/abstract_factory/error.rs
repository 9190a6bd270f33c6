//! Error types for the Abstract Factory.

use thiserror::Error;

/// Errors that can occur while selecting a plant factory.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FactoryError {
    /// No factory is registered for the requested plant type.
    #[error("No factory for plant type: {0}")]
    UnsupportedPlant(&'static str),
}
