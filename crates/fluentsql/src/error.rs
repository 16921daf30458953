//! Error types for fluentsql

use thiserror::Error;

/// Result type alias for fluentsql operations
pub type QbResult<T> = Result<T, QbError>;

/// Errors raised while configuring, compiling or executing a statement
#[derive(Debug, Error)]
pub enum QbError {
    /// Structural misuse of the builder
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An entry reached the compiler in a shape it cannot render
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Malformed SQL string literal
    #[error("Invalid literal: {0}")]
    InvalidLiteral(String),

    /// Error reported by the backend
    #[error("Query error: {0}")]
    Query(#[from] tokio_postgres::Error),

    /// Row not found
    #[error("Not found: {0}")]
    NotFound(String),
}

impl QbError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an invariant violation error
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation(message.into())
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Check if this is a configuration error
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Check if this is an invariant violation
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InvariantViolation(_))
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
