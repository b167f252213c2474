//! Error types for gist-core.

use thiserror::Error;

/// Result type alias using the core error type.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised by the core text model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid text id: {0}")]
    InvalidId(String),
}
