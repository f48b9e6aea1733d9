//! Error types for identifier handling

use thiserror::Error;

/// Result type for identifier operations
pub type Result<T> = std::result::Result<T, AgentCtlError>;

/// Identifier parsing and lookup failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AgentCtlError {
    #[error("invalid GUID: {0}")]
    InvalidGuid(String),

    #[error("unknown identifier: {0}")]
    UnknownIdentifier(String),

    #[error("buffer underflow: need {needed} bytes, have {have}")]
    BufferUnderflow { needed: usize, have: usize },
}
