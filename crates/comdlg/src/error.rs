//! Error types for registry lookups

use thiserror::Error;

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, ComdlgError>;

/// Lookup failures against the error code tables
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComdlgError {
    #[error("unknown error code symbol: {0}")]
    UnknownSymbol(String),

    #[error("unknown extended error code: 0x{0:04x}")]
    UnknownCode(u32),
}
