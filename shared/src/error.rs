//! Unified error type for the POS terminal
//!
//! Every recoverable failure in the core is a value of [`PosError`].
//! The console layer turns them into one-line redisplay messages; nothing
//! here carries a stack trace or terminates the process.
//!
//! # Error classes
//!
//! | Variant | Recovery |
//! |---------|----------|
//! | `InvalidIndex` / `InvalidQuantity` | re-prompt the same screen |
//! | `Validation` | re-prompt the same field |
//! | `Aborted` | discard the in-progress aggregate |
//! | `Storage` | reads degrade to empty; writes are logged and surfaced |
//! | `InvalidOrderType` | contract violation, fatal to that operation |

use thiserror::Error;

/// Result alias used throughout the workspace
pub type PosResult<T> = Result<T, PosError>;

/// Application error enum
#[derive(Debug, Error)]
pub enum PosError {
    /// A user-supplied index is outside the valid range
    #[error("Please enter a valid item number.")]
    InvalidIndex,

    /// A user-supplied quantity is outside the valid range
    #[error("Please enter a valid quantity.")]
    InvalidQuantity,

    /// A field-level validator rejected the input
    #[error("{0}")]
    Validation(String),

    /// The user issued the escape token inside a multi-step flow
    #[error("Operation aborted.")]
    Aborted,

    /// A backing store could not be written
    #[error("Storage error: {0}")]
    Storage(String),

    /// A collaborator passed an unrecognized order-type discriminator
    #[error("Invalid order type: {0}")]
    InvalidOrderType(String),
}

impl PosError {
    /// Validation failure with a user-facing message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Storage failure with context
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}

impl From<std::io::Error> for PosError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for PosError {
    fn from(err: serde_json::Error) -> Self {
        Self::Storage(err.to_string())
    }
}
