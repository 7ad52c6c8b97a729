//! Custom error types for spend-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for spend-cli operations
#[derive(Error, Debug)]
pub enum SpendError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors (settings file)
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A stored ledger line that cannot be decoded
    #[error("Malformed record on line {line}: {reason} ({content:?})")]
    MalformedRecord {
        /// 1-based line number in the ledger file
        line: usize,
        /// The offending line, verbatim
        content: String,
        reason: String,
    },

    /// Summary requested on the last day of the month, when no days remain
    /// to spread the remaining budget over
    #[error("No days remaining in the current month to budget for")]
    NoRemainingDays,

    /// Storage errors (path not readable, writable, or creatable)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SpendError {
    /// Create a "not found" error for an expense position
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a malformed-record error for a ledger line
    pub fn malformed_record(
        line: usize,
        content: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedRecord {
            line,
            content: content.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a malformed-record error
    pub fn is_malformed_record(&self) -> bool {
        matches!(self, Self::MalformedRecord { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SpendError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for spend-cli operations
pub type SpendResult<T> = Result<T, SpendError>;
