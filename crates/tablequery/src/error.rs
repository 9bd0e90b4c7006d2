//! Error types for the tablequery crate.
//!
//! Searching, sorting and paging never fail; malformed expressions degrade
//! to a best-effort parse or an empty result. Errors only arise while loading
//! records or configuration from JSON.

use thiserror::Error;

/// Errors that can occur when loading records or view configuration.
#[derive(Debug, Error)]
pub enum TableQueryError {
    /// The input was not valid JSON, or did not fit the expected shape.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A record was not a JSON object.
    #[error("record must be a JSON object")]
    NotAnObject,

    /// A record set was not a JSON array.
    #[error("record set must be a JSON array of objects")]
    NotAnArray,
}

/// Result type for tablequery operations.
pub type Result<T> = std::result::Result<T, TableQueryError>;
