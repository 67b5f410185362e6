//! Error types for stammtisch-engine operations.
//!
//! Evaluation itself never fails: unknown users, stray dates and missing
//! messages are data skew with defined fallbacks. Errors only surface at the
//! parsing and validation edges.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid mock configuration: {0}")]
    InvalidMockConfig(String),

    /// The input document was not valid JSON or did not match the schema.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
