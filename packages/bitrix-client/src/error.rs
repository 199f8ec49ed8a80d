//! Error types for the Bitrix24 client.

use thiserror::Error;

/// Result type for Bitrix24 client operations.
pub type Result<T> = std::result::Result<T, BitrixError>;

/// Bitrix24 client errors.
#[derive(Debug, Error)]
pub enum BitrixError {
    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API error (non-2xx response, or a 200 carrying an `error` payload)
    #[error("Bitrix24 API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}
