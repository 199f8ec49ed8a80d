//! Error types for the Resend client.

use thiserror::Error;

/// Result type for Resend client operations.
pub type Result<T> = std::result::Result<T, ResendError>;

/// Resend client errors.
#[derive(Debug, Error)]
pub enum ResendError {
    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API error (non-2xx response, rate limit, invalid request)
    #[error("Resend API error {status}: {message}")]
    Api { status: u16, message: String },
}
