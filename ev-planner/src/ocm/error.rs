//! Open Charge Map error types.

/// Errors that can occur when interacting with the Open Charge Map API.
#[derive(Debug, thiserror::Error)]
pub enum OcmError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication failed
    #[error("unauthorized: check OPEN_CHARGE_API_KEY")]
    Unauthorized,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
