//! Google Maps client error types.

/// Errors from the Google Directions and Places clients.
#[derive(Debug, thiserror::Error)]
pub enum GoogleError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error HTTP status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body carried a status other than OK / ZERO_RESULTS
    #[error("provider status {status}{}", detail_suffix(.message))]
    Status {
        status: String,
        message: Option<String>,
    },

    /// Invalid API key or unauthorized
    #[error("unauthorized: check GOOGLE_MAPS_API_KEY")]
    Unauthorized,

    /// Rate limited by the API
    #[error("rate limited by Google Maps API")]
    RateLimited,
}

fn detail_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}
