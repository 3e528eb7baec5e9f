//! Error types for the Unsplash client.

use thiserror::Error;

/// Result type for Unsplash client operations.
pub type Result<T> = std::result::Result<T, UnsplashError>;

#[derive(Debug, Error)]
pub enum UnsplashError {
    /// Non-2xx response (bad key, rate limit, invalid query)
    #[error("Unsplash API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Transport failure or a body that did not match the expected schema
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl UnsplashError {
    /// True when Unsplash rejected the request because the hourly quota is spent.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, UnsplashError::Api { status: 403 | 429, .. })
    }
}
