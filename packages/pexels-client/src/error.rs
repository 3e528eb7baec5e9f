use thiserror::Error;

pub type Result<T> = std::result::Result<T, PexelsError>;

#[derive(Debug, Error)]
pub enum PexelsError {
    #[error("Pexels API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
