//! Typed errors for the game core.
//!
//! Uses `thiserror` for library errors (not `anyhow`). Provider failures never
//! reach the player: the resolver logs them and falls through its chain. The
//! remaining variants surface to the embedding host (configuration, storage).

use thiserror::Error;

/// Errors from an image provider adapter.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unsplash: {0}")]
    Unsplash(#[from] unsplash_client::UnsplashError),

    #[error("pexels: {0}")]
    Pexels(#[from] pexels_client::PexelsError),

    /// Provider has no credentials. Treated as a permanent empty page.
    #[error("provider not configured: {0}")]
    NotConfigured(&'static str),

    /// Anything a test double or a future adapter wants to report
    #[error("provider failed: {0}")]
    Other(String),
}

/// Errors surfaced by the game core.
#[derive(Debug, Error)]
pub enum GameError {
    /// Invalid configuration value
    #[error("config error: {0}")]
    Config(String),

    /// Reading or writing local state failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Local state or an overrides file is not valid JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    /// An item source could not produce an item
    #[error("fetch failed: {0}")]
    Fetch(String),
}

/// Result type alias for game operations.
pub type Result<T> = std::result::Result<T, GameError>;

/// Result type alias for provider operations.
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;
