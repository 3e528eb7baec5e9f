use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{GameError, Result};
use crate::security::SecretString;

const DEFAULT_HIGHSCORE_PATH: &str = ".higher-lower/storage.json";
const DEFAULT_FEEDBACK_DELAY_MS: u64 = 1000;
const DEFAULT_SWAP_DELAY_MS: u64 = 100;

/// Game configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub unsplash_access_key: Option<SecretString>,
    pub pexels_api_key: Option<SecretString>,
    pub highscore_path: PathBuf,
    /// JSON object of term → search query merged over the built-in overrides
    pub query_overrides_path: Option<PathBuf>,
    /// How long the revealed volume stays on screen after a correct guess
    pub feedback_delay: Duration,
    /// Pause between leaving feedback and showing the rotated pair
    pub swap_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            unsplash_access_key: None,
            pexels_api_key: None,
            highscore_path: PathBuf::from(DEFAULT_HIGHSCORE_PATH),
            query_overrides_path: None,
            feedback_delay: Duration::from_millis(DEFAULT_FEEDBACK_DELAY_MS),
            swap_delay: Duration::from_millis(DEFAULT_SWAP_DELAY_MS),
        }
    }
}

impl GameConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            unsplash_access_key: SecretString::from_env("UNSPLASH_ACCESS_KEY"),
            pexels_api_key: SecretString::from_env("PEXELS_API_KEY"),
            highscore_path: env::var("HIGHER_LOWER_HIGHSCORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_HIGHSCORE_PATH)),
            query_overrides_path: env::var("HIGHER_LOWER_QUERY_OVERRIDES")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            feedback_delay: millis_from_env("HIGHER_LOWER_FEEDBACK_DELAY_MS", DEFAULT_FEEDBACK_DELAY_MS)?,
            swap_delay: millis_from_env("HIGHER_LOWER_SWAP_DELAY_MS", DEFAULT_SWAP_DELAY_MS)?,
        })
    }

    pub fn with_unsplash_key(mut self, key: impl Into<SecretString>) -> Self {
        self.unsplash_access_key = Some(key.into());
        self
    }

    pub fn with_pexels_key(mut self, key: impl Into<SecretString>) -> Self {
        self.pexels_api_key = Some(key.into());
        self
    }

    pub fn with_highscore_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.highscore_path = path.into();
        self
    }

    pub fn with_query_overrides_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.query_overrides_path = Some(path.into());
        self
    }

    pub fn with_feedback_delay(mut self, delay: Duration) -> Self {
        self.feedback_delay = delay;
        self
    }

    pub fn with_swap_delay(mut self, delay: Duration) -> Self {
        self.swap_delay = delay;
        self
    }
}

fn millis_from_env(var: &str, default: u64) -> Result<Duration> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| GameError::Config(format!("{} must be a whole number of milliseconds, got '{}'", var, raw))),
        Err(_) => Ok(Duration::from_millis(default)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();

        assert!(config.unsplash_access_key.is_none());
        assert_eq!(config.highscore_path, PathBuf::from(".higher-lower/storage.json"));
        assert_eq!(config.feedback_delay, Duration::from_millis(1000));
        assert_eq!(config.swap_delay, Duration::from_millis(100));
    }

    #[test]
    fn test_builders() {
        let config = GameConfig::default()
            .with_pexels_key("px")
            .with_feedback_delay(Duration::ZERO)
            .with_query_overrides_path("queries.json");

        assert_eq!(config.pexels_api_key.as_ref().map(|k| k.expose()), Some("px"));
        assert_eq!(config.feedback_delay, Duration::ZERO);
        assert_eq!(config.query_overrides_path, Some(PathBuf::from("queries.json")));
    }

    #[test]
    fn test_millis_parsing() {
        env::set_var("HIGHER_LOWER_TEST_DELAY_OK", " 250 ");
        env::set_var("HIGHER_LOWER_TEST_DELAY_BAD", "soon");

        assert_eq!(
            millis_from_env("HIGHER_LOWER_TEST_DELAY_OK", 5).unwrap(),
            Duration::from_millis(250)
        );
        assert_eq!(
            millis_from_env("HIGHER_LOWER_TEST_DELAY_UNSET", 5).unwrap(),
            Duration::from_millis(5)
        );
        assert!(matches!(
            millis_from_env("HIGHER_LOWER_TEST_DELAY_BAD", 5),
            Err(GameError::Config(_))
        ));
    }

    #[test]
    fn test_debug_hides_keys() {
        let config = GameConfig::default().with_unsplash_key("secret-key");
        assert!(!format!("{:?}", config).contains("secret-key"));
    }
}
