//! API key handling.
//!
//! Uses the `secrecy` crate so provider keys never show up in logs or
//! `Debug` output of the configuration.

use secrecy::{ExposeSecret, SecretBox};
use std::fmt;

/// A secret string that won't be logged or displayed.
pub struct SecretString(SecretBox<str>);

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretBox::new(Box::from(value.into().as_str())))
    }

    /// Only call this when building the provider client.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// Read an optional key from the environment. Unset or blank means absent.
    pub fn from_env(var: &str) -> Option<Self> {
        std::env::var(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(Self::new)
    }
}

impl Clone for SecretString {
    fn clone(&self) -> Self {
        Self::new(self.expose().to_string())
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let key = SecretString::new("px-123456");

        assert_eq!(format!("{:?}", key), "[REDACTED]");
        assert_eq!(key.expose(), "px-123456");
    }

    #[test]
    fn test_blank_env_is_absent() {
        std::env::set_var("HIGHER_LOWER_TEST_BLANK_KEY", "   ");
        assert!(SecretString::from_env("HIGHER_LOWER_TEST_BLANK_KEY").is_none());
        assert!(SecretString::from_env("HIGHER_LOWER_TEST_UNSET_KEY").is_none());
    }
}
