//! Which image URLs the game is willing to display.

use url::Url;

/// Hosts the card renderer is configured to load images from.
pub const DEFAULT_IMAGE_HOSTS: &[&str] = &["images.unsplash.com", "plus.unsplash.com", "images.pexels.com"];

/// Rejects provider records whose URL is malformed, not https, or on an
/// unexpected host.
#[derive(Debug, Clone)]
pub struct ImageHostPolicy {
    allowed_hosts: Vec<String>,
}

impl Default for ImageHostPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_HOSTS.iter().copied())
    }
}

impl ImageHostPolicy {
    pub fn new<'a>(hosts: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            allowed_hosts: hosts.into_iter().map(str::to_ascii_lowercase).collect(),
        }
    }

    pub fn allow_host(mut self, host: &str) -> Self {
        self.allowed_hosts.push(host.to_ascii_lowercase());
        self
    }

    pub fn allows(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        parsed.scheme() == "https"
            && parsed
                .host_str()
                .is_some_and(|host| self.allowed_hosts.iter().any(|h| h == host))
    }
}
