//! Image provider adapters.

pub mod pexels;
pub mod unsplash;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ProviderResult;
use crate::security::SecretString;
use crate::traits::{ImageProvider, PhotoQuery, ProviderPhoto};

pub use pexels::PexelsProvider;
pub use unsplash::UnsplashProvider;

/// Crop/quality parameters every card image is requested with.
const CROP_PARAMS: &str = "auto=format&fit=crop&w=1200&h=800&q=85";

/// Append the card crop parameters to a provider image URL.
pub(crate) fn with_crop_params(url: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", url, separator, CROP_PARAMS)
}

/// Provider for a missing API key. Always answers with an empty page.
pub struct NoopImageProvider {
    name: &'static str,
}

impl NoopImageProvider {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

#[async_trait]
impl ImageProvider for NoopImageProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn search(&self, query: &PhotoQuery) -> ProviderResult<Vec<ProviderPhoto>> {
        tracing::debug!(provider = self.name, query = %query.query, "No API key configured, skipping search");
        Ok(vec![])
    }
}

/// Unsplash adapter if a key is present, otherwise a no-op.
pub fn unsplash_or_noop(key: Option<&SecretString>) -> Arc<dyn ImageProvider> {
    match key {
        Some(key) => Arc::new(UnsplashProvider::new(key.expose())),
        None => Arc::new(NoopImageProvider::new(unsplash::NAME)),
    }
}

/// Pexels adapter if a key is present, otherwise a no-op.
pub fn pexels_or_noop(key: Option<&SecretString>) -> Arc<dyn ImageProvider> {
    match key {
        Some(key) => Arc::new(PexelsProvider::new(key.expose())),
        None => Arc::new(NoopImageProvider::new(pexels::NAME)),
    }
}
