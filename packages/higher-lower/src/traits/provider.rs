//! Image provider trait.
//!
//! Abstracts over photo search APIs (Unsplash, Pexels). Implementations
//! normalize their payloads to [`ProviderPhoto`] so the resolver never sees
//! provider-specific schemas.

use async_trait::async_trait;

use crate::error::ProviderResult;

/// What to ask a provider for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoQuery {
    pub query: String,
    /// Requested page size. Providers may cap it.
    pub per_page: u32,
    /// Ask for large originals where the provider supports a size filter.
    pub large: bool,
}

impl PhotoQuery {
    pub fn new(query: impl Into<String>, per_page: u32) -> Self {
        Self {
            query: query.into(),
            per_page,
            large: true,
        }
    }
}

/// A normalized photo record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderPhoto {
    /// Display-ready URL (crop parameters already applied).
    pub url: String,
    pub photographer: String,
    pub description: Option<String>,
    pub alt_description: Option<String>,
}

impl ProviderPhoto {
    pub fn new(url: impl Into<String>, photographer: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            photographer: photographer.into(),
            description: None,
            alt_description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_alt_description(mut self, alt: impl Into<String>) -> Self {
        self.alt_description = Some(alt.into());
        self
    }

    /// True if the description or alt text contains `term` (case-insensitive).
    pub fn mentions(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        [&self.description, &self.alt_description]
            .into_iter()
            .flatten()
            .any(|text| text.to_lowercase().contains(&term))
    }
}

/// Landscape photo search.
///
/// # Implementations
///
/// - `UnsplashProvider` - Unsplash search API
/// - `PexelsProvider` - Pexels search API
/// - `NoopImageProvider` - No credentials configured
/// - `testing::MockImageProvider` - For testing
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// One page of landscape results in provider order. An empty page is a
    /// valid answer, not an error.
    async fn search(&self, query: &PhotoQuery) -> ProviderResult<Vec<ProviderPhoto>>;
}
