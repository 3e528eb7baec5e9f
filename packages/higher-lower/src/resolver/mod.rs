//! Image resolution for content entries.
//!
//! Every entry gets a displayable image, no matter what the providers do:
//!
//! 1. primary provider with the curated query, preferring photos whose texts
//!    mention the term
//! 2. secondary provider with the same query, resetting the category when its
//!    page is exhausted
//! 3. secondary provider again with a generic `"<term> <category>"` query
//! 4. the static fallback table
//!
//! Images are de-duplicated per category through [`UsedImages`].

mod host_policy;
mod used_images;

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::content::{generic_query, ContentPool};
use crate::traits::{ImageProvider, PhotoQuery, ProviderPhoto};
use crate::types::{ContentEntry, ImageSource, ResolvedImage};

pub use host_policy::{ImageHostPolicy, DEFAULT_IMAGE_HOSTS};
pub use used_images::UsedImages;

/// Attribution shown for static fallback images.
pub const STOCK_PHOTO_CREDIT: &str = "Stock Photo";

/// Page sizes per provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
    pub primary_per_page: u32,
    pub secondary_per_page: u32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            primary_per_page: 30,
            secondary_per_page: 25,
        }
    }
}

pub struct ImageResolver {
    primary: Arc<dyn ImageProvider>,
    secondary: Arc<dyn ImageProvider>,
    pool: Arc<ContentPool>,
    used: Arc<UsedImages>,
    host_policy: ImageHostPolicy,
    config: ResolverConfig,
}

impl ImageResolver {
    pub fn new(
        primary: Arc<dyn ImageProvider>,
        secondary: Arc<dyn ImageProvider>,
        pool: Arc<ContentPool>,
        used: Arc<UsedImages>,
    ) -> Self {
        Self {
            primary,
            secondary,
            pool,
            used,
            host_policy: ImageHostPolicy::default(),
            config: ResolverConfig::default(),
        }
    }

    pub fn with_host_policy(mut self, policy: ImageHostPolicy) -> Self {
        self.host_policy = policy;
        self
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn used_images(&self) -> &Arc<UsedImages> {
        &self.used
    }

    pub fn pool(&self) -> &Arc<ContentPool> {
        &self.pool
    }

    /// Pick an image for `entry`. Never fails.
    pub async fn resolve(&self, entry: &ContentEntry) -> ResolvedImage {
        let query = self.pool.search_query(entry);

        if let Some(image) = self.try_primary(entry, &query).await {
            return image;
        }

        if let Some(image) = self
            .try_secondary(entry, &query, ImageSource::Secondary)
            .await
        {
            return image;
        }

        let generic = generic_query(entry);
        debug!(term = %entry.term, query = %generic, "Retrying with generic query");
        if let Some(image) = self
            .try_secondary(entry, &generic, ImageSource::GenericRetry)
            .await
        {
            return image;
        }

        self.static_fallback(entry)
    }

    async fn try_primary(&self, entry: &ContentEntry, query: &str) -> Option<ResolvedImage> {
        let photos = self
            .fetch(
                self.primary.as_ref(),
                PhotoQuery::new(query, self.config.primary_per_page),
            )
            .await?;

        let matching: Vec<&ProviderPhoto> = photos.iter().filter(|p| p.mentions(&entry.term)).collect();
        let candidates = if matching.is_empty() {
            photos.iter().collect()
        } else {
            matching
        };

        let Some(photo) = self.used.claim_first_unused(&entry.category, &candidates) else {
            debug!(
                provider = self.primary.name(),
                category = %entry.category,
                candidates = candidates.len(),
                "Every primary candidate already used"
            );
            return None;
        };

        Some(ResolvedImage {
            url: photo.url.clone(),
            photographer: photo.photographer.clone(),
            source: ImageSource::Primary,
        })
    }

    async fn try_secondary(
        &self,
        entry: &ContentEntry,
        query: &str,
        source: ImageSource,
    ) -> Option<ResolvedImage> {
        let photos = self
            .fetch(
                self.secondary.as_ref(),
                PhotoQuery::new(query, self.config.secondary_per_page),
            )
            .await?;

        let (photo, was_reset) = self.used.claim_or_reset(&entry.category, &photos)?;
        if was_reset {
            info!(
                provider = self.secondary.name(),
                category = %entry.category,
                "Secondary page exhausted, resetting used images for category"
            );
        }

        Some(ResolvedImage {
            url: photo.url.clone(),
            photographer: photo.photographer.clone(),
            source,
        })
    }

    /// One provider search. Errors and empty pages both come back as `None`.
    async fn fetch(&self, provider: &dyn ImageProvider, query: PhotoQuery) -> Option<Vec<ProviderPhoto>> {
        let photos = match provider.search(&query).await {
            Ok(photos) => photos,
            Err(e) => {
                warn!(provider = provider.name(), query = %query.query, error = %e, "Image search failed");
                return None;
            }
        };

        let total = photos.len();
        let photos: Vec<ProviderPhoto> = photos
            .into_iter()
            .filter(|p| self.host_policy.allows(&p.url))
            .collect();

        if photos.len() < total {
            warn!(
                provider = provider.name(),
                dropped = total - photos.len(),
                "Dropped photos with unusable URLs"
            );
        }

        if photos.is_empty() {
            debug!(provider = provider.name(), query = %query.query, "No usable results");
            return None;
        }

        Some(photos)
    }

    fn static_fallback(&self, entry: &ContentEntry) -> ResolvedImage {
        let preferred = self.pool.fallback_image(&entry.category, &entry.subcategory);
        let url = self.used.claim_fallback(
            &entry.category,
            preferred,
            self.pool.category_fallbacks(&entry.category),
        );

        info!(
            term = %entry.term,
            category = %entry.category,
            preferred = url == preferred,
            "Using static fallback image"
        );

        ResolvedImage {
            url: url.to_string(),
            photographer: STOCK_PHOTO_CREDIT.to_string(),
            source: ImageSource::StaticFallback,
        }
    }
}
