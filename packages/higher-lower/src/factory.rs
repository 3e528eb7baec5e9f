//! Turns a random content pick into a finished card.

use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use fastrand::Rng;
use futures::FutureExt;
use tracing::{debug, error};
use uuid::Uuid;

use crate::config::GameConfig;
use crate::content::{ContentPool, UNIVERSAL_FALLBACK_IMAGE};
use crate::error::Result;
use crate::providers::{pexels_or_noop, unsplash_or_noop};
use crate::resolver::{ImageResolver, UsedImages};
use crate::traits::ItemSource;
use crate::types::{ComparisonItem, ImageSource, ResolvedImage};

/// Credit shown with the universal fallback image.
pub const UNIVERSAL_FALLBACK_CREDIT: &str = "Unsplash";

/// Builds [`ComparisonItem`]s from the content pool and the image resolver.
pub struct ItemFactory {
    resolver: ImageResolver,
    rng: Mutex<Rng>,
}

impl ItemFactory {
    pub fn new(resolver: ImageResolver) -> Self {
        Self {
            resolver,
            rng: Mutex::new(Rng::new()),
        }
    }

    /// Wire the built-in pool, both providers and a fresh de-dup store from
    /// configuration. Missing keys produce no-op providers.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        let mut pool = ContentPool::builtin();
        if let Some(path) = &config.query_overrides_path {
            pool.load_query_overrides(path)?;
        }

        let resolver = ImageResolver::new(
            unsplash_or_noop(config.unsplash_access_key.as_ref()),
            pexels_or_noop(config.pexels_api_key.as_ref()),
            Arc::new(pool),
            Arc::new(UsedImages::new()),
        );

        Ok(Self::new(resolver))
    }

    /// Deterministic picks and volumes for tests and replays.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(Rng::with_seed(seed));
        self
    }

    pub fn resolver(&self) -> &ImageResolver {
        &self.resolver
    }

    /// Never fails. A panic during image resolution is contained here and
    /// replaced by the universal fallback image.
    pub async fn create_random_item(&self) -> ComparisonItem {
        let pool = self.resolver.pool();

        let (entry, volume) = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            let entry = pool.pick_random_entry_with(&mut rng);
            let volume = pool.synthesize_volume_with(&mut rng, &entry.category);
            (entry, volume)
        };

        let image = match AssertUnwindSafe(self.resolver.resolve(&entry))
            .catch_unwind()
            .await
        {
            Ok(image) => image,
            Err(panic_info) => {
                let panic_msg = panic_info
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| panic_info.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                error!(term = %entry.term, panic = %panic_msg, "Image resolution panicked");

                ResolvedImage {
                    url: UNIVERSAL_FALLBACK_IMAGE.to_string(),
                    photographer: UNIVERSAL_FALLBACK_CREDIT.to_string(),
                    source: ImageSource::StaticFallback,
                }
            }
        };

        debug!(
            term = %entry.term,
            category = %entry.category,
            source = ?image.source,
            volume,
            "Created item"
        );

        ComparisonItem {
            id: Uuid::new_v4(),
            title: entry.term.clone(),
            description: entry.description(),
            search_volume: volume,
            image_url: image.url,
            category: entry.display_category(),
            photographer: image.photographer,
        }
    }
}

#[async_trait]
impl ItemSource for ItemFactory {
    async fn next_item(&self) -> Result<ComparisonItem> {
        Ok(self.create_random_item().await)
    }
}
