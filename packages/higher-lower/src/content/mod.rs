//! Content pool: what can appear on a card.
//!
//! A two-level taxonomy (category → subcategory → item names) plus the tables
//! indexed by it: volume ranges, fallback images and query overrides. Pure and
//! query-only; nothing here knows about game state.

mod catalog;
pub mod query;

use std::collections::HashMap;
use std::path::Path;

use fastrand::Rng;
use indexmap::IndexMap;

use crate::error::{GameError, Result};
use crate::types::ContentEntry;

pub use catalog::UNIVERSAL_FALLBACK_IMAGE;
pub use query::{generic_query, search_query, QueryOverrides};

/// Inclusive bounds for synthetic monthly search volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeRange {
    pub min: u64,
    pub max: u64,
}

impl VolumeRange {
    pub const DEFAULT: VolumeRange = VolumeRange {
        min: catalog::DEFAULT_VOLUME_RANGE.0,
        max: catalog::DEFAULT_VOLUME_RANGE.1,
    };

    pub fn new(min: u64, max: u64) -> Result<Self> {
        if min > max {
            return Err(GameError::Config(format!(
                "volume range min {} exceeds max {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, volume: u64) -> bool {
        (self.min..=self.max).contains(&volume)
    }
}

pub type Taxonomy = IndexMap<String, IndexMap<String, Vec<String>>>;

#[derive(Debug, Clone)]
pub struct ContentPool {
    taxonomy: Taxonomy,
    volume_ranges: HashMap<String, VolumeRange>,
    fallback_images: IndexMap<String, IndexMap<String, String>>,
    query_overrides: QueryOverrides,
}

impl Default for ContentPool {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ContentPool {
    /// The shipped catalog.
    pub fn builtin() -> Self {
        let taxonomy = catalog::TAXONOMY
            .iter()
            .map(|(category, subcategories)| {
                let subs = subcategories
                    .iter()
                    .map(|(sub, items)| {
                        (sub.to_string(), items.iter().map(|i| i.to_string()).collect())
                    })
                    .collect();
                (category.to_string(), subs)
            })
            .collect();

        let volume_ranges = catalog::VOLUME_RANGES
            .iter()
            .map(|(category, min, max)| (category.to_string(), VolumeRange { min: *min, max: *max }))
            .collect();

        let fallback_images = catalog::FALLBACK_IMAGES
            .iter()
            .map(|(category, subs)| {
                let urls = subs
                    .iter()
                    .map(|(sub, url)| (sub.to_string(), url.to_string()))
                    .collect();
                (category.to_string(), urls)
            })
            .collect();

        Self {
            taxonomy,
            volume_ranges,
            fallback_images,
            query_overrides: QueryOverrides::builtin(),
        }
    }

    /// Build a pool from a custom taxonomy. Every category needs at least one
    /// subcategory and every subcategory at least one item.
    pub fn from_taxonomy(taxonomy: Taxonomy) -> Result<Self> {
        if taxonomy.is_empty() {
            return Err(GameError::Config("taxonomy has no categories".into()));
        }
        for (category, subs) in &taxonomy {
            if subs.is_empty() {
                return Err(GameError::Config(format!("category '{}' has no subcategories", category)));
            }
            if let Some((sub, _)) = subs.iter().find(|(_, items)| items.is_empty()) {
                return Err(GameError::Config(format!("subcategory '{} / {}' has no items", category, sub)));
            }
        }

        Ok(Self {
            taxonomy,
            volume_ranges: HashMap::new(),
            fallback_images: IndexMap::new(),
            query_overrides: QueryOverrides::empty(),
        })
    }

    pub fn with_volume_range(mut self, category: impl Into<String>, range: VolumeRange) -> Self {
        self.volume_ranges.insert(category.into(), range);
        self
    }

    pub fn with_fallback_image(
        mut self,
        category: impl Into<String>,
        subcategory: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        self.fallback_images
            .entry(category.into())
            .or_default()
            .insert(subcategory.into(), url.into());
        self
    }

    pub fn with_query_override(mut self, term: impl Into<String>, query: impl Into<String>) -> Self {
        self.query_overrides.insert(term, query);
        self
    }

    /// Merge query overrides from a JSON file.
    pub fn load_query_overrides(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        self.query_overrides.merge_file(path)
    }

    pub fn query_overrides(&self) -> &QueryOverrides {
        &self.query_overrides
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.taxonomy.keys().map(String::as_str)
    }

    pub fn subcategories(&self, category: &str) -> impl Iterator<Item = &str> {
        self.taxonomy
            .get(category)
            .into_iter()
            .flat_map(|subs| subs.keys().map(String::as_str))
    }

    pub fn items(&self, category: &str, subcategory: &str) -> &[String] {
        self.taxonomy
            .get(category)
            .and_then(|subs| subs.get(subcategory))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn pick_random_entry(&self) -> ContentEntry {
        self.pick_random_entry_with(&mut Rng::new())
    }

    /// Uniform over categories, then subcategories, then items.
    pub fn pick_random_entry_with(&self, rng: &mut Rng) -> ContentEntry {
        let (category, subs) = self
            .taxonomy
            .get_index(rng.usize(..self.taxonomy.len()))
            .expect("index drawn within taxonomy bounds");
        let (subcategory, items) = subs
            .get_index(rng.usize(..subs.len()))
            .expect("index drawn within subcategory bounds");
        let term = &items[rng.usize(..items.len())];

        ContentEntry::new(term.clone(), category.clone(), subcategory.clone())
    }

    pub fn volume_range(&self, category: &str) -> VolumeRange {
        self.volume_ranges
            .get(category)
            .copied()
            .unwrap_or(VolumeRange::DEFAULT)
    }

    pub fn synthesize_volume(&self, category: &str) -> u64 {
        self.synthesize_volume_with(&mut Rng::new(), category)
    }

    pub fn synthesize_volume_with(&self, rng: &mut Rng, category: &str) -> u64 {
        let range = self.volume_range(category);
        rng.u64(range.min..=range.max)
    }

    /// Canonical fallback image for a subcategory, or the universal image.
    pub fn fallback_image(&self, category: &str, subcategory: &str) -> &str {
        self.fallback_images
            .get(category)
            .and_then(|subs| subs.get(subcategory))
            .map(String::as_str)
            .unwrap_or(UNIVERSAL_FALLBACK_IMAGE)
    }

    /// All fallback images registered for a category, in registration order.
    pub fn category_fallbacks(&self, category: &str) -> impl Iterator<Item = &str> {
        self.fallback_images
            .get(category)
            .into_iter()
            .flat_map(|subs| subs.values().map(String::as_str))
    }

    pub fn search_query(&self, entry: &ContentEntry) -> String {
        search_query(entry, &self.query_overrides)
    }
}
