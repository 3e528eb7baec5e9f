//! Per-category record of images already shown this session.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::traits::ProviderPhoto;

/// Category → set of image URLs already handed out.
///
/// Owned by whoever builds the resolver and shared via `Arc`; two sessions
/// with separate stores never see each other's images. Every claim runs
/// under a single lock, so concurrent resolutions in the same category cannot
/// both take the same URL from one scan.
#[derive(Debug, Default)]
pub struct UsedImages {
    inner: Mutex<HashMap<String, HashSet<String>>>,
}

impl UsedImages {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, HashSet<String>>> {
        // The map stays consistent even if a holder panicked mid-insert.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_used(&self, category: &str, url: &str) -> bool {
        self.lock()
            .get(category)
            .is_some_and(|urls| urls.contains(url))
    }

    /// Record `url` as used. Returns false if it already was.
    pub fn mark_used(&self, category: &str, url: &str) -> bool {
        self.lock()
            .entry(category.to_string())
            .or_default()
            .insert(url.to_string())
    }

    /// Forget every image used in `category`.
    pub fn reset(&self, category: &str) {
        if let Some(urls) = self.lock().get_mut(category) {
            urls.clear();
        }
    }

    pub fn count(&self, category: &str) -> usize {
        self.lock().get(category).map_or(0, HashSet::len)
    }

    /// Claim the first candidate not yet used in `category`.
    pub fn claim_first_unused<'a>(
        &self,
        category: &str,
        candidates: &[&'a ProviderPhoto],
    ) -> Option<&'a ProviderPhoto> {
        let mut map = self.lock();
        let used = map.entry(category.to_string()).or_default();

        let photo = candidates.iter().find(|p| !used.contains(&p.url))?;
        used.insert(photo.url.clone());
        Some(*photo)
    }

    /// Claim the first unused candidate; if every candidate is used, clear the
    /// category and claim the first one. `None` only for an empty slice.
    pub fn claim_or_reset<'a>(
        &self,
        category: &str,
        candidates: &'a [ProviderPhoto],
    ) -> Option<(&'a ProviderPhoto, bool)> {
        let first = candidates.first()?;

        let mut map = self.lock();
        let used = map.entry(category.to_string()).or_default();

        if let Some(photo) = candidates.iter().find(|p| !used.contains(&p.url)) {
            used.insert(photo.url.clone());
            return Some((photo, false));
        }

        used.clear();
        used.insert(first.url.clone());
        Some((first, true))
    }

    /// Pick a static fallback: `preferred` if unused, else the first unused
    /// alternative, else `preferred` again. The pick is always recorded.
    pub fn claim_fallback<'a>(
        &self,
        category: &str,
        preferred: &'a str,
        alternatives: impl IntoIterator<Item = &'a str>,
    ) -> &'a str {
        let mut map = self.lock();
        let used = map.entry(category.to_string()).or_default();

        let pick = if !used.contains(preferred) {
            preferred
        } else {
            alternatives
                .into_iter()
                .find(|url| !used.contains(*url))
                .unwrap_or(preferred)
        };

        used.insert(pick.to_string());
        pick
    }
}
