//! Testing utilities including mock implementations.
//!
//! Scripted stand-ins for the provider, item-source and host seams, so game
//! logic can be exercised without network calls or timers.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

use crate::error::{GameError, ProviderError, ProviderResult, Result};
use crate::round::RoundHost;
use crate::traits::{ImageProvider, ItemSource, PhotoQuery, ProviderPhoto};
use crate::types::ComparisonItem;

/// A card with a fixed volume and an otherwise plausible shape.
pub fn item_with_volume(title: &str, search_volume: u64) -> ComparisonItem {
    ComparisonItem {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: format!("Search popularity for {} (Test)", title),
        search_volume,
        image_url: "https://images.unsplash.com/photo-test".to_string(),
        category: "Test - Test".to_string(),
        photographer: "Tester".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProviderMode {
    Scripted,
    Failing,
    Unconfigured,
    Panicking,
}

/// Image provider with pages scripted per query string.
///
/// Clones share scripts and the call log, so a test can keep a handle after
/// passing one into a resolver.
#[derive(Clone)]
pub struct MockImageProvider {
    name: &'static str,
    mode: ProviderMode,
    pages: Arc<Mutex<HashMap<String, Vec<ProviderPhoto>>>>,
    default_page: Arc<Mutex<Vec<ProviderPhoto>>>,
    calls: Arc<Mutex<Vec<PhotoQuery>>>,
}

impl MockImageProvider {
    /// Answers every query with an empty page until scripted.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            mode: ProviderMode::Scripted,
            pages: Arc::new(Mutex::new(HashMap::new())),
            default_page: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every search returns an error.
    pub fn failing(name: &'static str) -> Self {
        Self {
            mode: ProviderMode::Failing,
            ..Self::new(name)
        }
    }

    /// Every search reports missing credentials.
    pub fn unconfigured(name: &'static str) -> Self {
        Self {
            mode: ProviderMode::Unconfigured,
            ..Self::new(name)
        }
    }

    /// Every search panics.
    pub fn panicking(name: &'static str) -> Self {
        Self {
            mode: ProviderMode::Panicking,
            ..Self::new(name)
        }
    }

    /// Answer `query` with `photos`.
    pub fn with_page(self, query: &str, photos: Vec<ProviderPhoto>) -> Self {
        self.set_page(query, photos);
        self
    }

    /// Answer unscripted queries with `photos`.
    pub fn with_default_page(self, photos: Vec<ProviderPhoto>) -> Self {
        *self.default_page.lock().unwrap() = photos;
        self
    }

    pub fn set_page(&self, query: &str, photos: Vec<ProviderPhoto>) {
        self.pages.lock().unwrap().insert(query.to_string(), photos);
    }

    pub fn calls(&self) -> Vec<PhotoQuery> {
        self.calls.lock().unwrap().clone()
    }

    pub fn queries(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.query).collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ImageProvider for MockImageProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn search(&self, query: &PhotoQuery) -> ProviderResult<Vec<ProviderPhoto>> {
        self.calls.lock().unwrap().push(query.clone());

        match self.mode {
            ProviderMode::Failing => Err(ProviderError::Other(format!("{} unavailable", self.name))),
            ProviderMode::Unconfigured => Err(ProviderError::NotConfigured(self.name)),
            ProviderMode::Panicking => panic!("{} exploded", self.name),
            ProviderMode::Scripted => {
                let scripted = self.pages.lock().unwrap().get(&query.query).cloned();
                Ok(scripted.unwrap_or_else(|| self.default_page.lock().unwrap().clone()))
            }
        }
    }
}

/// Item source that hands out queued items in order.
///
/// An empty queue is a fetch failure, as is failure mode.
#[derive(Clone, Default)]
pub struct MockItemSource {
    items: Arc<Mutex<VecDeque<ComparisonItem>>>,
    failing: Arc<AtomicBool>,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

impl MockItemSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one item per volume, titled `item-0`, `item-1`, ...
    pub fn with_volumes(volumes: &[u64]) -> Self {
        let source = Self::new();
        for (i, volume) in volumes.iter().enumerate() {
            source.push(item_with_volume(&format!("item-{}", i), *volume));
        }
        source
    }

    /// Sleep before answering. Pair with a paused Tokio clock.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn push(&self, item: ComparisonItem) {
        self.items.lock().unwrap().push_back(item);
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn remaining(&self) -> usize {
        self.items.lock().unwrap().len()
    }
}

#[async_trait]
impl ItemSource for MockItemSource {
    async fn next_item(&self) -> Result<ComparisonItem> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.load(Ordering::SeqCst) {
            return Err(GameError::Fetch("mock source failing".into()));
        }

        self.items
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| GameError::Fetch("mock source exhausted".into()))
    }
}

/// Host that counts exit requests.
#[derive(Default)]
pub struct RecordingHost {
    exits: AtomicUsize,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exit_count(&self) -> usize {
        self.exits.load(Ordering::SeqCst)
    }
}

impl RoundHost for RecordingHost {
    fn exit_requested(&self) {
        self.exits.fetch_add(1, Ordering::SeqCst);
    }
}
