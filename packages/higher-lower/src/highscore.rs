//! High score persistence.
//!
//! A single key-value entry, [`HIGHSCORE_KEY`] → the score as a decimal
//! string. The file store keeps it in a small JSON object so other keys in
//! the same file survive a write.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::Result;
use crate::traits::high_score::{HighScoreStore, HIGHSCORE_KEY};

/// Parse a stored value. Garbage reads as 0.
fn parse_score(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or_else(|_| {
        warn!(value = %raw, "Stored high score is not a number, treating as 0");
        0
    })
}

/// JSON-object file store, the local-storage analogue.
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Map::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> Result<Option<u32>> {
        let entries = self.read_entries()?;

        let score = match entries.get(HIGHSCORE_KEY) {
            None => None,
            Some(Value::String(raw)) => Some(parse_score(raw)),
            Some(Value::Number(n)) => Some(n.as_u64().and_then(|n| u32::try_from(n).ok()).unwrap_or(0)),
            Some(other) => Some(parse_score(&other.to_string())),
        };

        debug!(path = %self.path.display(), ?score, "Loaded high score");
        Ok(score)
    }

    fn save(&self, score: u32) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(HIGHSCORE_KEY.to_string(), Value::String(score.to_string()));

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;

        debug!(path = %self.path.display(), score, "Saved high score");
        Ok(())
    }
}

/// In-memory store for tests and hosts without local storage.
#[derive(Default)]
pub struct MemoryHighScoreStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryHighScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score: u32) -> Self {
        Self::with_raw(score.to_string())
    }

    /// Seed the entry with an arbitrary stored string.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let store = Self::new();
        store
            .entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(HIGHSCORE_KEY.to_string(), raw.into());
        store
    }

    /// Raw stored string, if any.
    pub fn raw(&self) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(HIGHSCORE_KEY)
            .cloned()
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> Result<Option<u32>> {
        Ok(self.raw().as_deref().map(parse_score))
    }

    fn save(&self, score: u32) -> Result<()> {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(HIGHSCORE_KEY.to_string(), score.to_string());
        Ok(())
    }
}
