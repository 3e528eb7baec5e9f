//! Search-query construction for image providers.

use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;
use crate::types::ContentEntry;

use super::catalog;

/// Term → curated provider query.
///
/// Starts from the built-in table; hosts can add or replace entries at
/// runtime or from a JSON file (`{ "<term>": "<query>" }`).
#[derive(Debug, Clone, Default)]
pub struct QueryOverrides {
    queries: HashMap<String, String>,
}

impl QueryOverrides {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        Self {
            queries: catalog::QUERY_OVERRIDES
                .iter()
                .map(|(term, query)| (term.to_string(), query.to_string()))
                .collect(),
        }
    }

    pub fn insert(&mut self, term: impl Into<String>, query: impl Into<String>) -> Option<String> {
        self.queries.insert(term.into(), query.into())
    }

    pub fn get(&self, term: &str) -> Option<&str> {
        self.queries.get(term).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// Merge a JSON object of overrides from disk. Returns how many entries were read.
    pub fn merge_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let parsed: HashMap<String, String> = serde_json::from_str(&raw)?;
        let count = parsed.len();
        self.queries.extend(parsed);

        tracing::info!(path = %path.as_ref().display(), count, "Loaded query overrides");
        Ok(count)
    }
}

/// Query for the primary and secondary providers.
pub fn search_query(entry: &ContentEntry, overrides: &QueryOverrides) -> String {
    if let Some(query) = overrides.get(&entry.term) {
        return query.to_string();
    }

    let term = &entry.term;
    match entry.category.as_str() {
        "Celebrities" => format!("{} {} portrait recent", term, entry.subcategory.to_lowercase()),
        "Technology" => format!("{} product official", term),
        "Automotive" => format!("{} car official exterior", term),
        "Entertainment" => match entry.subcategory.as_str() {
            "Movies" => format!("{} movie poster official", term),
            "TVShows" => format!("{} tv show poster", term),
            "Games" => format!("{} game cover art", term),
            _ => format!("{} official", term),
        },
        "Sports" => format!("{} {} official", term, entry.subcategory.to_lowercase()),
        "Brands" => format!("{} brand logo official", term),
        _ => format!("{} official", term),
    }
}

/// Broader query used for the last provider attempt.
pub fn generic_query(entry: &ContentEntry) -> String {
    format!("{} {}", entry.term, entry.category.to_lowercase())
}
