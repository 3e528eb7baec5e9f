//! Value types shared across the pipeline.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A card shown to the player. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonItem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub search_volume: u64,
    pub image_url: String,
    /// `"<Category> - <Subcategory>"`
    pub category: String,
    pub photographer: String,
}

/// A pick from the content pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentEntry {
    pub term: String,
    pub category: String,
    pub subcategory: String,
}

impl ContentEntry {
    pub fn new(
        term: impl Into<String>,
        category: impl Into<String>,
        subcategory: impl Into<String>,
    ) -> Self {
        Self {
            term: term.into(),
            category: category.into(),
            subcategory: subcategory.into(),
        }
    }

    pub fn description(&self) -> String {
        format!("Search popularity for {} ({})", self.term, self.subcategory)
    }

    pub fn display_category(&self) -> String {
        format!("{} - {}", self.category, self.subcategory)
    }
}

/// Which step of the resolver chain produced an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Primary,
    Secondary,
    GenericRetry,
    StaticFallback,
}

/// An image chosen for an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    pub url: String,
    pub photographer: String,
    pub source: ImageSource,
}

/// The player's guess about the next item relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Guess {
    Higher,
    Lower,
}

impl Guess {
    /// Ties count as correct for either guess.
    pub fn is_correct(self, current_volume: u64, next_volume: u64) -> bool {
        match self {
            Guess::Higher => next_volume >= current_volume,
            Guess::Lower => next_volume <= current_volume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_strings() {
        let entry = ContentEntry::new("Tom Cruise", "Celebrities", "Actors");

        assert_eq!(entry.description(), "Search popularity for Tom Cruise (Actors)");
        assert_eq!(entry.display_category(), "Celebrities - Actors");
    }

    #[test]
    fn test_ties_accept_both_guesses() {
        assert!(Guess::Higher.is_correct(500, 500));
        assert!(Guess::Lower.is_correct(500, 500));
    }

    #[test]
    fn test_strict_comparisons() {
        assert!(!Guess::Higher.is_correct(1_000_000, 999_999));
        assert!(Guess::Lower.is_correct(1_000_000, 999_999));
        assert!(Guess::Higher.is_correct(10, 11));
        assert!(!Guess::Lower.is_correct(10, 11));
    }

    #[test]
    fn test_item_serializes_camel_case() {
        let item = ComparisonItem {
            id: Uuid::nil(),
            title: "Nike".into(),
            description: "Search popularity for Nike (Fashion)".into(),
            search_volume: 42,
            image_url: "https://images.pexels.com/photos/1.jpeg".into(),
            category: "Brands - Fashion".into(),
            photographer: "Stock Photo".into(),
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["searchVolume"], 42);
        assert_eq!(json["imageUrl"], "https://images.pexels.com/photos/1.jpeg");
    }
}
