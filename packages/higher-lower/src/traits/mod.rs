//! Trait abstractions at the I/O seams.
//!
//! Naming follows what the seam provides: `ImageProvider` for photo search,
//! `ItemSource` for card production, `HighScoreStore` for local persistence.

pub mod high_score;
pub mod item_source;
pub mod provider;

pub use high_score::HighScoreStore;
pub use item_source::ItemSource;
pub use provider::{ImageProvider, PhotoQuery, ProviderPhoto};
