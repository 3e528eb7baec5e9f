//! Higher/Lower game core
//!
//! The player sees two cards and guesses whether the second was searched for
//! more or less than the first. This crate builds the cards and runs the game;
//! rendering is left to the host.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use higher_lower::{GameConfig, Guess, RoundController};
//!
//! let config = GameConfig::from_env()?;
//! let controller = RoundController::from_config(&config, Arc::new(|| println!("bye")))?;
//!
//! let mut updates = controller.subscribe();
//! controller.start();
//! updates.wait_for(|s| s.current.is_some()).await?;
//!
//! let outcome = controller.guess(Guess::Higher);
//! ```
//!
//! # Modules
//!
//! - [`content`] - Category taxonomy, volume ranges, fallback images, search queries
//! - [`providers`] - Unsplash and Pexels adapters behind [`ImageProvider`]
//! - [`resolver`] - Image resolution chain with per-category de-duplication
//! - [`factory`] - Random [`ComparisonItem`] construction
//! - [`round`] - Round state machine and its async controller
//! - [`highscore`] - High score stores
//! - [`testing`] - Mock implementations for testing

pub mod config;
pub mod content;
pub mod error;
pub mod factory;
pub mod highscore;
pub mod providers;
pub mod resolver;
pub mod round;
pub mod security;
pub mod testing;
pub mod traits;
pub mod types;

pub use config::GameConfig;
pub use content::{ContentPool, QueryOverrides, VolumeRange, UNIVERSAL_FALLBACK_IMAGE};
pub use error::{GameError, ProviderError, ProviderResult, Result};
pub use factory::ItemFactory;
pub use highscore::{FileHighScoreStore, MemoryHighScoreStore};
pub use providers::{NoopImageProvider, PexelsProvider, UnsplashProvider};
pub use resolver::{ImageHostPolicy, ImageResolver, ResolverConfig, UsedImages, STOCK_PHOTO_CREDIT};
pub use round::{
    game_over_verdict, GuessOutcome, Phase, RoundController, RoundHost, RoundState, RoundTiming,
};
pub use security::SecretString;
pub use traits::{HighScoreStore, ImageProvider, ItemSource, PhotoQuery, ProviderPhoto};
pub use types::{ComparisonItem, ContentEntry, Guess, ImageSource, ResolvedImage};
