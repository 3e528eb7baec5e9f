//! Where the round controller gets its cards.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::ComparisonItem;

/// Produces comparison items on demand.
///
/// `ItemFactory` never fails; the `Result` exists so the controller can treat
/// other sources (and test doubles) defensively.
#[async_trait]
pub trait ItemSource: Send + Sync {
    async fn next_item(&self) -> Result<ComparisonItem>;
}
