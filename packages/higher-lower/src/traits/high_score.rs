use crate::error::Result;

/// Storage key for the persisted best score.
pub const HIGHSCORE_KEY: &str = "higher-lower-highscore";

/// Local key-value persistence for the best score.
///
/// Synchronous on purpose: the backing stores (a local file, browser storage)
/// are synchronous and the value is a single small string.
pub trait HighScoreStore: Send + Sync {
    /// Stored best score, `None` if nothing has been written yet.
    fn load(&self) -> Result<Option<u32>>;

    fn save(&self, score: u32) -> Result<()>;
}
