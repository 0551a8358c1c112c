//! Local cache trait abstraction.

use crate::error::GistResult;
use crate::models::Gist;

/// Snapshot cache for the full gist list.
///
/// The snapshot is replaced and invalidated wholesale; there is no partial
/// update and no time-based expiry. Staleness is driven only by `clear()`.
pub trait CacheStore: Send + Sync {
    /// Return the cached snapshot.
    ///
    /// Fails with `GistError::CacheEmpty` if never populated or cleared.
    fn get(&self) -> GistResult<Vec<Gist>>;

    /// Replace the snapshot. Readers never observe a partial write.
    fn save(&self, gists: &[Gist]) -> GistResult<()>;

    /// True before first population and after any `clear()`. No side effects.
    fn is_stale(&self) -> bool;

    /// Invalidate the snapshot.
    fn clear(&self) -> GistResult<()>;
}
