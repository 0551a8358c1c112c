//! Remote store trait abstraction.

use async_trait::async_trait;

use crate::error::GistResult;
use crate::models::{Gist, GistId};

/// Source of truth for gists.
///
/// Implementations perform a single request per call: they neither retry
/// nor cache. Errors come back already classified as [`crate::error::GistError`].
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetch every gist visible to the authenticated user.
    async fn fetch_all(&self) -> GistResult<Vec<Gist>>;

    /// Fetch one gist by its full identifier.
    ///
    /// Returns `GistError::GistNotFound` when the remote has no such gist.
    async fn fetch_by_id(&self, id: &GistId) -> GistResult<Gist>;

    /// Create a gist. On success the remote-assigned identifier, URL and
    /// timestamps are written back into `gist`.
    async fn create(&self, gist: &mut Gist) -> GistResult<()>;

    /// Update an existing gist identified by `gist.id`.
    ///
    /// Changing visibility after creation may be rejected by the remote;
    /// that rejection is an ordinary error.
    async fn update(&self, gist: &Gist) -> GistResult<()>;
}
