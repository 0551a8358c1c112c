//! Gist orchestration over the cache and the remote store.
//!
//! [`GistService`] owns the cache policy: reads are served from the cache
//! while it is fresh and non-empty, every write invalidates it, and a failed
//! cache write never fails a read.

pub mod tags;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapters::{FileCache, GitHubStore, OsFileSystem};
use crate::config::Config;
use crate::error::{GistError, GistResult};
use crate::models::{Gist, GistId};
use crate::traits::{CacheStore, FileSystem, RemoteStore};

/// Orchestrator shared by the command shells and the interactive session.
///
/// # Example
///
/// ```ignore
/// use gist::config::Config;
/// use gist::service::GistService;
///
/// let service = GistService::from_config(&Config::load()?);
/// for gist in service.list_gists().await? {
///     println!("{} {}", gist.id.short(), gist.title());
/// }
/// ```
#[derive(Clone)]
pub struct GistService {
    remote: Arc<dyn RemoteStore>,
    cache: Arc<dyn CacheStore>,
    fs: Arc<dyn FileSystem>,
}

impl std::fmt::Debug for GistService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GistService").finish_non_exhaustive()
    }
}

impl GistService {
    pub fn new(
        remote: Arc<dyn RemoteStore>,
        cache: Arc<dyn CacheStore>,
        fs: Arc<dyn FileSystem>,
    ) -> Self {
        Self { remote, cache, fs }
    }

    /// Wire the GitHub store, the file cache and the OS filesystem.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(GitHubStore::from_config(config)),
            Arc::new(FileCache::new(config.cache_path.clone())),
            Arc::new(OsFileSystem::new()),
        )
    }

    /// Cached snapshot when fresh and non-empty.
    fn cached(&self) -> Option<Vec<Gist>> {
        if self.cache.is_stale() {
            tracing::debug!("cache stale");
            return None;
        }
        match self.cache.get() {
            Ok(gists) if !gists.is_empty() => Some(gists),
            Ok(_) => {
                tracing::debug!("cache empty");
                None
            }
            Err(e) => {
                tracing::debug!(error = %e, "cache miss");
                None
            }
        }
    }

    fn invalidate_cache(&self) {
        if let Err(e) = self.cache.clear() {
            tracing::warn!(error = %e, "failed to clear gist cache");
        }
    }

    async fn fetch_and_cache(&self) -> GistResult<Vec<Gist>> {
        let gists = self.remote.fetch_all().await?;
        tracing::info!(count = gists.len(), "fetched gists from remote");

        if let Err(e) = self.cache.save(&gists) {
            tracing::warn!(error = %e, "failed to save gist cache");
        }
        Ok(gists)
    }

    /// All gists, from cache when possible.
    pub async fn list_gists(&self) -> GistResult<Vec<Gist>> {
        if let Some(gists) = self.cached() {
            tracing::debug!(count = gists.len(), "serving gists from cache");
            return Ok(gists);
        }
        self.fetch_and_cache().await
    }

    /// Gists whose description carries `tag` (case-insensitive).
    pub async fn list_by_tag(&self, tag: &str) -> GistResult<Vec<Gist>> {
        let gists = self.list_gists().await?;
        Ok(tags::filter_by_tag(&gists, tag)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Clear the cache and refetch everything.
    pub async fn sync_gists(&self) -> GistResult<Vec<Gist>> {
        self.invalidate_cache();
        self.fetch_and_cache().await
    }

    /// Create a gist from local files, keyed by base filename.
    ///
    /// Every path is checked before anything is read or uploaded. Returns
    /// the created gist with its assigned identifier and URL. The cache is
    /// left untouched.
    pub async fn publish_files(
        &self,
        paths: &[PathBuf],
        description: &str,
        public: bool,
    ) -> GistResult<Gist> {
        if let Some(missing) = paths.iter().find(|p| !self.fs.exists(p)) {
            return Err(GistError::FileNotFound {
                path: missing.display().to_string(),
            });
        }

        let mut gist = Gist::new_local(description, public);
        for path in paths {
            let bytes = self.fs.read_file(path).map_err(|e| GistError::FileRead {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            gist.add_file(base_name(path), String::from_utf8_lossy(&bytes));
        }

        self.remote.create(&mut gist).await?;
        tracing::info!(id = %gist.id, files = gist.files.len(), "published gist");
        Ok(gist)
    }

    /// Resolve an identifier or unambiguous prefix.
    ///
    /// Fresh cache entries are matched first (an exact match wins over
    /// prefixes). With no cached match the literal string is fetched from
    /// the remote store. Surrounding whitespace is trimmed first.
    pub async fn get_gist(&self, id: &str) -> GistResult<Gist> {
        let id = id.trim();
        if id.is_empty() {
            return Err(GistError::InvalidIdentifier { id: id.to_string() });
        }

        if let Some(gists) = self.cached() {
            if let Some(exact) = gists.iter().find(|g| g.id.as_str() == id) {
                return Ok(exact.clone());
            }
            let mut matches = gists.into_iter().filter(|g| g.id.starts_with(id));
            match (matches.next(), matches.count()) {
                (Some(gist), 0) => return Ok(gist),
                (Some(_), rest) => {
                    return Err(GistError::AmbiguousIdentifier {
                        prefix: id.to_string(),
                        matches: rest + 1,
                    })
                }
                (None, _) => {}
            }
        }

        tracing::debug!(id, "fetching gist directly");
        self.remote.fetch_by_id(&GistId::from(id)).await
    }

    /// Resolve like [`get_gist`](Self::get_gist), then fetch the full gist
    /// when file contents are not loaded (listing responses omit them).
    pub async fn get_gist_with_content(&self, id: &str) -> GistResult<Gist> {
        let gist = self.get_gist(id).await?;
        if gist.files.values().all(|f| f.content.is_some()) {
            return Ok(gist);
        }
        self.remote.fetch_by_id(&gist.id).await
    }

    /// Push `gist` under the authoritative `id`.
    ///
    /// The cache is invalidated whatever the outcome.
    pub async fn update_gist(&self, id: &GistId, mut gist: Gist) -> GistResult<()> {
        if !id.is_valid() {
            return Err(GistError::InvalidIdentifier { id: id.to_string() });
        }
        gist.id = id.clone();

        let result = self.remote.update(&gist).await;
        self.invalidate_cache();

        if let Err(e) = &result {
            tracing::warn!(id = %id, code = e.error_code(), error = %e, "update failed");
        }
        result
    }

    /// Flip visibility of `gist`. Returns the new `public` value on success.
    pub async fn toggle_visibility(&self, gist: &Gist) -> GistResult<bool> {
        let mut updated = gist.clone();
        updated.public = !gist.public;
        let public = updated.public;
        self.update_gist(&gist.id, updated).await?;
        Ok(public)
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryCache, InMemoryFileSystem, InMemoryRemote};

    fn persisted(id: &str, public: bool) -> Gist {
        let mut gist = Gist::new_local(format!("gist {}", id), public);
        gist.id = GistId::from(id);
        gist.add_file("a.txt", "a");
        gist
    }

    struct Fixture {
        remote: InMemoryRemote,
        cache: InMemoryCache,
        fs: InMemoryFileSystem,
        service: GistService,
    }

    fn fixture(remote: InMemoryRemote, cache: InMemoryCache) -> Fixture {
        let fs = InMemoryFileSystem::new();
        let service = GistService::new(
            Arc::new(remote.clone()),
            Arc::new(cache.clone()),
            Arc::new(fs.clone()),
        );
        Fixture {
            remote,
            cache,
            fs,
            service,
        }
    }

    #[tokio::test]
    async fn test_list_fills_cache_once() {
        let f = fixture(
            InMemoryRemote::with_gists(vec![persisted("abc", false)]),
            InMemoryCache::new(),
        );

        let first = f.service.list_gists().await.unwrap();
        let second = f.service.list_gists().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(f.remote.fetch_all_calls(), 1);
        assert_eq!(f.cache.save_calls(), 1);
    }

    #[tokio::test]
    async fn test_list_treats_empty_snapshot_as_miss() {
        let f = fixture(
            InMemoryRemote::with_gists(vec![persisted("abc", false)]),
            InMemoryCache::with_gists(vec![]),
        );

        let gists = f.service.list_gists().await.unwrap();
        assert_eq!(gists.len(), 1);
        assert_eq!(f.remote.fetch_all_calls(), 1);
    }

    #[tokio::test]
    async fn test_list_survives_cache_save_failure() {
        let cache = InMemoryCache::new();
        cache.set_save_should_fail(true);
        let f = fixture(InMemoryRemote::with_gists(vec![persisted("abc", true)]), cache);

        let gists = f.service.list_gists().await.unwrap();
        assert_eq!(gists.len(), 1);
    }

    #[tokio::test]
    async fn test_list_propagates_remote_failure() {
        let remote = InMemoryRemote::new();
        remote.fail_next_fetch(GistError::remote(503, "Service Unavailable"));
        let f = fixture(remote, InMemoryCache::new());

        let err = f.service.list_gists().await.unwrap_err();
        assert_eq!(err, GistError::remote(503, "Service Unavailable"));
    }

    #[tokio::test]
    async fn test_publish_keys_by_base_name() {
        let f = fixture(InMemoryRemote::new(), InMemoryCache::new());
        f.fs.add_file("/work/src/main.rs", "fn main() {}");
        f.fs.add_file("/work/README.md", "# hi");

        let gist = f
            .service
            .publish_files(
                &[PathBuf::from("/work/src/main.rs"), PathBuf::from("/work/README.md")],
                "demo",
                true,
            )
            .await
            .unwrap();

        assert_eq!(gist.id.as_str(), "gist1");
        assert_eq!(gist.filenames(), vec!["README.md", "main.rs"]);
        assert!(gist.public);
        assert_eq!(f.cache.clear_calls(), 0);
    }

    #[tokio::test]
    async fn test_get_gist_empty_id() {
        let f = fixture(InMemoryRemote::new(), InMemoryCache::new());
        let err = f.service.get_gist("  ").await.unwrap_err();
        assert!(matches!(err, GistError::InvalidIdentifier { .. }));
    }

    #[tokio::test]
    async fn test_get_gist_exact_match_beats_prefix() {
        let f = fixture(
            InMemoryRemote::new(),
            InMemoryCache::with_gists(vec![persisted("abc", false), persisted("abcd", false)]),
        );

        let gist = f.service.get_gist("abc").await.unwrap();
        assert_eq!(gist.id.as_str(), "abc");
        assert_eq!(f.remote.fetch_by_id_calls(), 0);
    }

    #[tokio::test]
    async fn test_get_gist_ambiguous_prefix() {
        let f = fixture(
            InMemoryRemote::new(),
            InMemoryCache::with_gists(vec![persisted("abc1", false), persisted("abc2", false)]),
        );

        let err = f.service.get_gist("abc").await.unwrap_err();
        assert_eq!(
            err,
            GistError::AmbiguousIdentifier {
                prefix: "abc".to_string(),
                matches: 2
            }
        );
    }

    #[tokio::test]
    async fn test_get_gist_with_content_refetches() {
        let mut listed = persisted("abc", false);
        for file in listed.files.values_mut() {
            file.content = None;
        }
        let f = fixture(
            InMemoryRemote::with_gists(vec![persisted("abc", false)]),
            InMemoryCache::with_gists(vec![listed]),
        );

        let gist = f.service.get_gist_with_content("ab").await.unwrap();
        assert_eq!(gist.files["a.txt"].content.as_deref(), Some("a"));
        assert_eq!(f.remote.fetch_by_id_calls(), 1);
    }

    #[tokio::test]
    async fn test_update_overrides_embedded_id() {
        let f = fixture(
            InMemoryRemote::with_gists(vec![persisted("abc", false)]),
            InMemoryCache::new(),
        );

        let mut payload = persisted("other", false);
        payload.description = "renamed".to_string();
        f.service
            .update_gist(&GistId::from("abc"), payload)
            .await
            .unwrap();

        assert_eq!(f.remote.get("abc").unwrap().description, "renamed");
        assert!(f.remote.get("other").is_none());
    }

    #[tokio::test]
    async fn test_update_rejects_empty_id_without_remote_call() {
        let f = fixture(InMemoryRemote::new(), InMemoryCache::new());
        let err = f
            .service
            .update_gist(&GistId::default(), persisted("abc", false))
            .await
            .unwrap_err();
        assert!(matches!(err, GistError::InvalidIdentifier { .. }));
        assert_eq!(f.remote.update_calls(), 0);
    }

    #[tokio::test]
    async fn test_toggle_visibility_returns_new_value() {
        let f = fixture(
            InMemoryRemote::with_gists(vec![persisted("abc", false)]),
            InMemoryCache::new(),
        );

        let public = f
            .service
            .toggle_visibility(&persisted("abc", false))
            .await
            .unwrap();
        assert!(public);
        assert!(f.remote.get("abc").unwrap().public);
    }

    #[tokio::test]
    async fn test_list_by_tag() {
        let mut tagged = persisted("t1", true);
        tagged.description = "Helpers #Go".to_string();
        let f = fixture(
            InMemoryRemote::with_gists(vec![tagged, persisted("t2", true)]),
            InMemoryCache::new(),
        );

        let gists = f.service.list_by_tag("go").await.unwrap();
        assert_eq!(gists.len(), 1);
        assert_eq!(gists[0].id.as_str(), "t1");
    }
}
