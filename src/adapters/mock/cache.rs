//! In-memory cache store for testing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::{GistError, GistResult};
use crate::models::Gist;
use crate::traits::CacheStore;

/// Cache that keeps the snapshot in memory.
///
/// Mirrors the file cache contract: `None` means nothing saved (stale), an
/// empty snapshot is still "fresh" but the orchestrator treats it as a miss.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCache {
    snapshot: Arc<Mutex<Option<Vec<Gist>>>>,
    save_should_fail: Arc<Mutex<bool>>,
    clear_should_fail: Arc<Mutex<bool>>,
    save_calls: Arc<AtomicUsize>,
    clear_calls: Arc<AtomicUsize>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache that already holds `gists`.
    pub fn with_gists(gists: Vec<Gist>) -> Self {
        let cache = Self::new();
        *cache.snapshot.lock().unwrap() = Some(gists);
        cache
    }

    /// Configure whether save should fail.
    pub fn set_save_should_fail(&self, should_fail: bool) {
        *self.save_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether clear should fail.
    pub fn set_clear_should_fail(&self, should_fail: bool) {
        *self.clear_should_fail.lock().unwrap() = should_fail;
    }

    /// Current snapshot, if any.
    pub fn snapshot(&self) -> Option<Vec<Gist>> {
        self.snapshot.lock().unwrap().clone()
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub fn clear_calls(&self) -> usize {
        self.clear_calls.load(Ordering::SeqCst)
    }
}

impl CacheStore for InMemoryCache {
    fn get(&self) -> GistResult<Vec<Gist>> {
        self.snapshot
            .lock()
            .unwrap()
            .clone()
            .ok_or(GistError::CacheEmpty)
    }

    fn save(&self, gists: &[Gist]) -> GistResult<()> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        if *self.save_should_fail.lock().unwrap() {
            return Err(GistError::Cache("mock save failure".to_string()));
        }
        *self.snapshot.lock().unwrap() = Some(gists.to_vec());
        Ok(())
    }

    fn is_stale(&self) -> bool {
        self.snapshot.lock().unwrap().is_none()
    }

    fn clear(&self) -> GistResult<()> {
        self.clear_calls.fetch_add(1, Ordering::SeqCst);
        if *self.clear_should_fail.lock().unwrap() {
            return Err(GistError::Cache("mock clear failure".to_string()));
        }
        *self.snapshot.lock().unwrap() = None;
        Ok(())
    }
}
