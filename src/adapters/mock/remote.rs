//! In-memory remote store for testing.

use async_trait::async_trait;
use std::collections::{BTreeMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::error::{GistError, GistResult};
use crate::models::{Gist, GistId};
use crate::traits::RemoteStore;

/// Remote store that keeps gists in memory.
///
/// Counts calls per operation and can be scripted to fail the next call of
/// a given kind. Created gists receive sequential identifiers (`gist1`,
/// `gist2`, ...). Unlike GitHub, `update` accepts visibility changes unless
/// a failure has been queued.
///
/// # Example
///
/// ```ignore
/// use gist::adapters::mock::InMemoryRemote;
///
/// let remote = InMemoryRemote::with_gists(vec![gist]);
/// remote.fail_next_update(GistError::remote(422, "nope"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryRemote {
    gists: Arc<Mutex<BTreeMap<GistId, Gist>>>,
    fetch_all_calls: Arc<AtomicUsize>,
    fetch_by_id_calls: Arc<AtomicUsize>,
    create_calls: Arc<AtomicUsize>,
    update_calls: Arc<AtomicUsize>,
    fetch_failures: Arc<Mutex<VecDeque<GistError>>>,
    create_failures: Arc<Mutex<VecDeque<GistError>>>,
    update_failures: Arc<Mutex<VecDeque<GistError>>>,
    next_id: Arc<AtomicUsize>,
}

impl InMemoryRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a remote pre-populated with `gists`.
    pub fn with_gists(gists: Vec<Gist>) -> Self {
        let remote = Self::new();
        for gist in gists {
            remote.insert(gist);
        }
        remote
    }

    /// Insert or replace a gist directly, bypassing call counters.
    pub fn insert(&self, gist: Gist) {
        self.gists.lock().unwrap().insert(gist.id.clone(), gist);
    }

    /// Current stored copy of a gist.
    pub fn get(&self, id: &str) -> Option<Gist> {
        self.gists.lock().unwrap().get(&GistId::from(id)).cloned()
    }

    pub fn len(&self) -> usize {
        self.gists.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fail the next `fetch_all` or `fetch_by_id` call with `error`.
    pub fn fail_next_fetch(&self, error: GistError) {
        self.fetch_failures.lock().unwrap().push_back(error);
    }

    /// Fail the next `create` call with `error`.
    pub fn fail_next_create(&self, error: GistError) {
        self.create_failures.lock().unwrap().push_back(error);
    }

    /// Fail the next `update` call with `error`.
    pub fn fail_next_update(&self, error: GistError) {
        self.update_failures.lock().unwrap().push_back(error);
    }

    pub fn fetch_all_calls(&self) -> usize {
        self.fetch_all_calls.load(Ordering::SeqCst)
    }

    pub fn fetch_by_id_calls(&self) -> usize {
        self.fetch_by_id_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    fn take_failure(queue: &Mutex<VecDeque<GistError>>) -> GistResult<()> {
        match queue.lock().unwrap().pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RemoteStore for InMemoryRemote {
    async fn fetch_all(&self) -> GistResult<Vec<Gist>> {
        self.fetch_all_calls.fetch_add(1, Ordering::SeqCst);
        Self::take_failure(&self.fetch_failures)?;
        Ok(self.gists.lock().unwrap().values().cloned().collect())
    }

    async fn fetch_by_id(&self, id: &GistId) -> GistResult<Gist> {
        self.fetch_by_id_calls.fetch_add(1, Ordering::SeqCst);
        Self::take_failure(&self.fetch_failures)?;
        self.gists
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| GistError::GistNotFound { id: id.to_string() })
    }

    async fn create(&self, gist: &mut Gist) -> GistResult<()> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        Self::take_failure(&self.create_failures)?;

        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        gist.id = GistId::new(format!("gist{}", n));
        gist.html_url = format!("https://gist.example/{}", gist.id);
        self.insert(gist.clone());
        Ok(())
    }

    async fn update(&self, gist: &Gist) -> GistResult<()> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        Self::take_failure(&self.update_failures)?;

        let mut gists = self.gists.lock().unwrap();
        match gists.get_mut(&gist.id) {
            Some(stored) => {
                *stored = gist.clone();
                stored.updated_at = Utc::now().max(stored.created_at);
                Ok(())
            }
            None => Err(GistError::GistNotFound {
                id: gist.id.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let remote = InMemoryRemote::new();
        let mut first = Gist::new_local("a", false);
        let mut second = Gist::new_local("b", true);

        remote.create(&mut first).await.unwrap();
        remote.create(&mut second).await.unwrap();

        assert_eq!(first.id.as_str(), "gist1");
        assert_eq!(second.id.as_str(), "gist2");
        assert_eq!(remote.len(), 2);
        assert_eq!(remote.create_calls(), 2);
    }

    #[tokio::test]
    async fn test_scripted_failure_applies_once() {
        let remote = InMemoryRemote::new();
        remote.fail_next_fetch(GistError::transport("down"));

        assert!(remote.fetch_all().await.is_err());
        assert!(remote.fetch_all().await.unwrap().is_empty());
        assert_eq!(remote.fetch_all_calls(), 2);
    }

    #[tokio::test]
    async fn test_update_unknown_gist() {
        let remote = InMemoryRemote::new();
        let mut gist = Gist::new_local("", false);
        gist.id = GistId::from("missing");

        let err = remote.update(&gist).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
