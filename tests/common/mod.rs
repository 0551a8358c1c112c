//! Common fixtures for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::{gist_at, Harness};
//!
//! let h = Harness::new(vec![gist_at("abc", "notes", false, "2024-01-01T00:00:00Z")]);
//! ```

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, Utc};

use gist::adapters::mock::{InMemoryCache, InMemoryFileSystem, InMemoryRemote};
use gist::models::{Gist, GistId};
use gist::service::GistService;

/// A persisted gist with one file and a fixed creation time.
pub fn gist_at(id: &str, description: &str, public: bool, created: &str) -> Gist {
    let created: DateTime<Utc> = created.parse().expect("valid RFC 3339 timestamp");
    let mut gist = Gist::new_local(description, public);
    gist.id = GistId::from(id);
    gist.html_url = format!("https://gist.github.com/{}", id);
    gist.add_file(format!("{}.txt", id), format!("content of {}\n", id));
    gist.created_at = created;
    gist.updated_at = created;
    gist
}

pub fn sample_gist(id: &str, public: bool) -> Gist {
    gist_at(id, "", public, "2024-01-01T00:00:00Z")
}

/// Service wired to in-memory doubles, with handles kept for assertions.
pub struct Harness {
    pub remote: InMemoryRemote,
    pub cache: InMemoryCache,
    pub fs: InMemoryFileSystem,
    pub service: Arc<GistService>,
}

impl Harness {
    /// Remote holds `gists`; cache starts empty.
    pub fn new(gists: Vec<Gist>) -> Self {
        Self::with_cache(gists, InMemoryCache::new())
    }

    pub fn with_cache(gists: Vec<Gist>, cache: InMemoryCache) -> Self {
        let remote = InMemoryRemote::with_gists(gists);
        let fs = InMemoryFileSystem::new();
        let service = Arc::new(GistService::new(
            Arc::new(remote.clone()),
            Arc::new(cache.clone()),
            Arc::new(fs.clone()),
        ));
        Self {
            remote,
            cache,
            fs,
            service,
        }
    }
}
