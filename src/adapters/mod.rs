//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`GitHubStore`] - remote store over the GitHub gist API
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileCache`] - JSON snapshot cache on disk
//! - [`OsFileSystem`] - filesystem access through `std::fs`
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::InMemoryRemote`] - Remote store with call counters
//! - [`mock::InMemoryCache`] - Cache with failure switches
//! - [`mock::InMemoryFileSystem`] - Path-to-bytes map

pub mod file_cache;
pub mod github;
pub mod mock;
pub mod os_fs;
pub mod reqwest_http;

pub use file_cache::FileCache;
pub use github::GitHubStore;
pub use os_fs::OsFileSystem;
pub use reqwest_http::ReqwestHttpClient;
