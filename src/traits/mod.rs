//! Trait abstractions for dependency injection and testability.
//!
//! The orchestration layer only talks to its collaborators through these
//! traits, so tests can swap in the doubles from [`crate::adapters::mock`].
//!
//! # Traits
//!
//! - [`RemoteStore`] - Create/read/update gists on the remote API
//! - [`CacheStore`] - Wholesale snapshot cache with a staleness flag
//! - [`FileSystem`] - Existence checks and reads for publish inputs
//! - [`HttpClient`] - HTTP transport used by the GitHub remote store

pub mod cache;
pub mod fs;
pub mod http;
pub mod remote;

pub use cache::CacheStore;
pub use fs::FileSystem;
pub use http::{Headers, HttpClient, HttpError, Response};
pub use remote::RemoteStore;
