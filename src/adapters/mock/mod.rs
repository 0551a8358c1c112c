//! Test doubles for the trait seams.
//!
//! These are compiled into the library so integration tests under `tests/`
//! can wire a [`crate::service::GistService`] without network or disk access.

mod cache;
mod fs;
mod http;
mod remote;

pub use cache::InMemoryCache;
pub use fs::InMemoryFileSystem;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use remote::InMemoryRemote;
