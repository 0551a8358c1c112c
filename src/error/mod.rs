//! Error taxonomy for gist operations.
//!
//! Every fallible operation in the crate returns [`GistResult`]. The variants
//! map onto the categories callers care about:
//!
//! | Variant | Meaning | Surfaced to users |
//! |---------|---------|-------------------|
//! | `FileNotFound` | A local path given to publish does not exist | Yes |
//! | `GistNotFound` | Neither cache nor remote resolved an identifier | Yes |
//! | `RemoteUnavailable` | Transport or API-level failure (status + message) | Yes |
//! | `InvalidIdentifier` | Empty identifier | Yes |
//! | `AmbiguousIdentifier` | Prefix matched several cached gists | Yes |
//! | `ConfigMissing` | Credentials could not be resolved | Yes |
//! | `CacheEmpty` | Cache never populated (always papered over) | No |
//!
//! # Example
//!
//! ```
//! use gist::error::GistError;
//!
//! let err = GistError::RemoteUnavailable {
//!     status: Some(502),
//!     message: "Bad Gateway".to_string(),
//! };
//! assert!(err.is_retryable());
//! assert_eq!(err.to_string(), "GitHub API error 502: Bad Gateway");
//! ```

use std::fmt;

use thiserror::Error;

/// Result alias used across the crate.
pub type GistResult<T> = Result<T, GistError>;

/// All errors produced by the orchestration layer and its collaborators.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GistError {
    /// A local file passed to publish does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// A local file exists but could not be read.
    #[error("read file {path}: {message}")]
    FileRead { path: String, message: String },

    /// The identifier resolved neither from cache nor from the remote store.
    #[error("gist not found: {id}")]
    GistNotFound { id: String },

    /// The remote store failed. `status` is `None` when no HTTP response arrived.
    #[error("{}", RemoteDisplay { status: *status, message })]
    RemoteUnavailable {
        status: Option<u16>,
        message: String,
    },

    /// The remote answered with a body we could not decode.
    #[error("invalid response from GitHub: {0}")]
    InvalidResponse(String),

    /// Empty or otherwise unusable identifier.
    #[error("invalid gist ID: {id}")]
    InvalidIdentifier { id: String },

    /// An identifier prefix matched more than one cached gist.
    #[error("gist ID prefix {prefix} is ambiguous ({matches} matches)")]
    AmbiguousIdentifier { prefix: String, matches: usize },

    /// Credentials could not be resolved from any source.
    #[error("missing configuration: {field}")]
    ConfigMissing { field: String },

    /// The cache has never been populated or was cleared.
    #[error("cache is empty")]
    CacheEmpty,

    /// The cache could not be read or written.
    #[error("cache error: {0}")]
    Cache(String),
}

/// Formats `RemoteUnavailable` differently depending on whether a status exists.
struct RemoteDisplay<'a> {
    status: Option<u16>,
    message: &'a str,
}

impl fmt::Display for RemoteDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "GitHub API error {}: {}", status, self.message),
            None => write!(f, "GitHub API unavailable: {}", self.message),
        }
    }
}

impl GistError {
    /// Build a remote error from an HTTP status and response body.
    pub fn remote(status: u16, message: impl Into<String>) -> Self {
        GistError::RemoteUnavailable {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Build a remote error for failures where no response was received.
    pub fn transport(message: impl Into<String>) -> Self {
        GistError::RemoteUnavailable {
            status: None,
            message: message.into(),
        }
    }

    /// True for errors meaning "the thing asked for does not exist".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GistError::FileNotFound { .. } | GistError::GistNotFound { .. }
        )
    }

    /// True when retrying the same request later may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            GistError::RemoteUnavailable { status: None, .. } => true,
            GistError::RemoteUnavailable {
                status: Some(status),
                ..
            } => *status >= 500 || *status == 429 || *status == 408,
            _ => false,
        }
    }

    /// Short stable code, used in log fields.
    pub fn error_code(&self) -> &'static str {
        match self {
            GistError::FileNotFound { .. } => "file_not_found",
            GistError::FileRead { .. } => "file_read",
            GistError::GistNotFound { .. } => "gist_not_found",
            GistError::RemoteUnavailable { .. } => "remote_unavailable",
            GistError::InvalidResponse(_) => "invalid_response",
            GistError::InvalidIdentifier { .. } => "invalid_identifier",
            GistError::AmbiguousIdentifier { .. } => "ambiguous_identifier",
            GistError::ConfigMissing { .. } => "config_missing",
            GistError::CacheEmpty => "cache_empty",
            GistError::Cache(_) => "cache",
        }
    }
}

impl From<serde_json::Error> for GistError {
    fn from(e: serde_json::Error) -> Self {
        GistError::InvalidResponse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            GistError::FileNotFound {
                path: "missing.txt".to_string()
            }
            .to_string(),
            "file not found: missing.txt"
        );
        assert_eq!(
            GistError::GistNotFound {
                id: "abc".to_string()
            }
            .to_string(),
            "gist not found: abc"
        );
        assert_eq!(
            GistError::remote(404, "Not Found").to_string(),
            "GitHub API error 404: Not Found"
        );
        assert_eq!(
            GistError::transport("connection refused").to_string(),
            "GitHub API unavailable: connection refused"
        );
        assert_eq!(
            GistError::ConfigMissing {
                field: "github credentials".to_string()
            }
            .to_string(),
            "missing configuration: github credentials"
        );
    }

    #[test]
    fn test_is_retryable() {
        assert!(GistError::transport("timeout").is_retryable());
        assert!(GistError::remote(500, "").is_retryable());
        assert!(GistError::remote(429, "").is_retryable());
        assert!(!GistError::remote(422, "").is_retryable());
        assert!(!GistError::CacheEmpty.is_retryable());
    }

    #[test]
    fn test_is_not_found() {
        assert!(GistError::GistNotFound { id: "x".into() }.is_not_found());
        assert!(GistError::FileNotFound { path: "x".into() }.is_not_found());
        assert!(!GistError::remote(404, "").is_not_found());
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            GistError::FileNotFound { path: String::new() },
            GistError::GistNotFound { id: String::new() },
            GistError::transport(""),
            GistError::InvalidIdentifier { id: String::new() },
            GistError::ConfigMissing { field: String::new() },
            GistError::CacheEmpty,
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.error_code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}
