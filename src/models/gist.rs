use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::deserialize_nullable_string;

/// Number of identifier characters shown in listings.
pub const SHORT_ID_LEN: usize = 8;

/// Opaque gist identifier assigned by the remote store.
///
/// Empty until the gist has been created remotely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GistId(String);

impl GistId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// An identifier is valid once it is non-empty.
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First [`SHORT_ID_LEN`] characters, as shown in listings.
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(SHORT_ID_LEN) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}

impl fmt::Display for GistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GistId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for GistId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A single file within a gist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GistFile {
    /// Filename, duplicated from the map key for cross-checking
    #[serde(default)]
    pub filename: String,
    /// File content. Listing responses omit it, so it may be absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Size in bytes as reported by the remote
    #[serde(default)]
    pub size: u64,
    /// Language detected by the remote, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl GistFile {
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            filename: filename.into(),
            size: content.len() as u64,
            content: Some(content),
            language: None,
        }
    }

    /// Line count of the loaded content (0 when content is not loaded).
    pub fn line_count(&self) -> usize {
        match &self.content {
            Some(content) => content.matches('\n').count() + 1,
            None => 0,
        }
    }

    /// Byte size, preferring the loaded content over the reported size.
    pub fn byte_size(&self) -> u64 {
        self.content
            .as_ref()
            .map(|c| c.len() as u64)
            .unwrap_or(self.size)
    }
}

/// A remote-hosted bundle of one or more text files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gist {
    #[serde(default)]
    pub id: GistId,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub description: String,
    #[serde(default)]
    pub public: bool,
    /// Files keyed by filename
    #[serde(default)]
    pub files: BTreeMap<String, GistFile>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Canonical web address, assigned by the remote on creation
    #[serde(default)]
    pub html_url: String,
}

impl Gist {
    /// Create a local gist that has not been persisted yet.
    pub fn new_local(description: impl Into<String>, public: bool) -> Self {
        let now = Utc::now();
        Self {
            id: GistId::default(),
            description: description.into(),
            public,
            files: BTreeMap::new(),
            created_at: now,
            updated_at: now,
            html_url: String::new(),
        }
    }

    /// Add or replace a file and bump `updated_at`.
    pub fn add_file(&mut self, filename: impl Into<String>, content: impl Into<String>) {
        let filename = filename.into();
        self.files
            .insert(filename.clone(), GistFile::new(filename, content));
        self.updated_at = Utc::now().max(self.created_at);
    }

    /// True once the remote store has assigned an identifier.
    pub fn is_persisted(&self) -> bool {
        self.id.is_valid()
    }

    pub fn visibility_label(&self) -> &'static str {
        if self.public {
            "public"
        } else {
            "private"
        }
    }

    /// Sorted filenames.
    pub fn filenames(&self) -> Vec<&str> {
        self.files.keys().map(String::as_str).collect()
    }

    /// Display title: description, or the first filename when empty.
    pub fn title(&self) -> &str {
        if !self.description.is_empty() {
            return &self.description;
        }
        self.files
            .keys()
            .next()
            .map(String::as_str)
            .unwrap_or("(untitled)")
    }
}
