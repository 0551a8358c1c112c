//! JSON file backed cache store.
//!
//! The snapshot lives in a single file, by default
//! `<platform cache dir>/gist/gists.json`. Writes go to a sibling temporary
//! file that is renamed over the target, so readers see either the previous
//! snapshot or the new one.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GistError, GistResult};
use crate::models::Gist;
use crate::traits::CacheStore;

/// Directory created under the platform cache dir.
pub const CACHE_DIR: &str = "gist";

/// Snapshot file name.
pub const CACHE_FILE: &str = "gists.json";

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    fetched_at: DateTime<Utc>,
    gists: Vec<Gist>,
}

/// Cache store persisting the snapshot as JSON.
#[derive(Debug, Clone)]
pub struct FileCache {
    path: PathBuf,
}

impl FileCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default snapshot location, or `None` when no cache dir can be determined.
    pub fn default_path() -> Option<PathBuf> {
        dirs::cache_dir().map(|dir| dir.join(CACHE_DIR).join(CACHE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Time of the last successful save, if a readable snapshot exists.
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.read_snapshot().ok().map(|s| s.fetched_at)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn read_snapshot(&self) -> GistResult<Snapshot> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(GistError::CacheEmpty),
            Err(e) => return Err(cache_error(&self.path, e)),
        };

        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| GistError::Cache(format!("{}: {}", self.path.display(), e)))
    }

    fn write_snapshot(&self, snapshot: &Snapshot) -> GistResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| cache_error(parent, e))?;
            }
        }

        let temp = self.temp_path();
        let file = File::create(&temp).map_err(|e| cache_error(&temp, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, snapshot)
            .map_err(|e| GistError::Cache(format!("{}: {}", temp.display(), e)))?;
        writer.flush().map_err(|e| cache_error(&temp, e))?;
        drop(writer);

        fs::rename(&temp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp);
            cache_error(&self.path, e)
        })
    }
}

fn cache_error(path: &Path, err: std::io::Error) -> GistError {
    GistError::Cache(format!("{}: {}", path.display(), err))
}

impl CacheStore for FileCache {
    fn get(&self) -> GistResult<Vec<Gist>> {
        self.read_snapshot().map(|s| s.gists)
    }

    fn save(&self, gists: &[Gist]) -> GistResult<()> {
        let snapshot = Snapshot {
            fetched_at: Utc::now(),
            gists: gists.to_vec(),
        };
        self.write_snapshot(&snapshot)?;
        tracing::debug!(count = gists.len(), path = %self.path.display(), "saved cache snapshot");
        Ok(())
    }

    fn is_stale(&self) -> bool {
        !self.path.exists()
    }

    fn clear(&self) -> GistResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(cache_error(&self.path, e)),
        }
    }
}
