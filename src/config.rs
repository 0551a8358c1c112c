//! Runtime configuration.
//!
//! Configuration is resolved once at startup into a [`Config`] value and then
//! passed to [`crate::service::GistService`]. Credentials come from, in order:
//!
//! 1. `GITHUB_USER` plus `GITHUB_TOKEN` (or `GITHUB_PERSONAL_ACCESS_TOKEN`)
//! 2. `~/.gistconfig`, a JSON object with `github_user` and `github_token`
//!
//! Both values must come from the same source. A `.env` file in the current
//! directory (else the home directory) is loaded first via [`load_dotenv`]
//! without overriding variables that are already set.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::adapters::file_cache::{FileCache, CACHE_DIR, CACHE_FILE};
use crate::adapters::github::GITHUB_API_URL;
use crate::error::{GistError, GistResult};

pub const ENV_USER: &str = "GITHUB_USER";
pub const ENV_TOKEN: &str = "GITHUB_TOKEN";
pub const ENV_TOKEN_FALLBACK: &str = "GITHUB_PERSONAL_ACCESS_TOKEN";
pub const ENV_API_URL: &str = "GIST_API_URL";
pub const ENV_CACHE_PATH: &str = "GIST_CACHE_PATH";

/// Name of the credentials file in the home directory.
pub const CONFIG_FILE: &str = ".gistconfig";

/// Resolved configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub github_user: String,
    pub github_token: String,
    /// GitHub API base URL (default: https://api.github.com)
    pub api_base_url: String,
    /// Cache snapshot file
    pub cache_path: PathBuf,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("github_user", &self.github_user)
            .field("github_token", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .field("cache_path", &self.cache_path)
            .finish()
    }
}

impl Config {
    /// Create a config with the given credentials and default endpoint/cache.
    pub fn new(github_user: impl Into<String>, github_token: impl Into<String>) -> Self {
        Self {
            github_user: github_user.into(),
            github_token: github_token.into(),
            api_base_url: GITHUB_API_URL.to_string(),
            cache_path: default_cache_path(),
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = path.into();
        self
    }

    /// Load `.env`, then resolve from the process environment and `~/.gistconfig`.
    pub fn load() -> GistResult<Self> {
        load_dotenv();
        ConfigLoader::from_env().load()
    }
}

/// Default cache location: platform cache dir, else the system temp dir.
pub fn default_cache_path() -> PathBuf {
    FileCache::default_path()
        .unwrap_or_else(|| std::env::temp_dir().join(CACHE_DIR).join(CACHE_FILE))
}

/// Directory holding the cache snapshot and the session log.
pub fn cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(CACHE_DIR)
}

/// Load a `.env` file from the current directory, falling back to the home
/// directory. Existing variables win. Returns the path that was loaded.
pub fn load_dotenv() -> Option<PathBuf> {
    let local = PathBuf::from(".env");
    let candidate = if local.exists() {
        Some(local)
    } else {
        dirs::home_dir()
            .map(|home| home.join(".env"))
            .filter(|p| p.exists())
    }?;

    match dotenvy::from_path(&candidate) {
        Ok(()) => {
            tracing::debug!(path = %candidate.display(), "loaded .env file");
            Some(candidate)
        }
        Err(e) => {
            tracing::warn!(path = %candidate.display(), error = %e, "failed to parse .env file");
            None
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    github_user: String,
    #[serde(default)]
    github_token: String,
}

type Lookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Resolves a [`Config`] from an environment lookup and an optional file.
///
/// # Example
///
/// ```ignore
/// use gist::config::ConfigLoader;
///
/// let config = ConfigLoader::new(|key| match key {
///     "GITHUB_USER" => Some("octocat".into()),
///     "GITHUB_TOKEN" => Some("ghp_x".into()),
///     _ => None,
/// })
/// .without_config_file()
/// .load()?;
/// ```
pub struct ConfigLoader {
    lookup: Lookup,
    config_file: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader over a custom variable lookup, reading `~/.gistconfig`.
    pub fn new<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            lookup: Box::new(lookup),
            config_file: dirs::home_dir().map(|home| home.join(CONFIG_FILE)),
        }
    }

    /// Loader reading the process environment.
    pub fn from_env() -> Self {
        Self::new(|key| std::env::var(key).ok())
    }

    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    pub fn without_config_file(mut self) -> Self {
        self.config_file = None;
        self
    }

    fn var(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|v| !v.is_empty())
    }

    fn credentials_from_env(&self) -> Option<(String, String)> {
        let user = self.var(ENV_USER)?;
        let token = self
            .var(ENV_TOKEN)
            .or_else(|| self.var(ENV_TOKEN_FALLBACK))?;
        Some((user, token))
    }

    fn credentials_from_file(path: &Path) -> Option<(String, String)> {
        let data = std::fs::read(path).ok()?;
        let file: ConfigFile = match serde_json::from_slice(&data) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config file");
                return None;
            }
        };
        if file.github_user.is_empty() || file.github_token.is_empty() {
            return None;
        }
        Some((file.github_user, file.github_token))
    }

    /// Resolve the configuration.
    pub fn load(&self) -> GistResult<Config> {
        let (user, token) = self
            .credentials_from_env()
            .or_else(|| {
                self.config_file
                    .as_deref()
                    .and_then(Self::credentials_from_file)
            })
            .ok_or_else(|| GistError::ConfigMissing {
                field: "github credentials".to_string(),
            })?;

        let mut config = Config::new(user, token);
        if let Some(url) = self.var(ENV_API_URL) {
            config = config.with_api_base_url(url);
        }
        if let Some(path) = self.var(ENV_CACHE_PATH) {
            config = config.with_cache_path(path);
        }
        Ok(config)
    }
}
