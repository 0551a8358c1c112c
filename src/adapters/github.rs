//! GitHub gist API adapter.
//!
//! Maps [`RemoteStore`] operations onto the GitHub REST API. The store does
//! not retry or cache; every call is exactly one logical request.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::adapters::ReqwestHttpClient;
use crate::config::Config;
use crate::error::{GistError, GistResult};
use crate::models::{Gist, GistId};
use crate::traits::{Headers, HttpClient, RemoteStore, Response};

/// Default GitHub API base URL.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Page size for listing requests (GitHub maximum).
const PER_PAGE: usize = 100;

/// Hard stop for pagination.
const MAX_PAGES: usize = 30;

const USER_AGENT: &str = "gist-cli";
const ACCEPT: &str = "application/vnd.github.v3+json";

/// Message returned when a visibility change is attempted.
pub const VISIBILITY_UNSUPPORTED: &str =
    "GitHub does not support changing gist visibility after creation";

#[derive(Serialize)]
struct FilePayload<'a> {
    content: &'a str,
}

#[derive(Serialize)]
struct CreatePayload<'a> {
    description: &'a str,
    public: bool,
    files: BTreeMap<&'a str, FilePayload<'a>>,
}

#[derive(Serialize)]
struct UpdatePayload<'a> {
    description: &'a str,
    files: BTreeMap<&'a str, FilePayload<'a>>,
}

/// Fields of the create response copied back into the local gist.
#[derive(Deserialize)]
struct CreatedGist {
    id: GistId,
    #[serde(default)]
    html_url: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Remote store backed by the GitHub gist API.
#[derive(Clone)]
pub struct GitHubStore {
    http: Arc<dyn HttpClient>,
    base_url: String,
    token: String,
    username: String,
}

impl std::fmt::Debug for GitHubStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubStore")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl GitHubStore {
    /// Create a store talking to `base_url` through `http`.
    pub fn new(
        http: Arc<dyn HttpClient>,
        base_url: impl Into<String>,
        token: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            username: username.into(),
        }
    }

    /// Create a store using reqwest and the endpoint/credentials in `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(ReqwestHttpClient::new()),
            config.api_base_url.clone(),
            config.github_token.clone(),
            config.github_user.clone(),
        )
    }

    fn headers(&self, with_body: bool) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Authorization".to_string(), format!("Bearer {}", self.token));
        headers.insert("Accept".to_string(), ACCEPT.to_string());
        headers.insert("User-Agent".to_string(), USER_AGENT.to_string());
        if with_body {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        headers
    }

    fn gist_url(&self, id: &GistId) -> String {
        format!("{}/gists/{}", self.base_url, id)
    }

    /// Turn a non-success response into a classified error.
    fn api_error(response: &Response) -> GistError {
        GistError::remote(response.status, response.text_lossy())
    }

    /// File map for create/update payloads. Files whose content was never
    /// loaded are left out so the remote keeps them unchanged.
    fn file_payload(gist: &Gist) -> BTreeMap<&str, FilePayload<'_>> {
        gist.files
            .iter()
            .filter_map(|(key, file)| {
                let name = if file.filename.is_empty() {
                    key.as_str()
                } else {
                    file.filename.as_str()
                };
                file.content
                    .as_deref()
                    .map(|content| (name, FilePayload { content }))
            })
            .collect()
    }
}

#[async_trait]
impl RemoteStore for GitHubStore {
    async fn fetch_all(&self) -> GistResult<Vec<Gist>> {
        let headers = self.headers(false);
        let mut gists = Vec::new();

        for page in 1..=MAX_PAGES {
            let url = format!(
                "{}/gists?per_page={}&page={}",
                self.base_url, PER_PAGE, page
            );
            let response = self.http.get(&url, &headers).await?;
            if response.status != 200 {
                return Err(Self::api_error(&response));
            }

            let batch: Vec<Gist> = response.json()?;
            let last_page = batch.len() < PER_PAGE;
            gists.extend(batch);
            if last_page {
                tracing::debug!(user = %self.username, count = gists.len(), "fetched gists from GitHub");
                return Ok(gists);
            }
        }

        // Last allowed page was full, so the listing is incomplete.
        tracing::warn!(pages = MAX_PAGES, count = gists.len(), "gist listing exceeds page limit");
        Err(GistError::InvalidResponse(format!(
            "more than {} gists listed, stopped after {} pages",
            MAX_PAGES * PER_PAGE,
            MAX_PAGES
        )))
    }

    async fn fetch_by_id(&self, id: &GistId) -> GistResult<Gist> {
        let response = self.http.get(&self.gist_url(id), &self.headers(false)).await?;

        match response.status {
            200 => Ok(response.json()?),
            404 => Err(GistError::GistNotFound { id: id.to_string() }),
            _ => Err(Self::api_error(&response)),
        }
    }

    async fn create(&self, gist: &mut Gist) -> GistResult<()> {
        let payload = CreatePayload {
            description: &gist.description,
            public: gist.public,
            files: Self::file_payload(gist),
        };
        let body = serde_json::to_string(&payload)?;

        let url = format!("{}/gists", self.base_url);
        let response = self.http.post(&url, &body, &self.headers(true)).await?;
        if response.status != 201 {
            return Err(Self::api_error(&response));
        }

        let created: CreatedGist = response.json()?;
        gist.id = created.id;
        gist.html_url = created.html_url;
        gist.created_at = created.created_at;
        gist.updated_at = created.updated_at;

        tracing::info!(id = %gist.id, "created gist");
        Ok(())
    }

    async fn update(&self, gist: &Gist) -> GistResult<()> {
        // Visibility is fixed at creation on GitHub. Compare with the remote
        // copy and refuse rather than sending a PATCH that would be ignored.
        let current = self.fetch_by_id(&gist.id).await?;
        if current.public != gist.public {
            return Err(GistError::remote(422, VISIBILITY_UNSUPPORTED));
        }

        let payload = UpdatePayload {
            description: &gist.description,
            files: Self::file_payload(gist),
        };
        let body = serde_json::to_string(&payload)?;

        let response = self
            .http
            .patch(&self.gist_url(&gist.id), &body, &self.headers(true))
            .await?;
        if response.status != 200 {
            return Err(Self::api_error(&response));
        }

        tracing::info!(id = %gist.id, "updated gist");
        Ok(())
    }
}
