// src/github/fetch.rs
// =============================================================================
// HTTP access to the GitHub contents API and raw file downloads.
//
// - Directory listings: GET {api}/repos/{owner}/{repo}/contents/{path}[?ref=R]
// - File contents:      GET on the entry's download_url
//
// Every request carries the configured User-Agent, the v3 Accept header,
// and an Authorization header when a token was given.
//
// There is no retry. A non-success status is returned as
// FetchError::Status and ends the run; re-running the tool is the recovery.
// =============================================================================

use super::contents::{ContentEntry, ContentSource};
use super::repo::RepoRef;
use crate::config::ScrapeConfig;
use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Response};
use tracing::debug;
use url::Url;

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Contents API client for one repository.
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    api_url: Url,
    repo: RepoRef,
    git_ref: Option<String>,
}

impl GithubClient {
    pub fn new(config: &ScrapeConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, config.user_agent.clone());
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
        if let Some(authorization) = &config.authorization {
            headers.insert(AUTHORIZATION, authorization.clone());
        }

        // No explicit timeout: reqwest's defaults apply
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(FetchError::Client)?;

        Ok(GithubClient {
            client,
            api_url: config.api_url.clone(),
            repo: config.repo.clone(),
            git_ref: config.git_ref.clone(),
        })
    }

    /// Builds the listing URL for a repository-relative path.
    ///
    /// Each path segment is percent-encoded on its own, so names with
    /// spaces or '#' survive.
    pub fn contents_url(&self, path: &str) -> Result<Url, FetchError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.api_url.to_string()))?
            .pop_if_empty()
            .extend(["repos", self.repo.owner.as_str(), self.repo.name.as_str(), "contents"])
            .extend(path.split('/').filter(|segment| !segment.is_empty()));

        if let Some(git_ref) = &self.git_ref {
            url.query_pairs_mut().append_pair("ref", git_ref);
        }

        Ok(url)
    }

    async fn get(&self, url: &str) -> Result<Response, FetchError> {
        debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        Ok(response)
    }

    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        self.get(url)
            .await?
            .text()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })
    }
}

#[async_trait]
impl ContentSource for GithubClient {
    async fn list_dir(&self, path: &str) -> Result<Vec<ContentEntry>, FetchError> {
        let url = self.contents_url(path)?;
        let body = self.get_text(url.as_str()).await?;

        // A file path returns a single object instead of an array; that is
        // a wrong base path, reported as a decode error
        serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }

    async fn fetch_text(&self, entry: &ContentEntry) -> Result<String, FetchError> {
        let download_url =
            entry
                .download_url
                .as_deref()
                .ok_or_else(|| FetchError::MissingDownloadUrl {
                    path: entry.path.clone(),
                })?;

        self.get_text(download_url).await
    }
}
