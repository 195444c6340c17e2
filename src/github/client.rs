//! GitHub REST client for organization repository listings.
//!
//! Requests are unauthenticated. Only transport defaults apply: no retries
//! and no explicit timeout.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use url::Url;

use super::RepositorySource;
use crate::config::GitHubConfig;
use crate::error::FetchError;
use crate::models::RepositoryRecord;

/// Client for `GET /orgs/{org}/repos`
pub struct GitHubClient {
    client: reqwest::Client,
    api_url: String,
}

impl GitHubClient {
    /// Creates a new client from configuration
    pub fn new(config: &GitHubConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }

    /// Builds the listing URL for `org`, sorted by stars and truncated to `limit`
    pub fn repos_url(&self, org: &str, limit: i32) -> Result<Url, FetchError> {
        let mut url =
            Url::parse(&self.api_url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.api_url.clone()))?
            .pop_if_empty()
            .extend(["orgs", org, "repos"]);

        url.query_pairs_mut()
            .append_pair("sort", "stars")
            .append_pair("direction", "desc")
            .append_pair("per_page", &limit.to_string());

        Ok(url)
    }

    /// Lists repositories, reporting every failure to the caller
    pub async fn try_fetch_top_org_repos(
        &self,
        org: &str,
        limit: i32,
    ) -> Result<Vec<RepositoryRecord>, FetchError> {
        let url = self.repos_url(org, limit)?;

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;

        // A literal `null` body counts as an empty listing
        let repos: Option<Vec<RepositoryRecord>> =
            serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

        Ok(repos.unwrap_or_default())
    }
}

#[async_trait]
impl RepositorySource for GitHubClient {
    /// Never fails: errors are logged and reported as an empty listing
    async fn fetch_top_org_repos(
        &self,
        org: &str,
        limit: i32,
    ) -> Result<Vec<RepositoryRecord>, FetchError> {
        match self.try_fetch_top_org_repos(org, limit).await {
            Ok(repos) => Ok(repos),
            Err(e) => {
                log::error!("Error fetching repos: {}", e);
                Ok(Vec::new())
            }
        }
    }
}
