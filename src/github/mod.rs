//! Repository listing sources.
//!
//! The statistics service only needs "the top `limit` repositories of an
//! organization, by stars". [`RepositorySource`] is that seam; the
//! production implementation talks to the GitHub REST API.

pub mod client;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::RepositoryRecord;

pub use client::GitHubClient;

/// Lists an organization's repositories sorted by star count, descending
#[async_trait]
pub trait RepositorySource: Send + Sync {
    async fn fetch_top_org_repos(
        &self,
        org: &str,
        limit: i32,
    ) -> Result<Vec<RepositoryRecord>, FetchError>;
}
