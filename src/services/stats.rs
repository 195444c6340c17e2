use std::sync::Arc;

use chrono::NaiveDate;
use rand::Rng;

use crate::error::StatsError;
use crate::github::RepositorySource;
use crate::models::{DailyStat, RepositoryRecord};
use crate::services::generator;

/// Builds statistics for an organization's top repositories
pub struct StatsService {
    source: Arc<dyn RepositorySource>,
    org_override: Option<String>,
}

impl StatsService {
    /// Creates a service over `source`.
    ///
    /// When `org_override` is set, it is queried instead of the caller's
    /// organization.
    pub fn new(source: Arc<dyn RepositorySource>, org_override: Option<String>) -> Self {
        Self {
            source,
            org_override,
        }
    }

    /// Seven days of synthetic statistics per repository, ending on `end_date`
    pub async fn weekly_stats<R: Rng>(
        &self,
        org: &str,
        limit: i32,
        end_date: NaiveDate,
        rng: &mut R,
    ) -> Result<Vec<DailyStat>, StatsError> {
        let repos = self.fetch(org, limit).await?;
        Ok(generator::generate_weekly_stats(&repos, end_date, rng))
    }

    /// Today's raw statistics per repository
    pub async fn current_stats(
        &self,
        org: &str,
        limit: i32,
        today: NaiveDate,
    ) -> Result<Vec<DailyStat>, StatsError> {
        let repos = self.fetch(org, limit).await?;
        Ok(repos
            .iter()
            .map(|repo| generator::current_snapshot(repo, today))
            .collect())
    }

    /// Organization actually sent to the repository source
    pub fn queried_org<'a>(&'a self, org: &'a str) -> &'a str {
        self.org_override.as_deref().unwrap_or(org)
    }

    async fn fetch(&self, org: &str, limit: i32) -> Result<Vec<RepositoryRecord>, StatsError> {
        validate_input(org, limit)?;

        self.source
            .fetch_top_org_repos(self.queried_org(org), limit)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch repos for org {}: {}", org, e);
                StatsError::FetchFailed(e)
            })
    }
}

fn validate_input(org: &str, limit: i32) -> Result<(), StatsError> {
    if org.trim().is_empty() {
        return Err(StatsError::InvalidInput(
            "Organization name is required".to_string(),
        ));
    }
    if limit <= 0 {
        return Err(StatsError::InvalidInput(
            "Limit must be greater than 0".to_string(),
        ));
    }
    Ok(())
}
