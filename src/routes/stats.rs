use actix_web::{web, HttpResponse};
use chrono::Local;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Deserializer};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{CurrentStatsResponse, WeeklyStatsResponse};
use crate::services::StatsService;

/// Query parameters shared by the statistics endpoints
#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub org: String,
    /// Falls back to the configured default when omitted or blank
    #[serde(default, deserialize_with = "blank_as_none")]
    pub limit: Option<i32>,
}

/// Reads `limit=` (present but empty) the same as a missing `limit`
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// GET /api/v1/github-stats/weekly-stats - Seven days of stats per top repository
pub async fn weekly_stats(
    service: web::Data<StatsService>,
    config: web::Data<Config>,
    query: web::Query<StatsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let limit = query.limit.unwrap_or(config.stats.default_limit);

    log::info!("Fetching weekly stats for organization: {}", query.org);

    let today = Local::now().date_naive();
    let mut rng = StdRng::from_os_rng();

    let stats = service
        .weekly_stats(&query.org, limit, today, &mut rng)
        .await
        .map_err(|e| {
            log::error!("Error fetching weekly stats: {}", e);
            AppError::WeeklyStats(e)
        })?;

    Ok(HttpResponse::Ok().json(WeeklyStatsResponse::assemble(stats, &query.org, today)))
}

/// GET /api/v1/github-stats/current-stats - Today's raw stats per top repository
pub async fn current_stats(
    service: web::Data<StatsService>,
    config: web::Data<Config>,
    query: web::Query<StatsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let limit = query.limit.unwrap_or(config.stats.default_limit);

    log::info!("Fetching current stats for organization: {}", query.org);

    let today = Local::now().date_naive();

    let stats = service
        .current_stats(&query.org, limit, today)
        .await
        .map_err(|e| {
            log::error!("Error fetching current stats: {}", e);
            AppError::CurrentStats(e)
        })?;

    Ok(HttpResponse::Ok().json(CurrentStatsResponse::assemble(stats, &query.org, today)))
}

/// Configure statistics routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/github-stats")
            .route("/weekly-stats", web::get().to(weekly_stats))
            .route("/current-stats", web::get().to(current_stats)),
    );
}
