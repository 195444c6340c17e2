use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;

/// JSON error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failures while listing repositories from the remote API
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

/// Statistics service errors
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    /// Caller supplied bad input; raised before any network call
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to fetch repository data")]
    FetchFailed(#[source] FetchError),
}

/// Application errors returned from HTTP handlers.
///
/// The client only ever sees a fixed message; the underlying cause is logged.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to fetch weekly statistics")]
    WeeklyStats(#[source] StatsError),

    #[error("Failed to fetch current statistics")]
    CurrentStats(#[source] StatsError),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::WeeklyStats(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::CurrentStats(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let response = ErrorResponse {
            error: self.to_string(),
        };

        HttpResponse::build(self.status_code()).json(response)
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
