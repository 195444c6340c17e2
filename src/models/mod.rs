pub mod report;
pub mod repository;
pub mod stats;

pub use report::{
    CurrentStatsResponse, DateRange, DayEntry, RepositoryHistories, WeeklyStatsResponse,
};
pub use repository::{ExtractPolicy, RepoMetrics, RepoProfile, RepositoryRecord};
pub use stats::{week_start, Breakdown, DailyStat, WEEK_DAYS};
