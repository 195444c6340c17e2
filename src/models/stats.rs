use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of days covered by a weekly history, today included
pub const WEEK_DAYS: u64 = 7;

/// First day of the weekly window that ends on `end`
pub fn week_start(end: NaiveDate) -> NaiveDate {
    end - Days::new(WEEK_DAYS - 1)
}

/// Per-language/editor split of a day's statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub language: String,
    /// Populated from the repository's default branch name
    pub editor: String,
    pub suggestions_count: i32,
    pub acceptances_count: i32,
    pub lines_suggested: i32,
    pub lines_accepted: i32,
    pub active_users: i32,
}

/// Statistics for one repository on one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStat {
    pub repository_name: String,
    /// ISO date (`YYYY-MM-DD`)
    pub day: String,
    pub total_suggestions_count: i32,
    pub total_acceptances_count: i32,
    pub total_lines_suggested: i32,
    pub total_lines_accepted: i32,
    pub total_active_users: i32,
    pub total_chat_acceptances: i32,
    pub total_chat_turns: i32,
    pub total_active_chat_users: i32,
    pub breakdown: Vec<Breakdown>,
}
