//! Response bodies for the statistics endpoints.
//!
//! The weekly response nests each repository's days as a list of
//! single-entry objects keyed by date:
//!
//! ```json
//! {
//!   "dateRange": { "start": "2024-01-01", "end": "2024-01-07" },
//!   "repositories": { "Hello-World": [ { "2024-01-01": { ... } }, ... ] },
//!   "organization": "octocat"
//! }
//! ```

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::stats::{week_start, DailyStat};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    /// The weekly window ending on `end`, inclusive
    pub fn ending(end: NaiveDate) -> Self {
        Self {
            start: week_start(end).to_string(),
            end: end.to_string(),
        }
    }
}

/// One `{ "<day>": DailyStat }` object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEntry(pub DailyStat);

impl DayEntry {
    pub fn day(&self) -> &str {
        &self.0.day
    }

    pub fn stat(&self) -> &DailyStat {
        &self.0
    }
}

impl Serialize for DayEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.0.day, &self.0)?;
        map.end()
    }
}

/// Day entries grouped by repository name, in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryHistories {
    groups: Vec<(String, Vec<DayEntry>)>,
}

impl RepositoryHistories {
    pub fn group(stats: Vec<DailyStat>) -> Self {
        let mut groups: Vec<(String, Vec<DayEntry>)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for stat in stats {
            let slot = match index.get(&stat.repository_name) {
                Some(&slot) => slot,
                None => {
                    index.insert(stat.repository_name.clone(), groups.len());
                    groups.push((stat.repository_name.clone(), Vec::new()));
                    groups.len() - 1
                }
            };
            groups[slot].1.push(DayEntry(stat));
        }

        Self { groups }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&[DayEntry]> {
        self.groups
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, entries)| entries.as_slice())
    }
}

impl Serialize for RepositoryHistories {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (name, entries) in &self.groups {
            map.serialize_entry(name, entries)?;
        }
        map.end()
    }
}

/// Body of `GET /api/v1/github-stats/weekly-stats`
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyStatsResponse {
    pub date_range: DateRange,
    pub repositories: RepositoryHistories,
    /// Echoes the organization the caller asked for
    pub organization: String,
}

impl WeeklyStatsResponse {
    pub fn assemble(stats: Vec<DailyStat>, organization: &str, today: NaiveDate) -> Self {
        Self {
            date_range: DateRange::ending(today),
            repositories: RepositoryHistories::group(stats),
            organization: organization.to_string(),
        }
    }
}

/// Body of `GET /api/v1/github-stats/current-stats`
#[derive(Debug, Clone, serde::Serialize)]
pub struct CurrentStatsResponse {
    pub date: String,
    pub organization: String,
    pub repositories: Vec<DailyStat>,
}

impl CurrentStatsResponse {
    pub fn assemble(stats: Vec<DailyStat>, organization: &str, today: NaiveDate) -> Self {
        Self {
            date: today.to_string(),
            organization: organization.to_string(),
            repositories: stats,
        }
    }
}
