use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw repository object as returned by the listing API.
///
/// Kept loosely typed so that a single odd field never rejects the whole
/// listing; typed access goes through [`RepoProfile::extract`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepositoryRecord(pub Map<String, Value>);

/// How to report integer fields that are present but cannot be parsed.
/// Either way the field falls back to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractPolicy {
    /// Log a warning naming the key and the offending value
    Warn,
    /// Fall back without logging
    Silent,
}

impl RepositoryRecord {
    /// Returns the value for `key`, treating JSON `null` as absent
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    /// Text of a field, or an empty string when absent
    pub fn string_field(&self, key: &str) -> String {
        match self.get(key) {
            None => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// 32-bit integer field with permissive coercion.
    ///
    /// JSON integers in range are used directly. Anything else is parsed from
    /// its textual form; failures yield 0 and are reported per `policy`.
    pub fn int_field(&self, key: &str, policy: ExtractPolicy) -> i32 {
        let Some(value) = self.get(key) else {
            return 0;
        };

        if let Some(n) = value.as_i64().and_then(|n| i32::try_from(n).ok()) {
            return n;
        }

        let text = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        match text.parse::<i32>() {
            Ok(n) => n,
            Err(_) => {
                if policy == ExtractPolicy::Warn {
                    log::warn!("Failed to parse integer for key {}: {}", key, text);
                }
                0
            }
        }
    }
}

impl From<Map<String, Value>> for RepositoryRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Baseline counts that the daily decay is applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepoMetrics {
    pub stars: i32,
    pub forks: i32,
    pub size: i32,
}

/// Typed view of a repository record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoProfile {
    pub name: String,
    pub language: String,
    pub default_branch: String,
    pub stargazers_count: i32,
    pub forks_count: i32,
    pub size: i32,
    pub open_issues_count: i32,
    pub watchers_count: i32,
    pub network_count: i32,
    pub subscribers_count: i32,
    pub watchers: i32,
}

impl RepoProfile {
    /// Maps a raw record onto typed fields; missing strings become empty and
    /// missing or unparseable integers become 0
    pub fn extract(record: &RepositoryRecord, policy: ExtractPolicy) -> Self {
        Self {
            name: record.string_field("name"),
            language: record.string_field("language"),
            default_branch: record.string_field("default_branch"),
            stargazers_count: record.int_field("stargazers_count", policy),
            forks_count: record.int_field("forks_count", policy),
            size: record.int_field("size", policy),
            open_issues_count: record.int_field("open_issues_count", policy),
            watchers_count: record.int_field("watchers_count", policy),
            network_count: record.int_field("network_count", policy),
            subscribers_count: record.int_field("subscribers_count", policy),
            watchers: record.int_field("watchers", policy),
        }
    }

    pub fn metrics(&self) -> RepoMetrics {
        RepoMetrics {
            stars: self.stargazers_count,
            forks: self.forks_count,
            size: self.size,
        }
    }
}
