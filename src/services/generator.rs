//! Synthetic engagement history.
//!
//! Each repository's current stars and forks are scaled down by a linear decay
//! for past days, so the series climbs toward today. Secondary metrics are
//! drawn uniformly from a range proportional to the scaled values.

use chrono::NaiveDate;
use rand::Rng;

use crate::models::{
    week_start, Breakdown, DailyStat, ExtractPolicy, RepoMetrics, RepoProfile, RepositoryRecord,
};

/// Fraction of the baseline lost per day before the end date
pub const DAILY_DECAY_RATE: f64 = 0.02;

/// Floor of the decay factor
pub const MIN_DECAY_FACTOR: f64 = 0.7;

/// Multiplier applied to baseline stars/forks `days_from_end` days before the
/// end date. Always within `[MIN_DECAY_FACTOR, 1.0]` for non-negative input.
pub fn decay_factor(days_from_end: i64) -> f64 {
    (1.0 - days_from_end as f64 * DAILY_DECAY_RATE).max(MIN_DECAY_FACTOR)
}

/// Scales a baseline count, truncating toward zero
pub fn decayed(base: i32, factor: f64) -> i32 {
    (base as f64 * factor) as i32
}

/// Uniform draw from `[0, floor(base * factor)]`.
///
/// Returns 0 without drawing when the upper bound is not positive.
pub fn random_metric<R: Rng>(rng: &mut R, base: i32, factor: f64) -> i32 {
    let upper = (base as f64 * factor) as i32;
    if upper <= 0 {
        // A negative upstream count lands here and yields 0 instead of an error
        return 0;
    }
    rng.random_range(0..=upper)
}

pub fn active_users(daily_stars: i32) -> i32 {
    (daily_stars / 100).max(1)
}

pub fn active_chat_users(daily_forks: i32) -> i32 {
    (daily_forks / 10).max(1)
}

/// Seven days of statistics per repository, ending on `end_date`
pub fn generate_weekly_stats<R: Rng>(
    repos: &[RepositoryRecord],
    end_date: NaiveDate,
    rng: &mut R,
) -> Vec<DailyStat> {
    generate_historical_stats(repos, week_start(end_date), end_date, rng)
}

/// One [`DailyStat`] per repository per day in `start_date..=end_date`,
/// grouped by repository in input order and ascending by day
pub fn generate_historical_stats<R: Rng>(
    repos: &[RepositoryRecord],
    start_date: NaiveDate,
    end_date: NaiveDate,
    rng: &mut R,
) -> Vec<DailyStat> {
    let mut all_stats = Vec::new();

    for record in repos {
        let profile = RepoProfile::extract(record, ExtractPolicy::Warn);
        let metrics = profile.metrics();

        for date in start_date.iter_days().take_while(|d| *d <= end_date) {
            let factor = decay_factor((end_date - date).num_days());
            all_stats.push(daily_stat(&profile, metrics, date, factor, rng));
        }
    }

    all_stats
}

fn daily_stat<R: Rng>(
    profile: &RepoProfile,
    metrics: RepoMetrics,
    date: NaiveDate,
    factor: f64,
    rng: &mut R,
) -> DailyStat {
    let daily_stars = decayed(metrics.stars, factor);
    let daily_forks = decayed(metrics.forks, factor);

    // Draw order is fixed so seeded runs are reproducible
    let total_lines_accepted = random_metric(rng, metrics.size, 0.01);
    let total_chat_acceptances = random_metric(rng, daily_forks, 0.1);
    let total_chat_turns = random_metric(rng, daily_stars, 0.1);

    let breakdown = Breakdown {
        language: profile.language.clone(),
        editor: profile.default_branch.clone(),
        suggestions_count: daily_stars,
        acceptances_count: daily_forks,
        lines_suggested: metrics.size,
        lines_accepted: random_metric(rng, metrics.size, 0.01),
        active_users: active_users(daily_stars),
    };

    DailyStat {
        repository_name: profile.name.clone(),
        day: date.to_string(),
        total_suggestions_count: daily_stars,
        total_acceptances_count: daily_forks,
        total_lines_suggested: metrics.size,
        total_lines_accepted,
        total_active_users: active_users(daily_stars),
        total_chat_acceptances,
        total_chat_turns,
        total_active_chat_users: active_chat_users(daily_forks),
        breakdown: vec![breakdown],
    }
}

/// Today's raw counts for one repository, without decay or randomization
pub fn current_snapshot(record: &RepositoryRecord, day: NaiveDate) -> DailyStat {
    let repo = RepoProfile::extract(record, ExtractPolicy::Silent);

    let breakdown = Breakdown {
        language: repo.language.clone(),
        editor: repo.default_branch.clone(),
        suggestions_count: repo.stargazers_count,
        acceptances_count: repo.forks_count,
        lines_suggested: repo.size,
        lines_accepted: repo.open_issues_count,
        active_users: repo.watchers_count,
    };

    DailyStat {
        repository_name: repo.name,
        day: day.to_string(),
        total_suggestions_count: repo.stargazers_count,
        total_acceptances_count: repo.forks_count,
        total_lines_suggested: repo.size,
        total_lines_accepted: repo.open_issues_count,
        total_active_users: repo.watchers_count,
        total_chat_acceptances: repo.network_count,
        total_chat_turns: repo.subscribers_count,
        total_active_chat_users: repo.watchers,
        breakdown: vec![breakdown],
    }
}
