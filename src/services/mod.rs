pub mod generator;
pub mod stats;

pub use generator::{
    active_chat_users, active_users, current_snapshot, decay_factor, generate_historical_stats,
    generate_weekly_stats, random_metric,
};
pub use stats::StatsService;
