pub mod game_metrics;
pub mod stats;

pub use game_metrics::GameMetrics;
pub use stats::{GameStats, StatsFile};
