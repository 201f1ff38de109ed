use std::time::{Duration, Instant};

use super::stats::GameStats;

/// Per-run bookkeeping around the engine: elapsed time for the current
/// game plus the aggregate counters shown in the header
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub stats: GameStats,
}

impl GameMetrics {
    pub fn new(stats: GameStats) -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            stats,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.stats.record(final_score);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new(GameStats::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::default();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_game_over_feeds_stats() {
        let mut metrics = GameMetrics::default();

        metrics.on_game_over(10);
        assert_eq!(metrics.stats.top_score, 10);
        assert_eq!(metrics.stats.games_played, 1);

        metrics.on_game_over(5);
        assert_eq!(metrics.stats.top_score, 10); // Should not decrease
        assert_eq!(metrics.stats.games_played, 2);
    }

    #[test]
    fn test_loaded_stats_carry_over() {
        let metrics = GameMetrics::new(GameStats {
            top_score: 30,
            games_played: 12,
        });
        assert_eq!(metrics.stats.top_score, 30);
        assert_eq!(metrics.stats.games_played, 12);
    }

    #[test]
    fn test_game_start_resets_time() {
        let mut metrics = GameMetrics::default();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_game_start();
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }
}
