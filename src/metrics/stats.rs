//! Persisted play statistics
//!
//! The best score and games-played counters survive across runs in a small
//! two-line text file:
//!
//! ```text
//! Top Score: 12
//! Games played: 34
//! ```
//!
//! A missing file means a fresh start; lines that do not parse are skipped
//! so a hand-edited file cannot wedge the game.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const TOP_SCORE_KEY: &str = "Top Score:";
const GAMES_PLAYED_KEY: &str = "Games played:";

/// Aggregate statistics across sessions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameStats {
    pub top_score: u32,
    pub games_played: u32,
}

impl GameStats {
    /// Fold one finished game into the counters
    pub fn record(&mut self, final_score: u32) {
        self.games_played += 1;
        self.top_score = self.top_score.max(final_score);
    }
}

/// Loads and saves [`GameStats`] at a fixed path
#[derive(Debug, Clone)]
pub struct StatsFile {
    path: PathBuf,
}

impl StatsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read stats from disk; a missing file yields zeroed counters
    pub fn load(&self) -> Result<GameStats> {
        if !self.path.exists() {
            return Ok(GameStats::default());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read stats from {:?}", self.path))?;

        let mut stats = GameStats::default();
        for line in contents.lines() {
            if let Some(value) = line.strip_prefix(TOP_SCORE_KEY) {
                if let Ok(score) = value.trim().parse() {
                    stats.top_score = score;
                }
            } else if let Some(value) = line.strip_prefix(GAMES_PLAYED_KEY) {
                if let Ok(games) = value.trim().parse() {
                    stats.games_played = games;
                }
            }
        }

        Ok(stats)
    }

    /// Write stats to disk, creating parent directories if needed
    pub fn save(&self, stats: &GameStats) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
        }

        let contents = format!(
            "{} {}\n{} {}\n",
            TOP_SCORE_KEY, stats.top_score, GAMES_PLAYED_KEY, stats.games_played
        );
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write stats to {:?}", self.path))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_zeroed_stats() {
        let dir = TempDir::new().unwrap();
        let file = StatsFile::new(dir.path().join("Stats.txt"));

        assert_eq!(file.load().unwrap(), GameStats::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let file = StatsFile::new(dir.path().join("Stats.txt"));

        let stats = GameStats {
            top_score: 42,
            games_played: 7,
        };
        file.save(&stats).unwrap();

        assert_eq!(file.load().unwrap(), stats);
    }

    #[test]
    fn test_save_writes_the_two_line_format() {
        let dir = TempDir::new().unwrap();
        let file = StatsFile::new(dir.path().join("Stats.txt"));

        file.save(&GameStats {
            top_score: 12,
            games_played: 34,
        })
        .unwrap();

        let contents = fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "Top Score: 12\nGames played: 34\n");
    }

    #[test]
    fn test_junk_lines_are_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Stats.txt");
        fs::write(&path, "Top Score: eleven\nnonsense\nGames played: 3\n").unwrap();

        let stats = StatsFile::new(&path).load().unwrap();
        assert_eq!(stats.top_score, 0);
        assert_eq!(stats.games_played, 3);
    }

    #[test]
    fn test_record_updates_counters() {
        let mut stats = GameStats::default();

        stats.record(10);
        assert_eq!(stats.top_score, 10);
        assert_eq!(stats.games_played, 1);

        stats.record(5);
        assert_eq!(stats.top_score, 10); // Should not decrease
        assert_eq!(stats.games_played, 2);

        stats.record(15);
        assert_eq!(stats.top_score, 15);
        assert_eq!(stats.games_played, 3);
    }
}
