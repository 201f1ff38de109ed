use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Length of the snake seeded at session start
pub const INITIAL_SNAKE_LENGTH: usize = 4;

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of grid rows
    pub rows: usize,
    /// Number of grid columns
    pub cols: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { rows: 16, cols: 16 }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Check that the board can hold the seeded starting snake, which
    /// occupies columns 1 through `INITIAL_SNAKE_LENGTH` of the middle row
    pub fn validate(&self) -> Result<()> {
        if self.rows < 1 || self.cols < INITIAL_SNAKE_LENGTH + 1 {
            bail!(
                "board {}x{} is too small to seed the starting snake (needs at least 1x{})",
                self.rows,
                self.cols,
                INITIAL_SNAKE_LENGTH + 1
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.rows, 16);
        assert_eq!(config.cols, 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(12, 24);
        assert_eq!(config.rows, 12);
        assert_eq!(config.cols, 24);
    }

    #[test]
    fn test_board_too_small() {
        assert!(GameConfig::new(0, 16).validate().is_err());
        assert!(GameConfig::new(16, 4).validate().is_err());
        assert!(GameConfig::new(1, 5).validate().is_ok());
    }
}
