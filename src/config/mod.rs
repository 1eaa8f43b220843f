pub mod loader;

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::game;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_width: usize,
    pub board_height: usize,
    // Seconds between automatic drops
    pub gravity_interval: f32,
    pub line_clear_bonus: u32,
    // Seconds the game over banner is shown before the game exits
    pub game_over_hold: f32,
    pub frame_rate: u32,
    pub show_grid: bool,
    // Fixed seed for reproducible games; random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: game::BOARD_WIDTH,
            board_height: game::BOARD_HEIGHT,
            gravity_interval: game::GRAVITY_INTERVAL,
            line_clear_bonus: game::LINE_CLEAR_BONUS,
            game_over_hold: game::GAME_OVER_HOLD,
            frame_rate: game::FRAME_RATE,
            show_grid: true,
            seed: None,
        }
    }
}

impl GameConfig {
    // Smallest board that still fits every rotation of every piece
    pub const MIN_BOARD_SIZE: usize = 4;
    // Largest board whose frame size still fits terminal coordinates
    pub const MAX_BOARD_SIZE: usize = 256;

    pub fn validate(&self) -> Result<(), loader::ConfigError> {
        let sizes = Self::MIN_BOARD_SIZE..=Self::MAX_BOARD_SIZE;
        if !sizes.contains(&self.board_width) || !sizes.contains(&self.board_height) {
            return Err(loader::ConfigError::Invalid(format!(
                "board must be between {0}x{0} and {1}x{1}, got {2}x{3}",
                Self::MIN_BOARD_SIZE,
                Self::MAX_BOARD_SIZE,
                self.board_width,
                self.board_height
            )));
        }
        if !self.gravity_interval.is_finite() || self.gravity_interval <= 0.0 {
            return Err(loader::ConfigError::Invalid(format!(
                "gravity_interval must be a positive number of seconds, got {}",
                self.gravity_interval
            )));
        }
        if !self.game_over_hold.is_finite() || self.game_over_hold < 0.0 {
            return Err(loader::ConfigError::Invalid(format!(
                "game_over_hold must be a non-negative number of seconds, got {}",
                self.game_over_hold
            )));
        }
        if self.frame_rate == 0 {
            return Err(loader::ConfigError::Invalid(
                "frame_rate must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }
}
