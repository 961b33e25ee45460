pub mod loader;

use serde::{Deserialize, Serialize};

use crate::game::{
    BOARD_HEIGHT, BOARD_WIDTH, FRAME_RATE, GRAVITY_INTERVAL_MS, HARD_DROP_DELAY_MS,
    HOLD_TIMEOUT_MS, MOVE_DELAY_MS, ROTATE_DELAY_MS,
};
use loader::ConfigError;

// Smallest board that still fits every tetromino in every orientation
const MIN_BOARD_SIZE: usize = 4;
const MAX_BOARD_SIZE: usize = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub board: BoardConfig,
    pub timing: TimingConfig,
    pub input: InputConfig,
    pub display: DisplayConfig,
}

impl Config {
    /// Rejects settings the game cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size_range = MIN_BOARD_SIZE..=MAX_BOARD_SIZE;
        if !size_range.contains(&self.board.width) || !size_range.contains(&self.board.height) {
            return Err(ConfigError::Invalid(format!(
                "board must be between {MIN_BOARD_SIZE} and {MAX_BOARD_SIZE} cells on each side, got {}x{}",
                self.board.width, self.board.height
            )));
        }

        if self.timing.gravity_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "timing.gravity_interval_ms must be positive".to_string(),
            ));
        }

        if self.timing.frame_rate == 0 {
            return Err(ConfigError::Invalid(
                "timing.frame_rate must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub gravity_interval_ms: u64,
    pub move_delay_ms: u64,
    pub rotate_delay_ms: u64,
    pub hard_drop_delay_ms: u64,
    pub frame_rate: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            gravity_interval_ms: GRAVITY_INTERVAL_MS,
            move_delay_ms: MOVE_DELAY_MS,
            rotate_delay_ms: ROTATE_DELAY_MS,
            hard_drop_delay_ms: HARD_DROP_DELAY_MS,
            frame_rate: FRAME_RATE,
        }
    }
}

/// How rotate and hard drop react to their keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputStyle {
    /// Repeat while the key is held, spaced by the channel's delay.
    #[default]
    Held,
    /// Fire once per key press.
    Edge,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub style: InputStyle,
    pub hold_timeout_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            style: InputStyle::Held,
            hold_timeout_ms: HOLD_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_grid: bool,
    pub show_shadow: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_shadow: true,
        }
    }
}
