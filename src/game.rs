#![warn(clippy::all, clippy::pedantic)]

// Playing area in pixels and the size of one cell
pub const SCREEN_WIDTH: usize = 320;
pub const SCREEN_HEIGHT: usize = 640;
pub const BLOCK_SIZE: usize = 32;

// Game board dimensions
pub const BOARD_WIDTH: usize = SCREEN_WIDTH / BLOCK_SIZE;
pub const BOARD_HEIGHT: usize = SCREEN_HEIGHT / BLOCK_SIZE;

// Game timing, all in milliseconds
pub const GRAVITY_INTERVAL_MS: u64 = 500; // 30 frames at 60 FPS
pub const MOVE_DELAY_MS: u64 = 150;
pub const ROTATE_DELAY_MS: u64 = 200;
pub const HARD_DROP_DELAY_MS: u64 = 500;

// Frame pacing
pub const FRAME_RATE: u32 = 60;

// Without key release events a key counts as held this long after its last event
pub const HOLD_TIMEOUT_MS: u64 = 120;
