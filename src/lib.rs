pub mod app;
pub mod components;
pub mod config;
pub mod game;
pub mod input;
pub mod randomizer;
pub mod rules;
pub mod shapes;
pub mod systems;
pub mod timing;
pub mod ui;

#[cfg(test)]
mod tests;

use bevy_ecs::prelude::Resource;
use std::time::{Duration, Instant};

/// Monotonic game clock. Every timer in the game compares against `elapsed`.
#[derive(Resource, Debug, Clone)]
pub struct Time {
    start: Instant,
    elapsed: Duration,
    delta: Duration,
}

impl Time {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            elapsed: Duration::default(),
            delta: Duration::default(),
        }
    }

    pub fn update(&mut self) {
        self.set_elapsed(self.start.elapsed());
    }

    /// Moves the clock to an explicit reading, for replays and tests.
    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.delta = elapsed.saturating_sub(self.elapsed);
        self.elapsed = elapsed;
    }

    pub fn advance(&mut self, by: Duration) {
        self.set_elapsed(self.elapsed + by);
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn elapsed_millis(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }

    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}
