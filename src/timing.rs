#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;
use log::trace;

use crate::config::{InputStyle, TimingConfig};
use crate::game::{GRAVITY_INTERVAL_MS, HARD_DROP_DELAY_MS, MOVE_DELAY_MS, ROTATE_DELAY_MS};

/// Minimum spacing between repeated actions, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delays {
    pub gravity_interval: u64,
    pub move_delay: u64,
    pub rotate_delay: u64,
    pub hard_drop_delay: u64,
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            gravity_interval: GRAVITY_INTERVAL_MS,
            move_delay: MOVE_DELAY_MS,
            rotate_delay: ROTATE_DELAY_MS,
            hard_drop_delay: HARD_DROP_DELAY_MS,
        }
    }
}

impl From<&TimingConfig> for Delays {
    fn from(config: &TimingConfig) -> Self {
        Self {
            gravity_interval: config.gravity_interval_ms,
            move_delay: config.move_delay_ms,
            rotate_delay: config.rotate_delay_ms,
            hard_drop_delay: config.hard_drop_delay_ms,
        }
    }
}

/// When each input channel last acted, measured on the game clock in milliseconds.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct Timing {
    pub delays: Delays,
    pub style: InputStyle,
    pub last_move: u64,
    pub last_rotate: u64,
    pub last_hard_drop: u64,
    pub last_gravity: u64,
    paused_at: Option<u64>,
}

impl Timing {
    #[must_use]
    pub fn new(delays: Delays, style: InputStyle) -> Self {
        Self {
            delays,
            style,
            last_move: 0,
            last_rotate: 0,
            last_hard_drop: 0,
            last_gravity: 0,
            paused_at: None,
        }
    }

    /// Restarts every channel at `now`, keeping the configured delays.
    pub fn reset(&mut self, now: u64) {
        self.last_move = now;
        self.last_rotate = now;
        self.last_hard_drop = now;
        self.last_gravity = now;
        self.paused_at = None;
    }

    #[must_use]
    pub fn gravity_due(&self, now: u64) -> bool {
        now.saturating_sub(self.last_gravity) >= self.delays.gravity_interval
    }

    #[must_use]
    pub fn move_due(&self, now: u64) -> bool {
        now.saturating_sub(self.last_move) > self.delays.move_delay
    }

    #[must_use]
    pub fn rotate_due(&self, now: u64) -> bool {
        now.saturating_sub(self.last_rotate) > self.delays.rotate_delay
    }

    #[must_use]
    pub fn hard_drop_due(&self, now: u64) -> bool {
        now.saturating_sub(self.last_hard_drop) > self.delays.hard_drop_delay
    }

    pub fn pause(&mut self, now: u64) {
        self.paused_at = Some(now);
    }

    /// Shifts every marker past the paused stretch so no channel fires merely
    /// because time went by while paused.
    pub fn resume(&mut self, now: u64) {
        if let Some(paused_at) = self.paused_at.take() {
            let paused_for = now.saturating_sub(paused_at);
            trace!("Resuming after {paused_for}ms");
            self.last_move += paused_for;
            self.last_rotate += paused_for;
            self.last_hard_drop += paused_for;
            self.last_gravity += paused_for;
        }
    }

    #[must_use]
    pub fn paused_at(&self) -> Option<u64> {
        self.paused_at
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::new(Delays::default(), InputStyle::default())
    }
}
