#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;
use std::time::Duration;

use crate::Time;
use crate::components::{Board, GameState, Input, Phase, Position, Tetromino};
use crate::config::{Config, DisplayConfig};
use crate::randomizer::{FastRandomizer, PieceRandomizer, Randomizer};
use crate::systems::{active_piece, game_tick_system, pause_system, reset_game, spawn_tetromino};
use crate::timing::{Delays, Timing};

pub type AppResult<T> = anyhow::Result<T>;

/// Owns the whole game state and advances it one frame at a time.
pub struct App {
    pub world: World,
    pub should_quit: bool,
    pub display: DisplayConfig,
}

impl App {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        Self::with_randomizer(config, FastRandomizer::new())
    }

    /// Builds a game whose shape and color choices come from `randomizer`.
    pub fn with_randomizer(config: &Config, randomizer: impl Randomizer + 'static) -> Self {
        let mut world = World::new();
        world.insert_resource(Time::new());
        world.insert_resource(Input::default());
        world.insert_resource(GameState::default());
        world.insert_resource(Board::new(config.board.width, config.board.height));
        world.insert_resource(Timing::new(
            Delays::from(&config.timing),
            config.input.style,
        ));
        world.insert_resource(PieceRandomizer::new(randomizer));

        let mut app = Self {
            world,
            should_quit: false,
            display: config.display.clone(),
        };

        // Spawn initial tetromino
        spawn_tetromino(&mut app.world);

        app
    }

    /// Advances the game clock to wall-clock time since the game started.
    pub fn update_clock(&mut self) {
        self.world.resource_mut::<Time>().update();
    }

    /// Sets the game clock to an explicit reading.
    pub fn set_clock(&mut self, elapsed: Duration) {
        self.world.resource_mut::<Time>().set_elapsed(elapsed);
    }

    #[must_use]
    pub fn now_millis(&self) -> u64 {
        self.world.resource::<Time>().elapsed_millis()
    }

    /// Runs one frame: pause/restart handling, then the game tick.
    ///
    /// The frame that restarts a finished game does not also tick it, so the key
    /// that asked for the restart cannot act on the new piece.
    pub fn frame(&mut self, input: Input) {
        self.world.insert_resource(input);

        let was_over = self.phase() == Phase::GameOver;
        pause_system(&mut self.world);
        if !was_over {
            game_tick_system(&mut self.world);
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.world.resource::<GameState>().phase
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.world.resource::<Board>()
    }

    pub fn active_piece(&mut self) -> Option<(Tetromino, Position)> {
        active_piece(&mut self.world).map(|(_, tetromino, position)| (tetromino, position))
    }

    /// Reset the game state
    pub fn reset(&mut self) {
        reset_game(&mut self.world);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
