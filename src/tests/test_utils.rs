#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]

use std::time::Duration;

use bevy_ecs::prelude::*;

use crate::Time;
use crate::app::App;
use crate::components::{BlockColor, Board, GameState, Input, Position};
use crate::config::{Config, InputStyle};
use crate::randomizer::{PieceRandomizer, SequenceRandomizer};
use crate::shapes::Shape;
use crate::timing::Timing;

// Picks used by the sequence randomizer: shape index, then color index
pub const O_PIECE: [usize; 2] = [1, 0];
pub const I_PIECE: [usize; 2] = [0, 0];

/// Creates a test world with standard game resources and no falling piece
pub fn create_test_world(picks: &[usize]) -> World {
    let mut world = World::new();

    world.insert_resource(Board::new(10, 20));
    world.insert_resource(GameState::default());
    world.insert_resource(Input::default());
    world.insert_resource(Timing::default());
    world.insert_resource(Time::new());
    world.insert_resource(PieceRandomizer::new(SequenceRandomizer::new(
        picks.to_vec(),
    )));

    world
}

/// Creates an app on a standard board whose pieces come from `picks`
pub fn create_test_app(picks: &[usize], style: InputStyle) -> App {
    let mut config = Config::default();
    config.input.style = style;
    App::with_randomizer(&config, SequenceRandomizer::new(picks.to_vec()))
}

/// Runs one frame of `app` at `millis` on the game clock
pub fn step(app: &mut App, millis: u64, input: Input) {
    app.set_clock(Duration::from_millis(millis));
    app.frame(input);
}

// Helper to lock single cells onto a board
pub fn fill_cells(board: &mut Board, cells: &[(usize, usize)], color: BlockColor) {
    let single = Shape::from_rows(&[&[1]]);
    for &(x, y) in cells {
        board.commit(&single, color, Position::new(x as i32, y as i32));
    }
}

// Helper to fill row `y`, leaving the listed columns empty
pub fn fill_row_except(board: &mut Board, y: usize, gaps: &[usize], color: BlockColor) {
    let cells: Vec<(usize, usize)> = (0..board.width)
        .filter(|x| !gaps.contains(x))
        .map(|x| (x, y))
        .collect();
    fill_cells(board, &cells, color);
}
