#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when casting from usize to i32 since board dimensions are always small enough to fit in i32
    clippy::cast_possible_truncation,
    // Allow potential wrapping when casting between types as board coordinates are within reasonable ranges
    clippy::cast_possible_wrap
)]

use bevy_ecs::prelude::*;
use log::{debug, info, trace};

use crate::Time;
use crate::components::{BlockColor, Board, GameState, Input, PALETTE, Phase, Position, Tetromino};
use crate::config::InputStyle;
use crate::randomizer::PieceRandomizer;
use crate::rules::{hard_drop_position, is_valid_position};
use crate::shapes::TetrominoType;
use crate::timing::Timing;

/// Spawns a random piece centered at the top of the board.
///
/// The piece is placed without checking the board first. If the placement turns
/// out to be invalid the game is over. Returns whether the spawn was valid.
pub fn spawn_tetromino(world: &mut World) -> bool {
    let (tetromino_type, color) = {
        let mut randomizer = world.resource_mut::<PieceRandomizer>();
        let shape_index = randomizer.pick(TetrominoType::ALL.len());
        let color_index = randomizer.pick(PALETTE.len());
        (
            TetrominoType::ALL[shape_index],
            BlockColor::new(color_index),
        )
    };
    let tetromino = Tetromino::new(tetromino_type, color);

    // Start position at the top center of the board
    let board_width = world.resource::<Board>().width;
    let position = Position {
        x: (board_width / 2) as i32 - (tetromino.shape.width() / 2) as i32,
        y: 0,
    };

    world.spawn((tetromino, position));
    debug!(
        "Spawned {:?} at ({}, {})",
        tetromino_type, position.x, position.y
    );

    let valid = is_valid_position(world.resource::<Board>(), &tetromino.shape, position);
    if !valid {
        info!("No room to spawn {tetromino_type:?}, game over");
        world.resource_mut::<GameState>().phase = Phase::GameOver;
    }
    valid
}

/// The falling piece, if one exists.
pub fn active_piece(world: &mut World) -> Option<(Entity, Tetromino, Position)> {
    let mut query = world.query::<(Entity, &Tetromino, &Position)>();
    query
        .iter(world)
        .next()
        .map(|(entity, tetromino, position)| (entity, *tetromino, *position))
}

/// Moves the falling piece by `(dx, dy)` if the destination is valid.
pub fn try_shift(world: &mut World, dx: i32, dy: i32) -> bool {
    let Some((entity, tetromino, position)) = active_piece(world) else {
        return false;
    };

    let new_position = position.offset(dx, dy);
    if !is_valid_position(world.resource::<Board>(), &tetromino.shape, new_position) {
        return false;
    }

    world.entity_mut(entity).insert(new_position);
    trace!("Moved piece to ({}, {})", new_position.x, new_position.y);
    true
}

/// Rotates the falling piece clockwise in place. There is no wall kick: a
/// rotation that does not fit at the current position is dropped.
pub fn try_rotate(world: &mut World) -> bool {
    let Some((entity, tetromino, position)) = active_piece(world) else {
        return false;
    };

    let rotated = tetromino.rotated();
    if !is_valid_position(world.resource::<Board>(), &rotated.shape, position) {
        debug!("Rotation blocked at ({}, {})", position.x, position.y);
        return false;
    }

    world.entity_mut(entity).insert(rotated);
    true
}

/// Moves the falling piece straight down as far as it fits. The piece is not
/// locked; the next gravity step does that. Returns the rows travelled.
pub fn hard_drop(world: &mut World) -> i32 {
    let Some((entity, tetromino, position)) = active_piece(world) else {
        return 0;
    };

    let landing = hard_drop_position(world.resource::<Board>(), &tetromino.shape, position);
    let distance = landing.y - position.y;
    if distance > 0 {
        world.entity_mut(entity).insert(landing);
    }
    debug!("Hard drop of {distance} rows");
    distance
}

/// Commits the falling piece to the board, clears full lines and spawns the next
/// piece. Returns the number of lines cleared.
pub fn lock_tetromino(world: &mut World) -> usize {
    let Some((entity, tetromino, position)) = active_piece(world) else {
        return 0;
    };

    let lines_cleared = {
        let mut board = world.resource_mut::<Board>();
        board.commit(&tetromino.shape, tetromino.color, position);
        board.clear_full_lines()
    };

    world.resource_mut::<GameState>().pieces_locked += 1;
    info!(
        "Locked {:?} at ({}, {}), cleared {} lines",
        tetromino.tetromino_type, position.x, position.y, lines_cleared
    );

    world.despawn(entity);
    spawn_tetromino(world);

    lines_cleared
}

/// Starts a fresh game on the same world: empty board, running phase, timers at now.
pub fn reset_game(world: &mut World) {
    let now = world.resource::<Time>().elapsed_millis();

    world.resource_mut::<Board>().clear();
    world.resource_mut::<GameState>().reset();
    world.resource_mut::<Timing>().reset(now);

    let pieces: Vec<Entity> = world
        .query_filtered::<Entity, With<Tetromino>>()
        .iter(world)
        .collect();
    for entity in pieces {
        world.despawn(entity);
    }

    info!("Starting new game");
    spawn_tetromino(world);
}

/// Handles the pause toggle and the restart request. These stay responsive in
/// every phase, unlike the actions in [`game_tick_system`].
pub fn pause_system(world: &mut World) {
    let input = *world.resource::<Input>();
    let now = world.resource::<Time>().elapsed_millis();
    let phase = world.resource::<GameState>().phase;

    match phase {
        Phase::GameOver => {
            if input.restart_pressed {
                reset_game(world);
            }
        }
        Phase::Running if input.pause_pressed => {
            world.resource_mut::<GameState>().phase = Phase::Paused;
            world.resource_mut::<Timing>().pause(now);
            debug!("Paused at {now}ms");
        }
        Phase::Paused if input.pause_pressed => {
            world.resource_mut::<GameState>().phase = Phase::Running;
            world.resource_mut::<Timing>().resume(now);
            debug!("Resumed at {now}ms");
        }
        Phase::Running | Phase::Paused => {}
    }
}

/// One tick of the running game: horizontal repeat, hard drop, rotation, then gravity.
///
/// Does nothing unless the game is running.
pub fn game_tick_system(world: &mut World) {
    if !world.resource::<GameState>().is_running() {
        return;
    }

    let now = world.resource::<Time>().elapsed_millis();
    let input = *world.resource::<Input>();
    let timing = world.resource::<Timing>().clone();
    trace!("Game tick at {now}ms");

    if active_piece(world).is_none() && !spawn_tetromino(world) {
        return;
    }

    // Horizontal movement; left and right together cancel out
    let dx = i32::from(input.right) - i32::from(input.left);
    if dx != 0 && timing.move_due(now) {
        try_shift(world, dx, 0);
        world.resource_mut::<Timing>().last_move = now;
    }

    let hard_drop_requested = match timing.style {
        InputStyle::Held => input.hard_drop && timing.hard_drop_due(now),
        InputStyle::Edge => input.hard_drop_pressed,
    };
    if hard_drop_requested {
        hard_drop(world);
        world.resource_mut::<Timing>().last_hard_drop = now;
    }

    let rotate_requested = match timing.style {
        InputStyle::Held => input.rotate && timing.rotate_due(now),
        InputStyle::Edge => input.rotate_pressed,
    };
    if rotate_requested {
        try_rotate(world);
        world.resource_mut::<Timing>().last_rotate = now;
    }

    if timing.gravity_due(now) {
        if !try_shift(world, 0, 1) {
            lock_tetromino(world);
        }
        world.resource_mut::<Timing>().last_gravity = now;
    }
}
