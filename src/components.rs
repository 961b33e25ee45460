#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when casting palette indices, which are always below 7
    clippy::cast_possible_truncation,
    // Allow sign loss when going from signed to unsigned types since we validate values are non-negative before casting
    clippy::cast_sign_loss,
    // Allow more than 3 bools in structs for input handling where bools represent distinct flags
    clippy::struct_excessive_bools
)]

use bevy_ecs::prelude::*;
use ratatui::style::Color;

use crate::shapes::{Shape, TetrominoType};

/// Board-relative offset of a piece's bounding box, top-left corner.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

// Retro palette, one entry per selectable piece color
pub const PALETTE: [(u8, u8, u8); 7] = [
    (255, 85, 85),
    (255, 165, 0),
    (255, 255, 85),
    (0, 255, 85),
    (85, 255, 255),
    (85, 85, 255),
    (255, 85, 255),
];

/// Index into [`PALETTE`]. Locked cells remember the color of the piece that filled them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockColor(u8);

impl BlockColor {
    /// Wraps a palette index, reducing it modulo the palette size.
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self((index % PALETTE.len()) as u8)
    }

    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    #[must_use]
    pub fn rgb(self) -> (u8, u8, u8) {
        PALETTE[self.index()]
    }

    #[must_use]
    pub fn to_color(self) -> Color {
        let (r, g, b) = self.rgb();
        Color::Rgb(r, g, b)
    }
}

/// The falling piece: its current (possibly rotated) mask and color.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    pub tetromino_type: TetrominoType,
    pub shape: Shape,
    pub color: BlockColor,
}

impl Tetromino {
    #[must_use]
    pub fn new(tetromino_type: TetrominoType, color: BlockColor) -> Self {
        Self {
            tetromino_type,
            shape: tetromino_type.shape(),
            color,
        }
    }

    /// Same piece with its mask turned 90 degrees clockwise.
    #[must_use]
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotate_clockwise(),
            ..*self
        }
    }
}

/// Fixed-size grid of locked cells, stored row by row from the top.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub width: usize,
    pub height: usize,
    cells: Vec<Vec<Option<BlockColor>>>,
}

impl Board {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![None; width]; height],
        }
    }

    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(None);
        }
    }

    /// Color of the locked cell at `(x, y)`, if any.
    ///
    /// # Panics
    ///
    /// Panics when `(x, y)` lies outside the board. Callers bounds-check first.
    #[must_use]
    pub fn is_occupied(&self, x: usize, y: usize) -> Option<BlockColor> {
        self.cells[y][x]
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Option<BlockColor>>] {
        &self.cells
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(Option::is_none))
    }

    /// Writes every filled cell of `shape` at `position` into the board with `color`.
    ///
    /// The placement must already have passed
    /// [`is_valid_position`](crate::rules::is_valid_position). Cells above row 0
    /// are open space and are not stored.
    pub fn commit(&mut self, shape: &Shape, color: BlockColor, position: Position) {
        for (block_x, block_y) in shape.blocks() {
            let x = position.x + block_x;
            let y = position.y + block_y;

            if y < 0 {
                continue;
            }

            self.cells[y as usize][x as usize] = Some(color);
        }
    }

    /// Removes every full row and backfills empty rows at the top.
    ///
    /// Full rows are handled one at a time in increasing index order: delete the
    /// row, then insert an empty row at index 0. Returns how many rows were removed.
    pub fn clear_full_lines(&mut self) -> usize {
        let full_rows: Vec<usize> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, row)| row.iter().all(Option::is_some))
            .map(|(y, _)| y)
            .collect();

        for &y in &full_rows {
            self.cells.remove(y);
            self.cells.insert(0, vec![None; self.width]);
        }

        full_rows.len()
    }
}

/// Lifecycle of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Running,
    Paused,
    /// A freshly spawned piece had no valid placement. Only a restart leaves this phase.
    GameOver,
}

#[derive(Debug, Resource, Clone, Default)]
pub struct GameState {
    pub phase: Phase,
    pub pieces_locked: u32,
}

impl GameState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }
}

// Input snapshot for one frame
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Input {
    // Keys currently held down
    pub left: bool,
    pub right: bool,
    pub rotate: bool,
    pub hard_drop: bool,
    // Keys pressed since the previous frame
    pub rotate_pressed: bool,
    pub hard_drop_pressed: bool,
    pub pause_pressed: bool,
    pub restart_pressed: bool,
}
