#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow sign loss when going from signed to unsigned types since we validate values are non-negative before casting
    clippy::cast_sign_loss,
    // Allow potential wrapping when casting board dimensions to i32 as boards are small
    clippy::cast_possible_wrap,
    // Allow truncation when casting board dimensions to i32 as boards are small
    clippy::cast_possible_truncation
)]

use crate::components::{Board, Position};
use crate::shapes::Shape;

/// Checks whether `shape` fits on `board` with its bounding box at `position`.
///
/// A placement is rejected when any filled cell lands left of column 0, right of
/// the last column, below the last row, or on a locked cell. Rows above the board
/// (negative `y`) are open space and never block a piece.
#[must_use]
pub fn is_valid_position(board: &Board, shape: &Shape, position: Position) -> bool {
    let width = board.width as i32;
    let height = board.height as i32;

    shape.blocks().all(|(block_x, block_y)| {
        let x = position.x + block_x;
        let y = position.y + block_y;

        if x < 0 || x >= width || y >= height {
            return false;
        }

        // Bounds are checked above, so the lookup stays on the board
        y < 0 || board.is_occupied(x as usize, y as usize).is_none()
    })
}

/// Lowest position straight below `position` where `shape` still fits.
///
/// Expects `position` itself to be valid; the result is then valid and one row
/// further down is not.
#[must_use]
pub fn hard_drop_position(board: &Board, shape: &Shape, position: Position) -> Position {
    let mut landing = position;
    while is_valid_position(board, shape, landing.offset(0, 1)) {
        landing = landing.offset(0, 1);
    }
    landing
}
