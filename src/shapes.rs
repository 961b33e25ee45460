#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow potential wrapping when casting mask coordinates (at most 4) to i32
    clippy::cast_possible_wrap,
    // Allow truncation when casting mask coordinates (at most 4) to i32
    clippy::cast_possible_truncation
)]

/// Largest bounding box any tetromino mask can have.
pub const MAX_SHAPE_SIZE: usize = 4;

/// An immutable occupancy mask describing a tetromino within its own bounding box.
///
/// Rows are indexed top to bottom, columns left to right. Cells outside the
/// `width` x `height` bounding box are always empty, so two masks compare equal
/// exactly when they describe the same pattern with the same dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
    width: usize,
    height: usize,
}

impl Shape {
    /// Builds a mask from rows of 0/1 values. Every row must have the same length.
    ///
    /// # Panics
    ///
    /// Panics if the rows are empty, ragged, or larger than 4x4.
    #[must_use]
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        assert!(
            (1..=MAX_SHAPE_SIZE).contains(&height),
            "shape height out of range"
        );
        let width = rows[0].len();
        assert!(
            (1..=MAX_SHAPE_SIZE).contains(&width),
            "shape width out of range"
        );

        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width, "shape rows must have equal length");
            for (x, &value) in row.iter().enumerate() {
                cells[y][x] = value != 0;
            }
        }

        Self {
            cells,
            width,
            height,
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[y][x]
    }

    /// Occupied cells as `(x, y)` offsets from the top-left of the bounding box.
    pub fn blocks(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width)
                .filter(move |&x| self.cells[y][x])
                .map(move |x| (x as i32, y as i32))
        })
    }

    /// Returns the mask rotated 90 degrees clockwise.
    ///
    /// This is the transpose of the mask with its rows reversed, so a `w x h`
    /// mask becomes `h x w`.
    #[must_use]
    pub fn rotate_clockwise(&self) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in cells.iter_mut().enumerate().take(self.width) {
            for (x, cell) in row.iter_mut().enumerate().take(self.height) {
                *cell = self.cells[self.height - 1 - x][y];
            }
        }

        Self {
            cells,
            width: self.height,
            height: self.width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TetrominoType {
    I,
    O,
    T,
    Z,
    S,
    J,
    L,
}

impl TetrominoType {
    /// Every tetromino, in catalog order.
    pub const ALL: [TetrominoType; 7] = [
        TetrominoType::I,
        TetrominoType::O,
        TetrominoType::T,
        TetrominoType::Z,
        TetrominoType::S,
        TetrominoType::J,
        TetrominoType::L,
    ];

    /// Spawn orientation of this tetromino.
    #[must_use]
    pub fn shape(self) -> Shape {
        match self {
            TetrominoType::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
            TetrominoType::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
            TetrominoType::T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
            TetrominoType::Z => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
            TetrominoType::S => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
            TetrominoType::J => Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
            TetrominoType::L => Shape::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
        }
    }
}
