//! Board coordinates and orthogonal directions.
//!
//! A `Position` is a plain `(row, col)` pair. Row 0 is the top edge (`a`),
//! row 8 the bottom edge (`i`); column 0 is the left edge (`1`).
//!
//! Positions are not range-checked on construction so that callers can
//! describe an off-board square and get an `OutOfBounds` error back from
//! the board or the rules engine. Use `is_in_bounds` or `Position::checked`
//! when a valid square is required.

use serde::{Deserialize, Serialize};

use super::BOARD_SIZE;

/// A square on the board, addressed by row and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// The four corner squares: top-left, top-right, bottom-left, bottom-right.
    pub const CORNERS: [Position; 4] = [
        Position::new(0, 0),
        Position::new(0, BOARD_SIZE - 1),
        Position::new(BOARD_SIZE - 1, 0),
        Position::new(BOARD_SIZE - 1, BOARD_SIZE - 1),
    ];

    /// Create a position. No bounds check.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Create a position, or `None` if it lies off the board.
    #[must_use]
    pub const fn checked(row: u8, col: u8) -> Option<Self> {
        let pos = Self::new(row, col);
        if pos.is_in_bounds() {
            Some(pos)
        } else {
            None
        }
    }

    /// Check that both coordinates are within `[0, 8]`.
    #[inline]
    #[must_use]
    pub const fn is_in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Row-major cell index (0..81). Only meaningful for in-bounds positions.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// Check if this is one of the four corner squares.
    #[must_use]
    pub fn is_corner(self) -> bool {
        Self::CORNERS.contains(&self)
    }

    /// The neighbouring square in `dir`, or `None` if that leaves the board.
    #[inline]
    #[must_use]
    pub fn step(self, dir: Direction) -> Option<Position> {
        let (dr, dc) = dir.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Position::checked(row, col)
    }

    /// Walk from this square in `dir`, yielding each in-bounds square
    /// beyond it until the edge. The starting square is not included.
    pub fn ray(self, dir: Direction) -> impl Iterator<Item = Position> {
        std::iter::successors(self.step(dir), move |pos| pos.step(dir))
    }

    /// The orthogonal neighbours of this square that are on the board.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        Direction::ALL.into_iter().filter_map(move |dir| self.step(dir))
    }

    /// Iterate over all 81 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }
}

impl std::fmt::Display for Position {
    /// Prints algebraic notation (`a1`..`i9`) for on-board squares and the
    /// raw pair otherwise.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_in_bounds() {
            write!(f, "{}{}", (b'a' + self.row) as char, self.col + 1)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

/// One of the four orthogonal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward row `a`.
    Up,
    /// Toward row `i`.
    Down,
    /// Toward column `1`.
    Left,
    /// Toward column `9`.
    Right,
}

impl Direction {
    /// All directions in scan order.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// `(row, col)` offset of one step.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Direction that leads from `from` to `to` along a shared row or
    /// column. `None` if the squares are equal or not aligned.
    #[must_use]
    pub fn between(from: Position, to: Position) -> Option<Direction> {
        use std::cmp::Ordering::*;
        match (to.row.cmp(&from.row), to.col.cmp(&from.col)) {
            (Less, Equal) => Some(Direction::Up),
            (Greater, Equal) => Some(Direction::Down),
            (Equal, Less) => Some(Direction::Left),
            (Equal, Greater) => Some(Direction::Right),
            _ => None,
        }
    }
}
