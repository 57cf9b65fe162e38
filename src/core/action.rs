//! Move representation: a piece slides from one square to another.
//!
//! Moves are transient values built once per turn. The board and rules
//! engine never store them.

use serde::{Deserialize, Serialize};

use super::position::{Direction, Position};

/// A proposed move from `from` to `to`.
///
/// ```
/// use hasami_shogi::core::{Move, Position};
///
/// let mv = Move::new(Position::new(8, 0), Position::new(1, 0));
/// assert_eq!(mv.to_string(), "i1, b1");
/// assert_eq!(mv.reversed().from, Position::new(1, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    #[must_use]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// The same move played backwards.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    /// Direction of travel, if the move runs along a single row or column.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        Direction::between(self.from, self.to)
    }

    /// Squares strictly between `from` and `to`.
    ///
    /// Empty when the move is not orthogonal.
    pub fn path(&self) -> impl Iterator<Item = Position> {
        let Move { from, to } = *self;
        self.direction()
            .into_iter()
            .flat_map(move |dir| from.ray(dir))
            .take_while(move |pos| *pos != to)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.from, self.to)
    }
}
