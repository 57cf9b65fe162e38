//! Reasons a move can be rejected.

use thiserror::Error;

use crate::core::{BoardError, Player, Position};

/// Why a proposed move is illegal.
///
/// Every variant is recoverable: the board is never mutated by a rejected
/// move, so the caller can report the reason and ask again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("square {0} is off the board")]
    OutOfBounds(Position),

    #[error("a piece must move to a different square")]
    SameSquare,

    #[error("there is no piece on {0}")]
    EmptySource(Position),

    #[error("the piece on {pos} belongs to {owner}")]
    NotYourPiece { pos: Position, owner: Player },

    #[error("{from} and {to} are not on the same row or column")]
    NotOrthogonal { from: Position, to: Position },

    #[error("the path is blocked at {0}")]
    PathBlocked(Position),

    #[error("{0} is already occupied")]
    DestinationOccupied(Position),
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::OutOfBounds(pos) => MoveError::OutOfBounds(pos),
        }
    }
}
