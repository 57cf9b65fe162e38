//! Move legality: rook-style slides with no jumping.

use crate::core::{Board, CellState, Move, Player};
use crate::rules::MoveError;

/// Check a move for `mover`, stopping at the first failed rule.
///
/// Order of checks:
/// 1. both squares on the board and different
/// 2. `from` holds one of `mover`'s pieces
/// 3. `from` and `to` share a row or a column
/// 4. every square strictly between them is empty
/// 5. `to` is empty
pub fn validate_move(board: &Board, mv: Move, mover: Player) -> Result<(), MoveError> {
    for pos in [mv.from, mv.to] {
        if !pos.is_in_bounds() {
            return Err(MoveError::OutOfBounds(pos));
        }
    }
    if mv.from == mv.to {
        return Err(MoveError::SameSquare);
    }

    match board.get(mv.from)? {
        CellState::Empty => return Err(MoveError::EmptySource(mv.from)),
        CellState::Occupied(owner) if owner != mover => {
            return Err(MoveError::NotYourPiece { pos: mv.from, owner });
        }
        CellState::Occupied(_) => {}
    }

    if mv.direction().is_none() {
        return Err(MoveError::NotOrthogonal {
            from: mv.from,
            to: mv.to,
        });
    }

    if let Some(blocker) = mv.path().find(|pos| board.occupant(*pos).is_some()) {
        return Err(MoveError::PathBlocked(blocker));
    }

    if !board.get(mv.to)?.is_empty() {
        return Err(MoveError::DestinationOccupied(mv.to));
    }

    Ok(())
}
