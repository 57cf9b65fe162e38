//! Capture rules for Hasami Shogi (Variant 1).
//!
//! Two patterns, both anchored on the square the mover's piece just
//! reached:
//!
//! ```text
//! Line:    X O O ... O X     any run of opponent pieces, closed by the mover
//! Corner:  O X               opponent in a corner, mover on both of its
//!          X                 orthogonal neighbours
//! ```
//!
//! Nothing else on the board is inspected. A piece that moves between two
//! enemies is safe, because the scan only ever looks outward from the
//! piece that moved.

use smallvec::SmallVec;
use tracing::debug;

use crate::core::{Board, Direction, Player, Position};
use crate::rules::Captures;

/// Longest possible run: every square between two pieces on one line.
pub type Run = SmallVec<[Position; 7]>;

/// Find the opponent run captured in one direction from `to`.
///
/// Walks outward from `to` collecting opponent pieces. The run is captured
/// only if it is non-empty and the square after it holds one of `mover`'s
/// pieces. An empty square or the board edge ends the walk with no capture.
pub fn flanked_run(board: &Board, to: Position, dir: Direction, mover: Player) -> Option<Run> {
    let opponent = mover.opponent();
    let mut run = Run::new();

    for pos in to.ray(dir) {
        match board.occupant(pos) {
            Some(owner) if owner == opponent => run.push(pos),
            Some(_) if !run.is_empty() => return Some(run),
            _ => return None,
        }
    }

    None
}

/// The corner captured by a piece arriving on `to`, if any.
///
/// `to` must be orthogonally adjacent to a corner held by the opponent, and
/// the corner's other neighbour must already hold one of `mover`'s pieces.
pub fn corner_capture(board: &Board, to: Position, mover: Player) -> Option<Position> {
    let corner = Position::CORNERS
        .into_iter()
        .find(|corner| corner.neighbors().any(|n| n == to))?;

    if board.occupant(corner) != Some(mover.opponent()) {
        return None;
    }

    let enclosed = corner
        .neighbors()
        .all(|side| side == to || board.occupant(side) == Some(mover));
    enclosed.then_some(corner)
}

/// Every square captured by the piece that just arrived on `to`.
pub fn resolve(board: &Board, to: Position, mover: Player) -> Captures {
    let mut captures = Captures::default();

    for dir in Direction::ALL {
        if let Some(run) = flanked_run(board, to, dir, mover) {
            debug!(%to, ?dir, len = run.len(), "line capture");
            captures.extend(run);
        }
    }

    if let Some(corner) = corner_capture(board, to, mover) {
        debug!(%to, %corner, "corner capture");
        captures.insert(corner);
    }

    captures
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(captures: Captures) -> Vec<Position> {
        let mut squares: Vec<_> = captures.into_iter().collect();
        squares.sort();
        squares
    }

    #[test]
    fn test_single_piece_sandwich() {
        let board = Board::from_diagram(
            "
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - B R B - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            ",
        )
        .unwrap();

        assert_eq!(
            sorted(resolve(&board, Position::new(3, 5), Player::Second)),
            vec![Position::new(3, 4)]
        );
    }

    #[test]
    fn test_long_run_captured() {
        let board = Board::from_diagram(
            "
            - - - - - - - - -
            - B - - - - - - -
            - R - - - - - - -
            - R - - - - - - -
            - R - - - - - - -
            - R - - - - - - -
            - B - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            ",
        )
        .unwrap();

        let run = flanked_run(&board, Position::new(6, 1), Direction::Up, Player::Second).unwrap();
        assert_eq!(run.len(), 4);
        assert_eq!(sorted(resolve(&board, Position::new(6, 1), Player::Second)).len(), 4);
    }

    #[test]
    fn test_run_to_edge_not_captured() {
        let board = Board::from_diagram(
            "
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - B R R
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            ",
        )
        .unwrap();

        assert_eq!(flanked_run(&board, Position::new(4, 6), Direction::Right, Player::Second), None);
        assert!(resolve(&board, Position::new(4, 6), Player::Second).is_empty());
    }

    #[test]
    fn test_gap_breaks_run() {
        let board = Board::from_diagram(
            "
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            B R - B - - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            ",
        )
        .unwrap();

        assert!(resolve(&board, Position::new(4, 0), Player::Second).is_empty());
    }

    #[test]
    fn test_adjacent_own_piece_is_no_capture() {
        let board = Board::from_diagram(
            "
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - B B R B - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            ",
        )
        .unwrap();

        assert_eq!(flanked_run(&board, Position::new(4, 2), Direction::Right, Player::Second), None);
    }

    #[test]
    fn test_multiple_directions() {
        let board = Board::from_diagram(
            "
            - - - - - - - - -
            - - - - B - - - -
            - - - - R - - - -
            - - B R B R B - -
            - - - - R - - - -
            - - - - B - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            ",
        )
        .unwrap();

        assert_eq!(
            sorted(resolve(&board, Position::new(3, 4), Player::Second)),
            vec![
                Position::new(2, 4),
                Position::new(3, 3),
                Position::new(3, 5),
                Position::new(4, 4),
            ]
        );
    }

    #[test]
    fn test_moving_into_pincer_is_safe() {
        // Red just moved to d5, between two Black pieces.
        let board = Board::from_diagram(
            "
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - B R B - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            ",
        )
        .unwrap();

        assert!(resolve(&board, Position::new(3, 4), Player::First).is_empty());
    }

    #[test]
    fn test_corner_capture_each_corner() {
        // (corner, existing black guard, black piece that just moved)
        let cases = [
            ((0, 0), (0, 1), (1, 0)),
            ((0, 8), (1, 8), (0, 7)),
            ((8, 0), (7, 0), (8, 1)),
            ((8, 8), (8, 7), (7, 8)),
        ];

        for (corner, guard, mover) in cases {
            let mut board = Board::empty();
            let corner = Position::new(corner.0, corner.1);
            let guard = Position::new(guard.0, guard.1);
            let to = Position::new(mover.0, mover.1);
            board.set(corner, crate::core::CellState::Occupied(Player::First)).unwrap();
            board.set(guard, crate::core::CellState::Occupied(Player::Second)).unwrap();
            board.set(to, crate::core::CellState::Occupied(Player::Second)).unwrap();

            assert_eq!(corner_capture(&board, to, Player::Second), Some(corner), "corner {corner}");
            assert_eq!(sorted(resolve(&board, to, Player::Second)), vec![corner]);
        }
    }

    #[test]
    fn test_corner_needs_both_sides() {
        let board = Board::from_diagram(
            "
            R - - - - - - - -
            B - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            ",
        )
        .unwrap();

        assert_eq!(corner_capture(&board, Position::new(1, 0), Player::Second), None);
    }

    #[test]
    fn test_corner_own_piece_not_captured() {
        let board = Board::from_diagram(
            "
            B B - - - - - - -
            B - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            ",
        )
        .unwrap();

        assert_eq!(corner_capture(&board, Position::new(1, 0), Player::Second), None);
    }

    #[test]
    fn test_not_adjacent_to_corner() {
        let board = Board::new();
        assert_eq!(corner_capture(&board, Position::new(4, 4), Player::Second), None);
        assert_eq!(corner_capture(&board, Position::new(1, 1), Player::Second), None);
    }
}
