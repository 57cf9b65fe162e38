//! Rules engine trait for game implementations.
//!
//! A rules engine answers four questions about a board:
//! - Is this move legal for this player?
//! - What does the board look like after the move?
//! - Which opponent pieces did the move capture?
//! - Has somebody won?
//!
//! Engines hold no game state of their own. Turn order lives in
//! `GameSession`; the board is passed in on every call.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::error::MoveError;
use crate::core::{Board, BoardError, CellState, Move, Player, Position, RulesConfig};

/// Squares captured by a single move.
pub type Captures = FxHashSet<Position>;

/// Outcome of the game as seen from the current board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Nobody has won yet.
    InProgress,
    /// The given player has won.
    Won(Player),
}

impl GameResult {
    /// Check if the game has ended.
    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, GameResult::Won(_))
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::InProgress => None,
            GameResult::Won(player) => Some(player),
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        self == GameResult::Won(player)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::InProgress => f.write_str("UNFINISHED"),
            GameResult::Won(player) => write!(f, "{}_WON", player),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `validate` must not mutate anything and must be deterministic
/// - `apply_move` does not check legality; call `validate` first
/// - `resolve_captures` only reports squares, the caller clears them
/// - `check_win` must be a pure function of the board
pub trait RulesEngine {
    /// Get the rules configuration.
    fn config(&self) -> &RulesConfig;

    /// Check whether `mover` may play `mv` on `board`.
    fn validate(&self, board: &Board, mv: Move, mover: Player) -> Result<(), MoveError>;

    /// Find the opponent pieces captured by the piece that just arrived on `to`.
    fn resolve_captures(&self, board: &Board, to: Position, mover: Player) -> Captures;

    /// Decide the game from the current board.
    fn check_win(&self, board: &Board) -> GameResult;

    // === Convenience Methods ===

    /// Move the piece on `mv.from` to `mv.to` and empty the source square.
    ///
    /// Performs no legality check. Only fails for off-board squares, in
    /// which case the board is left untouched.
    fn apply_move(&self, board: &mut Board, mv: Move) -> Result<(), BoardError> {
        let piece = board.get(mv.from)?;
        board.get(mv.to)?;
        board.set(mv.from, CellState::Empty)?;
        board.set(mv.to, piece)
    }

    /// Clear every captured square.
    fn remove_captures(&self, board: &mut Board, captures: &Captures) -> Result<(), BoardError> {
        for &pos in captures {
            board.set(pos, CellState::Empty)?;
        }
        Ok(())
    }

    /// Validate, apply and resolve a move in one step.
    ///
    /// On error the board is unchanged.
    fn play(&self, board: &mut Board, mv: Move, mover: Player) -> Result<Captures, MoveError> {
        if let Err(err) = self.validate(board, mv, mover) {
            trace!(%mv, %mover, %err, "rejected move");
            return Err(err);
        }
        self.apply_move(board, mv)?;
        let captures = self.resolve_captures(board, mv.to, mover);
        self.remove_captures(board, &captures)?;
        Ok(captures)
    }

    /// Enumerate every legal move for a player.
    ///
    /// Default implementation tries each of the player's pieces against
    /// every square and keeps what `validate` accepts.
    fn legal_moves(&self, board: &Board, player: Player) -> Vec<Move> {
        board
            .all_occupied_by(player)
            .flat_map(|from| Position::all().map(move |to| Move::new(from, to)))
            .filter(|mv| self.validate(board, *mv, player).is_ok())
            .collect()
    }
}
