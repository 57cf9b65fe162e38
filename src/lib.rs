//! # hasami-shogi
//!
//! Rules engine for Hasami Shogi (Variant 1) on a 9×9 board.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: `RulesEngine` methods take the board as an argument
//!    and keep no state, so every rule can be tested in isolation.
//!
//! 2. **Mover-Anchored Captures**: Captures are found by scanning outward
//!    from the square the moving piece landed on, never by scanning the
//!    whole board. Moving into an existing pincer is therefore safe.
//!
//! 3. **Explicit Turn State**: Whose turn it is lives in `GameSession`,
//!    not in globals.
//!
//! ## Turn Flow
//!
//! ```text
//! validate(board, move, mover) -> apply_move -> resolve_captures(board, to, mover)
//!     -> remove captured squares -> check_win(board)
//! ```
//!
//! ## Modules
//!
//! - `core`: Players, positions, moves, board, configuration
//! - `rules`: RulesEngine trait, GameResult, MoveError
//! - `games`: The Hasami Shogi rules and game session
//! - `notation`: Parsing of `a1`..`i9` squares and `"i1, b1"` moves

pub mod core;
pub mod games;
pub mod notation;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardError, CellState, ConfigError, Direction, Move, Player, PlayerMap, Position,
    RulesConfig, BOARD_SIZE,
};

pub use crate::rules::{Captures, GameResult, MoveError, RulesEngine};

pub use crate::games::hasami::{GameSession, HasamiRules, SessionError, TurnOutcome};

pub use crate::notation::{parse_move, parse_position, ParseError};

/// Create a board in the standard starting position.
#[must_use]
pub fn new_game() -> Board {
    Board::new()
}
