//! Core value types: players, positions, moves, the board, configuration.
//!
//! Nothing here knows the rules of the game. The board stores cell contents
//! and refuses off-grid squares; legality and captures live in `rules` and
//! `games::hasami`.

pub mod action;
pub mod board;
pub mod config;
pub mod player;
pub mod position;

/// Width and height of the board.
pub const BOARD_SIZE: u8 = 9;

pub use action::Move;
pub use board::{Board, BoardError, CellState, DiagramError, EMPTY_GLYPH};
pub use config::{ConfigError, RulesConfig, DEFAULT_MIN_PIECES};
pub use player::{Player, PlayerMap};
pub use position::{Direction, Position};
