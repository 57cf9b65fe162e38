//! A game in progress: board, whose turn it is, and the result so far.
//!
//! `GameSession` is the only place turn order lives. Each call to
//! `make_move` runs the whole turn: validate, apply, resolve captures,
//! check for a winner, hand the turn over.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::{Board, ConfigError, Move, Player, Position, RulesConfig};
use crate::rules::{GameResult, MoveError, RulesEngine};

use super::HasamiRules;

/// Why a session refused a move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("the game is over: {0}")]
    GameOver(GameResult),

    #[error(transparent)]
    IllegalMove(#[from] MoveError),
}

/// What happened during one completed turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Player who made the move.
    pub mover: Player,
    /// The move played.
    pub mv: Move,
    /// Opponent squares emptied by the move, in row-major order.
    pub captured: Vec<Position>,
    /// Game result after the move.
    pub result: GameResult,
}

/// A single game of Hasami Shogi.
#[derive(Clone, Debug)]
pub struct GameSession {
    rules: HasamiRules,
    board: Board,
    active_player: Player,
    result: GameResult,
}

impl GameSession {
    /// Start a game from the standard setup.
    pub fn new(config: RulesConfig) -> Result<Self, ConfigError> {
        Self::from_board(config, Board::new())
    }

    /// Start a game from an arbitrary board, with `config.first_player` to move.
    pub fn from_board(config: RulesConfig, board: Board) -> Result<Self, ConfigError> {
        config.validate()?;
        let active_player = config.first_player;
        let rules = HasamiRules::new(config);
        let result = rules.check_win(&board);
        Ok(Self {
            rules,
            board,
            active_player,
            result,
        })
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn rules(&self) -> &HasamiRules {
        &self.rules
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    #[must_use]
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Number of `player`'s pieces that have been captured.
    #[must_use]
    pub fn captured_count(&self, player: Player) -> usize {
        self.board.captured_count(player)
    }

    /// Owner of the piece on `pos`, if any.
    #[must_use]
    pub fn square_occupant(&self, pos: Position) -> Option<Player> {
        self.board.occupant(pos)
    }

    /// Legal moves for the player to move. Empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.result.is_over() {
            return Vec::new();
        }
        self.rules.legal_moves(&self.board, self.active_player)
    }

    /// Play a move for the active player.
    ///
    /// On error nothing changes, including whose turn it is.
    pub fn make_move(&mut self, mv: Move) -> Result<TurnOutcome, SessionError> {
        if self.result.is_over() {
            return Err(SessionError::GameOver(self.result));
        }

        let mover = self.active_player;
        let captures = self.rules.play(&mut self.board, mv, mover)?;

        let mut captured: Vec<Position> = captures.into_iter().collect();
        captured.sort_unstable();
        debug!(%mover, %mv, captured = captured.len(), "move played");

        self.result = self.rules.check_win(&self.board);
        if let GameResult::Won(winner) = self.result {
            info!(%winner, "game over");
        }
        self.active_player = mover.opponent();

        Ok(TurnOutcome {
            mover,
            mv,
            captured,
            result: self.result,
        })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            rules: HasamiRules::default(),
            board: Board::new(),
            active_player: RulesConfig::default().first_player,
            result: GameResult::InProgress,
        }
    }
}
