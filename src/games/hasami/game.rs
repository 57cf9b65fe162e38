//! Hasami Shogi rules engine.

use crate::core::{Board, Move, Player, Position, RulesConfig};
use crate::rules::{Captures, GameResult, MoveError, RulesEngine};

use super::{capture, movement};

/// Variant 1 rules: rook moves, line and corner captures, loss below a
/// minimum piece count.
///
/// ```
/// use hasami_shogi::core::{Board, Move, Player, Position};
/// use hasami_shogi::games::hasami::HasamiRules;
/// use hasami_shogi::rules::{GameResult, RulesEngine};
///
/// let rules = HasamiRules::default();
/// let mut board = Board::new();
/// let mv = Move::new(Position::new(0, 0), Position::new(0, 4));
///
/// // Blocked by the rest of row a.
/// assert!(rules.validate(&board, mv, Player::First).is_err());
///
/// let mv = Move::new(Position::new(0, 0), Position::new(4, 0));
/// let captured = rules.play(&mut board, mv, Player::First).unwrap();
/// assert!(captured.is_empty());
/// assert_eq!(rules.check_win(&board), GameResult::InProgress);
/// ```
#[derive(Clone, Debug, Default)]
pub struct HasamiRules {
    config: RulesConfig,
}

impl HasamiRules {
    /// Create a rules engine with the given configuration.
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    /// Check whether `player` has fallen below the piece threshold. A side
    /// with no pieces left is always eliminated, whatever the config says.
    #[must_use]
    pub fn is_eliminated(&self, board: &Board, player: Player) -> bool {
        let count = board.count(player);
        count == 0 || count < self.config.min_pieces
    }
}

impl RulesEngine for HasamiRules {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn validate(&self, board: &Board, mv: Move, mover: Player) -> Result<(), MoveError> {
        movement::validate_move(board, mv, mover)
    }

    fn resolve_captures(&self, board: &Board, to: Position, mover: Player) -> Captures {
        capture::resolve(board, to, mover)
    }

    /// `First` is examined before `Second`, so a board where both sides are
    /// below the threshold reports `Won(Second)`. Play from the standard
    /// setup cannot produce such a board: a move only removes opponent
    /// pieces.
    fn check_win(&self, board: &Board) -> GameResult {
        Player::ALL
            .into_iter()
            .find(|&player| self.is_eliminated(board, player))
            .map_or(GameResult::InProgress, |loser| GameResult::Won(loser.opponent()))
    }
}
