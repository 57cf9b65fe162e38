//! The 9×9 grid and what sits on each square.
//!
//! ## CellState
//!
//! Every square is either `Empty` or `Occupied` by one player. A square
//! keeps no memory of a previous owner once emptied.
//!
//! ## Board
//!
//! Fixed-size grid, created with row `a` full of `First` pieces and row `i`
//! full of `Second` pieces. The board does no rule checking of its own:
//! the rules engine decides which mutations happen, the board only refuses
//! off-grid squares.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::{Player, PlayerMap};
use super::position::Position;
use super::BOARD_SIZE;

const SIZE: usize = BOARD_SIZE as usize;

/// Glyph used for an empty square when rendering.
pub const EMPTY_GLYPH: char = '-';

/// Contents of a single square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Empty,
    Occupied(Player),
}

impl CellState {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, CellState::Empty)
    }

    /// The owning player, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            CellState::Empty => None,
            CellState::Occupied(player) => Some(player),
        }
    }

    #[must_use]
    pub fn is_occupied_by(self, player: Player) -> bool {
        self == CellState::Occupied(player)
    }
}

/// Errors from direct board access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("square {0} is off the board")]
    OutOfBounds(Position),
}

/// Errors from reading a board diagram.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagramError {
    #[error("board diagram has {0} rows, expected 9")]
    Rows(usize),

    #[error("board diagram row {row} has {len} squares, expected 9")]
    Columns { row: usize, len: usize },

    #[error("board diagram contains unknown glyph '{0}'")]
    Glyph(char),
}

/// The game board.
///
/// ```
/// use hasami_shogi::core::{Board, CellState, Player, Position};
///
/// let board = Board::new();
/// assert_eq!(board.get(Position::new(0, 4)), Ok(CellState::Occupied(Player::First)));
/// assert_eq!(board.get(Position::new(4, 4)), Ok(CellState::Empty));
/// assert_eq!(board.count(Player::Second), 9);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[CellState; SIZE]; SIZE],
}

impl Board {
    /// Create a board in the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty();
        for player in Player::ALL {
            board.cells[player.home_row() as usize] = [CellState::Occupied(player); SIZE];
        }
        board
    }

    /// Create a board with every square empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [[CellState::Empty; SIZE]; SIZE],
        }
    }

    /// Build a board from a 9-line diagram using `-`, `R` and `B`.
    ///
    /// Whitespace inside a line is ignored, so rendered boards without their
    /// labels can be pasted back in.
    pub fn from_diagram(diagram: &str) -> Result<Self, DiagramError> {
        Self::from_diagram_with(diagram, &PlayerMap::from_pair('R', 'B'))
    }

    /// Build a board from a diagram using custom player glyphs.
    pub fn from_diagram_with(diagram: &str, glyphs: &PlayerMap<char>) -> Result<Self, DiagramError> {
        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != SIZE {
            return Err(DiagramError::Rows(rows.len()));
        }

        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let glyph_row: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if glyph_row.len() != SIZE {
                return Err(DiagramError::Columns {
                    row,
                    len: glyph_row.len(),
                });
            }
            for (col, glyph) in glyph_row.into_iter().enumerate() {
                board.cells[row][col] = match glyph {
                    EMPTY_GLYPH => CellState::Empty,
                    g if g == glyphs[Player::First] => CellState::Occupied(Player::First),
                    g if g == glyphs[Player::Second] => CellState::Occupied(Player::Second),
                    other => return Err(DiagramError::Glyph(other)),
                };
            }
        }
        Ok(board)
    }

    /// Get the contents of a square.
    pub fn get(&self, pos: Position) -> Result<CellState, BoardError> {
        if !pos.is_in_bounds() {
            return Err(BoardError::OutOfBounds(pos));
        }
        Ok(self.cells[pos.row as usize][pos.col as usize])
    }

    /// Overwrite the contents of a square.
    pub fn set(&mut self, pos: Position, state: CellState) -> Result<(), BoardError> {
        if !pos.is_in_bounds() {
            return Err(BoardError::OutOfBounds(pos));
        }
        self.cells[pos.row as usize][pos.col as usize] = state;
        Ok(())
    }

    /// Owner of a square; `None` for empty and off-board squares.
    #[inline]
    #[must_use]
    pub fn occupant(&self, pos: Position) -> Option<Player> {
        self.get(pos).ok().and_then(CellState::owner)
    }

    /// Iterate over every square and its contents in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        Position::all().map(move |pos| (pos, self.cells[pos.row as usize][pos.col as usize]))
    }

    /// Every square holding one of `player`'s pieces.
    pub fn all_occupied_by(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        self.cells()
            .filter(move |(_, cell)| cell.is_occupied_by(player))
            .map(|(pos, _)| pos)
    }

    /// Number of pieces `player` has on the board.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.all_occupied_by(player).count()
    }

    /// Pieces per player.
    #[must_use]
    pub fn counts(&self) -> PlayerMap<usize> {
        PlayerMap::new(|player| self.count(player))
    }

    /// Number of `player`'s pieces no longer on the board, counted against
    /// the nine each side starts with.
    #[must_use]
    pub fn captured_count(&self, player: Player) -> usize {
        SIZE.saturating_sub(self.count(player))
    }

    /// Render the grid with column headers and row letters.
    ///
    /// ```text
    ///   1 2 3 4 5 6 7 8 9
    /// a R R R R R R R R R
    /// b - - - - - - - - -
    /// ```
    #[must_use]
    pub fn render(&self, glyphs: &PlayerMap<char>) -> String {
        let mut out = String::with_capacity((SIZE + 1) * (2 * SIZE + 3));
        out.push(' ');
        for col in 1..=SIZE {
            out.push(' ');
            out.push_str(&col.to_string());
        }
        out.push('\n');

        for (row, cells) in self.cells.iter().enumerate() {
            out.push((b'a' + row as u8) as char);
            for cell in cells {
                out.push(' ');
                out.push(match cell {
                    CellState::Empty => EMPTY_GLYPH,
                    CellState::Occupied(player) => glyphs[*player],
                });
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(&PlayerMap::from_pair('R', 'B')))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_setup() {
        let board = Board::new();

        for col in 0..BOARD_SIZE {
            assert_eq!(board.get(Position::new(0, col)), Ok(CellState::Occupied(Player::First)));
            assert_eq!(board.get(Position::new(8, col)), Ok(CellState::Occupied(Player::Second)));
        }
        for row in 1..8 {
            for col in 0..BOARD_SIZE {
                assert_eq!(board.get(Position::new(row, col)), Ok(CellState::Empty));
            }
        }
        assert_eq!(board.counts(), PlayerMap::from_pair(9, 9));
    }

    #[test]
    fn test_cell_total_is_81() {
        let board = Board::new();
        let empty = board.cells().filter(|(_, c)| c.is_empty()).count();
        assert_eq!(empty + board.count(Player::First) + board.count(Player::Second), 81);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new();
        let pos = Position::new(9, 0);
        assert_eq!(board.get(pos), Err(BoardError::OutOfBounds(pos)));
        assert_eq!(board.occupant(pos), None);
    }

    #[test]
    fn test_set_out_of_bounds_does_not_mutate() {
        let mut board = Board::new();
        let before = board.clone();
        let pos = Position::new(3, 12);

        assert_eq!(
            board.set(pos, CellState::Occupied(Player::First)),
            Err(BoardError::OutOfBounds(pos))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_set_and_clear() {
        let mut board = Board::empty();
        let pos = Position::new(4, 4);

        board.set(pos, CellState::Occupied(Player::Second)).unwrap();
        assert_eq!(board.occupant(pos), Some(Player::Second));

        board.set(pos, CellState::Empty).unwrap();
        assert_eq!(board.get(pos), Ok(CellState::Empty));
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn test_captured_count() {
        let mut board = Board::new();
        board.set(Position::new(0, 0), CellState::Empty).unwrap();
        board.set(Position::new(0, 1), CellState::Empty).unwrap();

        assert_eq!(board.captured_count(Player::First), 2);
        assert_eq!(board.captured_count(Player::Second), 0);
    }

    #[test]
    fn test_render() {
        let rendered = Board::new().render(&PlayerMap::from_pair('R', 'B'));
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  1 2 3 4 5 6 7 8 9");
        assert_eq!(lines[1], "a R R R R R R R R R");
        assert_eq!(lines[5], "e - - - - - - - - -");
        assert_eq!(lines[9], "i B B B B B B B B B");
    }

    #[test]
    fn test_diagram_roundtrip() {
        let board = Board::from_diagram(
            "
            R R R R R R R R R
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            - - - - - - - - -
            B B B B B B B B B
            ",
        )
        .unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_diagram_errors() {
        assert_eq!(Board::from_diagram("R R R"), Err(DiagramError::Rows(1)));

        let short_row = "RRRRRRRR\n".to_string() + &"---------\n".repeat(8);
        assert_eq!(
            Board::from_diagram(&short_row),
            Err(DiagramError::Columns { row: 0, len: 8 })
        );

        let bad_glyph = "RRRRRRRRX\n".to_string() + &"---------\n".repeat(8);
        assert_eq!(Board::from_diagram(&bad_glyph), Err(DiagramError::Glyph('X')));
    }

    #[test]
    fn test_board_serialization() {
        let board = Board::new();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
