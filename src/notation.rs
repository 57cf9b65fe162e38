//! Square and move notation used by the terminal front end.
//!
//! Squares are a row letter `a`..`i` (top to bottom) followed by a column
//! digit `1`..`9` (left to right). A move is two squares separated by a
//! comma: `i1, b1`.
//!
//! The rules engine only ever sees parsed `Position`/`Move` values.

use thiserror::Error;

use crate::core::{Move, Position};

/// Why a piece of notation could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no move entered")]
    Empty,

    #[error("expected two squares separated by a comma, like \"i1, b1\"")]
    MissingSeparator,

    #[error("'{0}' is not a row; rows are a to i")]
    BadRow(String),

    #[error("'{0}' is not a column; columns are 1 to 9")]
    BadColumn(String),
}

/// Parse a single square such as `b3`.
///
/// ```
/// use hasami_shogi::core::Position;
/// use hasami_shogi::notation::parse_position;
///
/// assert_eq!(parse_position("b3"), Ok(Position::new(1, 2)));
/// assert!(parse_position("j1").is_err());
/// ```
pub fn parse_position(text: &str) -> Result<Position, ParseError> {
    let text = text.trim();
    let mut chars = text.chars();
    let row_char = chars.next().ok_or(ParseError::Empty)?.to_ascii_lowercase();
    let col_text = chars.as_str();

    let row = match row_char {
        'a'..='i' => row_char as u8 - b'a',
        _ => return Err(ParseError::BadRow(row_char.to_string())),
    };

    let col = match col_text.as_bytes() {
        &[digit @ b'1'..=b'9'] => digit - b'0',
        _ => return Err(ParseError::BadColumn(col_text.to_string())),
    };

    Ok(Position::new(row, col - 1))
}

/// Parse a move such as `i1, b1`.
pub fn parse_move(text: &str) -> Result<Move, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }
    let (from, to) = text.split_once(',').ok_or(ParseError::MissingSeparator)?;
    if from.trim().is_empty() || to.trim().is_empty() {
        return Err(ParseError::MissingSeparator);
    }
    Ok(Move::new(parse_position(from)?, parse_position(to)?))
}
