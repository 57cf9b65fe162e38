//! Hasami Shogi, Variant 1.
//!
//! Each side starts with nine pieces on its home row of a 9×9 board.
//! - Pieces move like rooks: any distance along a row or column, no jumping
//! - A move captures any line of opponent pieces it closes off against
//!   another of the mover's pieces
//! - A piece in a corner is captured when the mover holds both of its
//!   neighbours
//! - A player left with fewer than `min_pieces` pieces (default 5) loses
//!
//! Captures are only ever triggered by the piece that moved, so moving
//! into an existing pincer is safe.

pub mod capture;
mod game;
pub mod movement;
mod session;

pub use game::HasamiRules;
pub use session::{GameSession, SessionError, TurnOutcome};
