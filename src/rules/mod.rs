//! Rules engine trait and shared rule types.
//!
//! Games implement `RulesEngine` to define:
//! - Which moves are legal
//! - Which pieces a move captures
//! - When the game is won
//!
//! The trait supplies move application, capture removal and legal-move
//! enumeration on top of those.

pub mod engine;
pub mod error;

pub use engine::{Captures, GameResult, RulesEngine};
pub use error::MoveError;
