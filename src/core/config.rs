//! Game configuration.
//!
//! `RulesConfig` holds the few knobs Variant 1 exposes:
//! - the piece count below which a player loses
//! - which side moves first
//! - the glyphs used to draw each side's pieces
//!
//! Configs can be built in code with the `with_*` methods or loaded from
//! TOML. Missing keys fall back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::board::EMPTY_GLYPH;
use super::player::{Player, PlayerMap};

/// Default loss threshold: a player with fewer pieces than this loses.
pub const DEFAULT_MIN_PIECES: usize = 5;

/// Errors from building or loading a `RulesConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("min_pieces must be at least 1")]
    ZeroMinPieces,

    #[error("min_pieces {0} exceeds the 9 pieces each side starts with")]
    MinPiecesTooLarge(usize),

    #[error("both players use the glyph '{0}'")]
    DuplicateGlyph(char),

    #[error("glyph '{0}' is reserved for empty squares")]
    ReservedGlyph(char),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Rules and presentation settings for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// A player whose piece count drops below this loses.
    pub min_pieces: usize,

    /// Side that makes the first move.
    pub first_player: Player,

    /// Glyph drawn for each side's pieces.
    pub glyphs: PlayerMap<char>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            min_pieces: DEFAULT_MIN_PIECES,
            first_player: Player::Second,
            glyphs: PlayerMap::from_pair('R', 'B'),
        }
    }
}

impl RulesConfig {
    /// Set the loss threshold.
    #[must_use]
    pub fn with_min_pieces(mut self, min_pieces: usize) -> Self {
        self.min_pieces = min_pieces;
        self
    }

    /// Set which side moves first.
    #[must_use]
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Set the piece glyphs.
    #[must_use]
    pub fn with_glyphs(mut self, first: char, second: char) -> Self {
        self.glyphs = PlayerMap::from_pair(first, second);
        self
    }

    /// Check that the settings describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_pieces == 0 {
            return Err(ConfigError::ZeroMinPieces);
        }
        if self.min_pieces > super::BOARD_SIZE as usize {
            return Err(ConfigError::MinPiecesTooLarge(self.min_pieces));
        }
        for (_, &glyph) in self.glyphs.iter() {
            if glyph == EMPTY_GLYPH {
                return Err(ConfigError::ReservedGlyph(glyph));
            }
        }
        if self.glyphs[Player::First] == self.glyphs[Player::Second] {
            return Err(ConfigError::DuplicateGlyph(self.glyphs[Player::First]));
        }
        Ok(())
    }

    /// Parse and validate a config from TOML text.
    ///
    /// ```
    /// use hasami_shogi::core::{Player, RulesConfig};
    ///
    /// let config = RulesConfig::from_toml_str("min_pieces = 3\nfirst_player = \"first\"").unwrap();
    /// assert_eq!(config.min_pieces, 3);
    /// assert_eq!(config.first_player, Player::First);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: RulesConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
