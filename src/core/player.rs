//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The two sides of a Hasami Shogi game. `First` starts on row `a` (top),
//! `Second` on row `i` (bottom). Historically these are shown as Red and
//! Black.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player`, for data kept per side
//! (piece glyphs, piece counts).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// Starts on the top edge (row `a`). Displayed as Red.
    First,
    /// Starts on the bottom edge (row `i`). Displayed as Black.
    Second,
}

impl Player {
    /// Both players, `First` then `Second`.
    pub const ALL: [Player; 2] = [Player::First, Player::Second];

    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Slot index (0 for `First`, 1 for `Second`).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }

    /// Traditional colour name.
    #[must_use]
    pub const fn color_name(self) -> &'static str {
        match self {
            Player::First => "RED",
            Player::Second => "BLACK",
        }
    }

    /// Row the player's pieces occupy at game start.
    #[must_use]
    pub const fn home_row(self) -> u8 {
        match self {
            Player::First => 0,
            Player::Second => crate::core::BOARD_SIZE - 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.color_name())
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use hasami_shogi::core::{Player, PlayerMap};
///
/// let mut counts = PlayerMap::with_value(9usize);
/// counts[Player::Second] -= 2;
///
/// assert_eq!(counts[Player::First], 9);
/// assert_eq!(counts[Player::Second], 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    first: T,
    second: T,
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            first: factory(Player::First),
            second: factory(Player::Second),
        }
    }

    /// Create a map from explicit values for each side.
    pub const fn from_pair(first: T, second: T) -> Self {
        Self { first, second }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            first: value.clone(),
            second: value,
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        match player {
            Player::First => &self.first,
            Player::Second => &self.second,
        }
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        match player {
            Player::First => &mut self.first,
            Player::Second => &mut self.second,
        }
    }

    /// Iterate over (Player, &T) pairs, `First` first.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        [(Player::First, &self.first), (Player::Second, &self.second)].into_iter()
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::First.opponent(), Player::Second);
        assert_eq!(Player::Second.opponent(), Player::First);
        assert_eq!(Player::First.opponent().opponent(), Player::First);
    }

    #[test]
    fn test_player_display() {
        assert_eq!(format!("{}", Player::First), "RED");
        assert_eq!(format!("{}", Player::Second), "BLACK");
    }

    #[test]
    fn test_home_rows() {
        assert_eq!(Player::First.home_row(), 0);
        assert_eq!(Player::Second.home_row(), 8);
    }

    #[test]
    fn test_player_map_new() {
        let map = PlayerMap::new(|p| p.index() * 10);

        assert_eq!(map[Player::First], 0);
        assert_eq!(map[Player::Second], 10);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::default();

        map[Player::First] = 10;
        *map.get_mut(Player::Second) += 20;

        assert_eq!(map[Player::First], 10);
        assert_eq!(map[Player::Second], 20);
    }

    #[test]
    fn test_player_map_iter() {
        let map = PlayerMap::from_pair('R', 'B');

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Player::First, &'R'), (Player::Second, &'B')]);
    }

    #[test]
    fn test_player_serialization() {
        let json = serde_json::to_string(&Player::Second).unwrap();
        assert_eq!(json, "\"second\"");

        let map = PlayerMap::from_pair(3u8, 4u8);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
