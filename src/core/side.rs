//! Battle seats and per-seat data storage.
//!
//! ## Side
//!
//! A battle always has exactly two seats: the human player and the
//! automated opponent.
//!
//! ## SideMap
//!
//! Per-side data storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats in a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human player.
    Player,
    /// The automated opponent.
    Opponent,
}

impl Side {
    /// Both sides, player first.
    pub const BOTH: [Side; 2] = [Side::Player, Side::Opponent];

    /// Get the other seat.
    ///
    /// ```
    /// use tcg_arena::core::Side;
    ///
    /// assert_eq!(Side::Player.other(), Side::Opponent);
    /// assert_eq!(Side::Opponent.other(), Side::Player);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Get the raw seat index (player = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }

    /// Possessive prefix used in narration ("Your", "Opponent's").
    #[must_use]
    pub const fn possessive(self) -> &'static str {
        match self {
            Side::Player => "Your",
            Side::Opponent => "Opponent's",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Opponent => write!(f, "Opponent"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use tcg_arena::core::{Side, SideMap};
///
/// let mut cards_left: SideMap<usize> = SideMap::new(|_| 3);
/// cards_left[Side::Opponent] -= 1;
///
/// assert_eq!(cards_left[Side::Player], 3);
/// assert_eq!(cards_left[Side::Opponent], 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Player), factory(Side::Opponent)],
        }
    }

    /// Create a SideMap from explicit player and opponent values.
    pub fn from_pair(player: T, opponent: T) -> Self {
        Self {
            data: [player, opponent],
        }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs, player first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::BOTH.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Side, &mut T) pairs, player first.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Side, &mut T)> {
        Side::BOTH.into_iter().zip(self.data.iter_mut())
    }

    /// Consume the map, returning (player, opponent).
    pub fn into_pair(self) -> (T, T) {
        let [player, opponent] = self.data;
        (player, opponent)
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
