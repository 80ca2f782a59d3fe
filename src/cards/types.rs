//! Card types, rarities and the type advantage graph.
//!
//! ## Type Advantage Graph
//!
//! Fire > Nature > Water > Electric > Fire. Dragon is strong against the
//! four elements; Spell is strong against nothing. The table order of
//! `CardType::ALL` is the tie-break whenever several types qualify.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::GameRng;

/// Elemental card type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Fire,
    Nature,
    Water,
    Electric,
    Dragon,
    Spell,
}

impl CardType {
    /// Every type, in advantage-table order.
    pub const ALL: [CardType; 6] = [
        CardType::Fire,
        CardType::Nature,
        CardType::Water,
        CardType::Electric,
        CardType::Dragon,
        CardType::Spell,
    ];

    /// Types a card may shift to when no counter exists against a Dragon.
    pub const ELEMENTS: [CardType; 4] = [
        CardType::Fire,
        CardType::Nature,
        CardType::Water,
        CardType::Electric,
    ];

    /// Display name, also the persisted spelling.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CardType::Fire => "Fire",
            CardType::Nature => "Nature",
            CardType::Water => "Water",
            CardType::Electric => "Electric",
            CardType::Dragon => "Dragon",
            CardType::Spell => "Spell",
        }
    }

    /// Types this type deals super-effective damage to.
    #[must_use]
    pub const fn strong_against(self) -> &'static [CardType] {
        match self {
            CardType::Fire => &[CardType::Nature],
            CardType::Nature => &[CardType::Water],
            CardType::Water => &[CardType::Electric],
            CardType::Electric => &[CardType::Fire],
            CardType::Dragon => &CardType::ELEMENTS,
            CardType::Spell => &[],
        }
    }

    /// Whether this type is listed as advantaged over `other`.
    ///
    /// Only the graph is consulted; the Dragon-vs-Dragon rule belongs to
    /// damage resolution.
    #[must_use]
    pub fn has_advantage_over(self, other: CardType) -> bool {
        self.strong_against().contains(&other)
    }

    /// All types advantaged over `target`, in table order.
    ///
    /// ```
    /// use tcg_arena::cards::CardType;
    ///
    /// let counters = CardType::counters_of(CardType::Nature);
    /// assert_eq!(counters.as_slice(), &[CardType::Fire, CardType::Dragon]);
    /// assert!(CardType::counters_of(CardType::Dragon).is_empty());
    /// ```
    #[must_use]
    pub fn counters_of(target: CardType) -> SmallVec<[CardType; 2]> {
        CardType::ALL
            .into_iter()
            .filter(|t| t.has_advantage_over(target))
            .collect()
    }

    /// Type a Type Shift card of type `self` should take against `target`.
    ///
    /// - Already a counter: stay.
    /// - Otherwise the first counter in table order.
    /// - No counter and target is not a Dragon: become a Dragon.
    /// - Target is a Dragon: a random element other than the current type.
    pub fn shift_against(self, target: CardType, rng: &mut GameRng) -> CardType {
        let counters = Self::counters_of(target);
        if counters.contains(&self) {
            return self;
        }
        if let Some(&first) = counters.first() {
            return first;
        }
        if target != CardType::Dragon {
            return CardType::Dragon;
        }

        let candidates: SmallVec<[CardType; 4]> = CardType::ELEMENTS
            .into_iter()
            .filter(|&t| t != self)
            .collect();
        rng.choose(&candidates).copied().unwrap_or(self)
    }

    /// Uniformly random type.
    pub fn random(rng: &mut GameRng) -> CardType {
        CardType::ALL[rng.gen_index(CardType::ALL.len())]
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CardType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardType::ALL.into_iter().find(|t| t.name() == s).ok_or(())
    }
}

/// Card rarity, governing stat ranges, value and ability odds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    UltraRare,
    Legendary,
}

impl Rarity {
    /// Every rarity, from most to least common.
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::UltraRare,
        Rarity::Legendary,
    ];

    /// Persisted spelling.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::UltraRare => "ultra-rare",
            Rarity::Legendary => "legendary",
        }
    }

    /// Pack-opening weight.
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Rarity::Common => 70.0,
            Rarity::Uncommon => 20.0,
            Rarity::Rare => 7.0,
            Rarity::UltraRare => 2.0,
            Rarity::Legendary => 1.0,
        }
    }

    /// Market value range in cents, inclusive.
    #[must_use]
    pub const fn value_cents(self) -> (u32, u32) {
        match self {
            Rarity::Common => (10, 50),
            Rarity::Uncommon => (50, 200),
            Rarity::Rare => (200, 1_000),
            Rarity::UltraRare => (1_000, 5_000),
            Rarity::Legendary => (5_000, 20_000),
        }
    }

    /// Base HP range, inclusive.
    #[must_use]
    pub const fn hp_range(self) -> (u32, u32) {
        match self {
            Rarity::Common => (30, 50),
            Rarity::Uncommon => (40, 60),
            Rarity::Rare => (50, 70),
            Rarity::UltraRare => (60, 80),
            Rarity::Legendary => (70, 100),
        }
    }

    /// Base attack range, inclusive.
    #[must_use]
    pub const fn attack_range(self) -> (u32, u32) {
        match self {
            Rarity::Common => (5, 10),
            Rarity::Uncommon => (8, 15),
            Rarity::Rare => (10, 20),
            Rarity::UltraRare => (15, 25),
            Rarity::Legendary => (20, 30),
        }
    }

    /// Rare and above always roll a special ability.
    #[must_use]
    pub const fn grants_ability(self) -> bool {
        matches!(self, Rarity::Rare | Rarity::UltraRare | Rarity::Legendary)
    }

    /// Contribution of one card to the collection strength estimate.
    #[must_use]
    pub const fn strength_multiplier(self) -> u32 {
        match self {
            Rarity::Common => 1,
            Rarity::Uncommon => 2,
            Rarity::Rare => 5,
            Rarity::UltraRare => 10,
            Rarity::Legendary => 25,
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rarity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rarity::ALL.into_iter().find(|r| r.name() == s).ok_or(())
    }
}
