//! Tournament rewards and the player's persistent economy state.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cards::{CardGenerator, CardRecord, DEFAULT_PACK_SIZE};
use crate::core::{ArenaError, GameRng, Result, TournamentTier};

/// Money and packs won from a tournament.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    /// Whole dollars.
    pub money: u32,
    pub packs: u32,
}

impl Reward {
    /// Roll the reward for winning a tier.
    pub fn roll(tier: &TournamentTier, rng: &mut GameRng) -> Self {
        Self {
            money: rng.gen_range_inclusive(tier.reward_min, tier.reward_max),
            packs: tier.pack_reward,
        }
    }
}

/// Terminal event of a tournament.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentResult {
    pub level: u32,
    /// Whether every battle was won.
    pub battle_result: bool,
    /// Present only on a win.
    pub reward: Option<Reward>,
    /// The tournament stopped on an error rather than a lost battle.
    #[serde(default)]
    pub abandoned: bool,
}

impl TournamentResult {
    /// Result of a tournament cut short by an error.
    #[must_use]
    pub fn abandoned(level: u32) -> Self {
        Self {
            level,
            battle_result: false,
            reward: None,
            abandoned: true,
        }
    }
}

/// The player's persistent state, owned by the storage layer.
///
/// Tournaments read the collection and write money, packs and the
/// high-water mark.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub money: f64,
    pub packs: u32,
    #[serde(default)]
    pub collection: Vec<CardRecord>,
    /// Highest tournament level ever won.
    #[serde(default)]
    pub highest_tournament_won: Option<u32>,
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            money: 5.0,
            packs: 0,
            collection: Vec::new(),
            highest_tournament_won: None,
        }
    }
}

impl PlayerProfile {
    /// Create a profile with a starting balance.
    #[must_use]
    pub fn new(money: f64) -> Self {
        Self {
            money,
            ..Self::default()
        }
    }

    /// Set the collection (builder pattern).
    #[must_use]
    pub fn with_collection(mut self, collection: Vec<CardRecord>) -> Self {
        self.collection = collection;
        self
    }

    /// Number of cards owned.
    #[must_use]
    pub fn collection_size(&self) -> usize {
        self.collection.len()
    }

    /// Deduct a fee.
    pub fn charge(&mut self, amount: f64) -> Result<()> {
        if self.money < amount {
            return Err(ArenaError::InsufficientFunds {
                required: amount,
                available: self.money,
            });
        }
        self.money -= amount;
        Ok(())
    }

    /// Give a fee back.
    pub fn refund(&mut self, amount: f64) {
        self.money += amount;
    }

    /// Apply a tournament win at `level`.
    ///
    /// The high-water mark only moves up.
    pub fn credit(&mut self, reward: &Reward, level: u32) {
        self.money += f64::from(reward.money);
        self.packs += reward.packs;
        if self.highest_tournament_won.map_or(true, |highest| level > highest) {
            self.highest_tournament_won = Some(level);
        }
        info!(level, money = reward.money, packs = reward.packs, "tournament reward credited");
    }

    /// Open one pack into the collection.
    ///
    /// Returns the new cards, or `None` if no pack is left.
    pub fn open_pack(&mut self, generator: &CardGenerator, rng: &mut GameRng) -> Option<Vec<CardRecord>> {
        if self.packs == 0 {
            return None;
        }
        self.packs -= 1;

        let cards: Vec<CardRecord> = generator
            .generate_pack(rng, DEFAULT_PACK_SIZE)
            .into_iter()
            .map(CardRecord::from)
            .collect();
        self.collection.extend(cards.iter().cloned());
        Some(cards)
    }
}
