//! Arena configuration.
//!
//! All tunable constants of the battle and tournament rules live here:
//! - `TournamentTier`: entry requirements, battle count and rewards per level
//! - `ArenaConfig`: tiers plus repair defaults, pacing delays and deck sizes
//!
//! `ArenaConfig::default()` reproduces the shipped game balance. Callers that
//! want different balance build on it with the `with_*` methods.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One tournament difficulty tier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TournamentTier {
    /// Display name.
    pub name: String,

    /// Minimum collection size to enter.
    pub min_cards: usize,

    /// Entry fee charged by the caller before the tournament starts.
    pub entry_fee: f64,

    /// Lower bound of the money reward (inclusive).
    pub reward_min: u32,

    /// Upper bound of the money reward (inclusive).
    pub reward_max: u32,

    /// Card packs awarded on a win.
    pub pack_reward: u32,

    /// Battles that must be won in sequence.
    pub battles_required: u32,

    /// Cards the player brings into the tournament.
    pub deck_size: usize,

    /// Relative difficulty, informational only.
    pub difficulty: f64,
}

impl TournamentTier {
    /// Create a tier with the given name and requirements.
    pub fn new(name: impl Into<String>, min_cards: usize, entry_fee: f64) -> Self {
        Self {
            name: name.into(),
            min_cards,
            entry_fee,
            reward_min: 15,
            reward_max: 30,
            pack_reward: 1,
            battles_required: 2,
            deck_size: 3,
            difficulty: 0.0,
        }
    }

    /// Set the money reward range.
    #[must_use]
    pub fn with_reward(mut self, min: u32, max: u32, packs: u32) -> Self {
        self.reward_min = min;
        self.reward_max = max;
        self.pack_reward = packs;
        self
    }

    /// Set the number of battles.
    #[must_use]
    pub fn with_battles(mut self, battles: u32) -> Self {
        self.battles_required = battles;
        self
    }

    /// Set the deck size.
    #[must_use]
    pub fn with_deck_size(mut self, size: usize) -> Self {
        self.deck_size = size;
        self
    }

    /// Set the informational difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: f64) -> Self {
        self.difficulty = difficulty;
        self
    }
}

/// Complete arena configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Tournament tiers, indexed by level.
    pub tiers: Vec<TournamentTier>,

    /// Attack assigned to a card whose attack is missing or not a number.
    pub default_attack: u32,

    /// HP (and max HP) assigned to a card whose HP is missing or not a number.
    pub default_hp: u32,

    /// Pause before the opponent acts.
    pub ai_turn_delay: Duration,

    /// Pause before a chained Double Strike attack.
    pub double_strike_delay: Duration,

    /// Cards in every generated opponent deck.
    pub opponent_deck_size: usize,

    /// Percentage of max HP restored by the strategy-break team heal.
    pub team_heal_percent: u32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            tiers: vec![
                TournamentTier::new("Local Club", 20, 10.0)
                    .with_reward(15, 30, 1)
                    .with_battles(2)
                    .with_deck_size(3)
                    .with_difficulty(0.3),
                TournamentTier::new("Regional Tournament", 60, 50.0)
                    .with_reward(75, 150, 3)
                    .with_battles(3)
                    .with_deck_size(4)
                    .with_difficulty(0.6),
                TournamentTier::new("National Championship", 100, 100.0)
                    .with_reward(150, 300, 5)
                    .with_battles(4)
                    .with_deck_size(4)
                    .with_difficulty(0.7),
            ],
            default_attack: 5,
            default_hp: 30,
            ai_turn_delay: Duration::from_millis(1000),
            double_strike_delay: Duration::from_millis(800),
            opponent_deck_size: 3,
            team_heal_percent: 20,
        }
    }
}

impl ArenaConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all tiers.
    #[must_use]
    pub fn with_tiers(mut self, tiers: Vec<TournamentTier>) -> Self {
        self.tiers = tiers;
        self
    }

    /// Set the repair defaults.
    #[must_use]
    pub fn with_repair_defaults(mut self, attack: u32, hp: u32) -> Self {
        self.default_attack = attack;
        self.default_hp = hp;
        self
    }

    /// Set the opponent pacing delays.
    #[must_use]
    pub fn with_delays(mut self, ai_turn: Duration, double_strike: Duration) -> Self {
        self.ai_turn_delay = ai_turn;
        self.double_strike_delay = double_strike;
        self
    }

    /// Set the opponent deck size.
    #[must_use]
    pub fn with_opponent_deck_size(mut self, size: usize) -> Self {
        self.opponent_deck_size = size;
        self
    }

    /// Get the tier at a level, if it exists.
    #[must_use]
    pub fn tier(&self, level: u32) -> Option<&TournamentTier> {
        self.tiers.get(level as usize)
    }

    /// Get the tier at a level, falling back to the first tier.
    ///
    /// Unknown levels play by the entry-level rules: two battles, entry-level
    /// rewards and a single pack.
    #[must_use]
    pub fn tier_or_default(&self, level: u32) -> TournamentTier {
        self.tier(level)
            .or_else(|| self.tiers.first())
            .cloned()
            .unwrap_or_else(|| TournamentTier::new("Tournament", 0, 0.0))
    }

    /// Battles required at a level: 2/3/4 for tiers 0/1/2, otherwise 2.
    #[must_use]
    pub fn battles_required(&self, level: u32) -> u32 {
        self.tier_or_default(level).battles_required
    }
}
