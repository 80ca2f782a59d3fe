//! Tournaments: tiers, opponents, rewards and the tournament driver.
//!
//! ## Key Types
//!
//! - `TournamentCatalog`: Tier listing and unlock rules
//! - `PlayerProfile`: Money, packs, collection and progression
//! - `Arena`: Runs one tournament at a time, battle by battle
//!
//! A tournament is a fixed number of battles against generated opponents.
//! Between battles the player gets one strategy choice: heal the team,
//! reorder the deck or skip.

pub mod catalog;
pub mod deck;
pub mod opponent;
pub mod orchestrator;
pub mod rewards;

pub use catalog::{player_strength, TournamentCatalog, TournamentListing};
pub use deck::{deck_copy, select_deck};
pub use opponent::{generate_opponent_card, generate_opponent_deck, roll_opponent_rarity, stat_multipliers};
pub use orchestrator::{Arena, Tournament, TournamentPhase};
pub use rewards::{PlayerProfile, Reward, TournamentResult};
