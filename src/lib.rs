//! # tcg-arena
//!
//! Battle and tournament engine for a trading-card idle game.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Every random decision goes through a seeded
//!    `GameRng`, so a battle or tournament replays exactly under a seed.
//!
//! 2. **Never Blocks**: Opponent turns are scheduled, not awaited. The
//!    caller decides when a pending turn runs.
//!
//! 3. **Repair Over Reject**: Cards with bad stats are repaired and
//!    reported. Only a card that cannot be identified is refused.
//!
//! ## Modules
//!
//! - `core`: Battle seats, RNG, configuration, errors
//! - `cards`: Card model, loose card records, card generation
//! - `battle`: Validation, damage, narration and the battle state machine
//! - `tournament`: Tiers, opponents, rewards and the tournament driver

pub mod core;
pub mod cards;
pub mod battle;
pub mod tournament;

// Re-export commonly used types
pub use crate::core::{
    Side, SideMap,
    GameRng, GameRngState,
    ArenaConfig, TournamentTier,
    ArenaError, Result, ValidationError,
};

pub use crate::cards::{
    AbilityEffect, AbilityRecord, SpecialAbility,
    Card, CardId, CardRecord, CardType, Rarity,
    CardGenerator,
};

pub use crate::battle::{
    compute_damage, TypeModifier,
    ActionOutcome, Battle, BattleOutcome, BattlePhase,
    BattleLog, LogCategory, LogEntry,
    ScheduledTurn, TurnKind,
    repair, validate_card, validate_record, ValidationReport,
};

pub use crate::tournament::{
    Arena, Tournament, TournamentPhase,
    TournamentCatalog, TournamentListing,
    PlayerProfile, Reward, TournamentResult,
    select_deck,
};
