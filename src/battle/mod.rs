//! Battle system: validation, damage, narration and the turn engine.
//!
//! ## Key Types
//!
//! - `ValidationReport`: Outcome of validating or repairing a card
//! - `TypeModifier` / `compute_damage`: Single-attack damage resolution
//! - `BattleLog`: Categorized narration stream
//! - `TurnScheduler`: The single pending opponent turn
//! - `Battle`: The battle state machine
//!
//! ## Driving a Battle
//!
//! A battle never blocks. After each player action, check
//! `Battle::pending_turn()`; when one is pending, wait its delay and call
//! `Battle::run_pending()`.

pub mod damage;
pub mod engine;
pub mod log;
pub mod scheduler;
pub mod validator;

pub use damage::{compute_damage, TypeModifier, MIN_DAMAGE};
pub use engine::{ActionOutcome, Battle, BattleOutcome, BattleParts, BattlePhase};
pub use log::{BattleLog, LogCategory, LogEntry, Narrator};
pub use scheduler::{ScheduledTurn, TurnKind, TurnScheduler};
pub use validator::{
    check_card, repair, validate_card, validate_record, validate_slot, ValidationReport, VALID_REASON,
};
