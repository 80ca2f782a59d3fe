//! Card model: types, rarities, abilities and card generation.
//!
//! ## Key Types
//!
//! - `CardType`: Closed set of elemental types and the advantage graph
//! - `Rarity`: Stat ranges, value ranges and ability odds
//! - `SpecialAbility` / `AbilityEffect`: Tagged ability effects
//! - `Card`: Strongly typed battle card
//! - `CardRecord` / `AbilityRecord`: Loosely typed persisted card and ability, repaired by the validator
//! - `CardGenerator`: Pack and card generation
//!
//! ## Two Card Shapes
//!
//! Storage may hand over broken cards (unknown type strings, NaN stats), so
//! it deals in `CardRecord`. Everything past the validator deals in `Card`,
//! where those defects cannot be represented.

pub mod ability;
pub mod card;
pub mod generator;
pub mod record;
pub mod types;

pub use ability::{AbilityEffect, SpecialAbility};
pub use card::{Card, CardId};
pub use generator::{CardGenerator, RolledStats, DEFAULT_PACK_SIZE};
pub use record::{AbilityRecord, CardRecord};
pub use types::{CardType, Rarity};
