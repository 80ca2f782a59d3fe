//! Core types: battle seats, RNG, configuration, errors.
//!
//! This module contains the building blocks shared by the card model,
//! the battle engine and the tournament orchestrator.

pub mod side;
pub mod rng;
pub mod config;
pub mod error;

pub use side::{Side, SideMap};
pub use rng::{GameRng, GameRngState};
pub use config::{ArenaConfig, TournamentTier};
pub use error::{ArenaError, Result, ValidationError};
