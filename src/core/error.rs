//! Error types for arena operations.

use thiserror::Error;

/// Result type alias for arena operations.
pub type Result<T> = std::result::Result<T, ArenaError>;

/// Hard card validation failures.
///
/// A card failing with one of these cannot be identified, so it cannot be
/// repaired and must not enter a battle.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The card slot is empty.
    #[error("Card is undefined or null")]
    MissingCard,

    /// The card has no id.
    #[error("Card is missing an ID")]
    MissingId,

    /// The card has no name.
    #[error("Card is missing a name")]
    MissingName,
}

/// Errors that abort a tournament operation.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ArenaError {
    /// The player backed out of deck selection.
    #[error("Tournament cancelled - no deck provided")]
    Cancelled,

    /// The deck is empty or malformed.
    #[error("Invalid deck: {0}")]
    InvalidDeck(String),

    /// A card in the player deck failed hard validation.
    #[error("Invalid card at index {index}: {reason}")]
    Validation {
        /// Position of the card in the deck.
        index: usize,
        /// What was wrong with it.
        reason: ValidationError,
    },

    /// No opponent deck could be produced, even after a retry.
    #[error("Could not generate opponent deck")]
    OpponentGeneration,

    /// No tournament tier exists at this level.
    #[error("Unknown tournament level {0}")]
    UnknownTournament(u32),

    /// The previous level has not been won yet.
    #[error("Tournament level {0} is locked")]
    TournamentLocked(u32),

    /// Collection too small for the tier.
    #[error("You need at least {required} cards to enter this tournament (have {available})")]
    InsufficientCards {
        /// Minimum collection size.
        required: usize,
        /// Current collection size.
        available: usize,
    },

    /// Not enough money for the entry fee.
    #[error("You need ${required:.2} to enter this tournament (have ${available:.2})")]
    InsufficientFunds {
        /// Entry fee.
        required: f64,
        /// Current balance.
        available: f64,
    },

    /// A strategy-break reorder was not a permutation of the deck.
    #[error("Invalid deck order: {0}")]
    InvalidDeckOrder(String),

    /// No tournament is running.
    #[error("No active tournament")]
    NoActiveTournament,

    /// The operation is not allowed in the current tournament phase.
    #[error("Operation not allowed: {0}")]
    WrongPhase(&'static str),
}

impl ArenaError {
    /// Whether the caller must give the entry fee back.
    ///
    /// Cancellation and internal failures are refunded; a genuine loss is
    /// not an error and never reaches this path.
    #[must_use]
    pub fn refunds_entry(&self) -> bool {
        matches!(
            self,
            ArenaError::Cancelled
                | ArenaError::InvalidDeck(_)
                | ArenaError::Validation { .. }
                | ArenaError::OpponentGeneration
        )
    }
}
