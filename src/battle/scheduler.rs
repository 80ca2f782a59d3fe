//! Pending opponent turns.
//!
//! The opponent acts after a pacing delay. The battle does not sleep: it
//! records what should happen next in a `TurnScheduler`, and the driver
//! calls `Battle::run_pending()` once the delay has elapsed. At most one
//! turn is ever pending.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// What a pending turn will do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnKind {
    /// The opponent's regular attack.
    OpponentTurn,
    /// The opponent's second attack from Double Strike.
    OpponentFollowUp,
}

/// A turn waiting for its delay to elapse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTurn {
    pub kind: TurnKind,
    pub delay: Duration,
}

/// Holder for the single in-flight turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnScheduler {
    pending: Option<ScheduledTurn>,
}

impl TurnScheduler {
    /// Create an idle scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a turn.
    ///
    /// Returns `false` and leaves the existing turn in place if one is
    /// already pending.
    pub fn schedule(&mut self, kind: TurnKind, delay: Duration) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(ScheduledTurn { kind, delay });
        true
    }

    /// The pending turn, if any.
    #[must_use]
    pub fn pending(&self) -> Option<ScheduledTurn> {
        self.pending
    }

    /// Check if a turn is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Remove the pending turn so it can run.
    pub fn take(&mut self) -> Option<ScheduledTurn> {
        self.pending.take()
    }

    /// Drop the pending turn without running it.
    pub fn cancel(&mut self) -> Option<ScheduledTurn> {
        self.pending.take()
    }
}
