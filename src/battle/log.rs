//! Battle narration.
//!
//! Every battle event is narrated as a human-readable line. UIs style the
//! lines by category, which is inferred from the text unless given
//! explicitly.
//!
//! ## Category Priority
//!
//! Substring checks run in a fixed order, first match wins:
//! 1. "super effective" → `SuperEffective`
//! 2. "not very effective" → `NotEffective`
//! 3. "ability", "healed", "shifted type", "Strike ability" → `Ability`
//! 4. "defeated" → `Defeat`
//! 5. "won the battle", "won the tournament" → `Victory`
//!
//! Anything else is `Info`.

use im::Vector;
use serde::{Deserialize, Serialize};

/// Styling category of a narration line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogCategory {
    Info,
    SuperEffective,
    NotEffective,
    Ability,
    Defeat,
    Victory,
}

impl LogCategory {
    /// Infer the category of a message from its text.
    ///
    /// ```
    /// use tcg_arena::battle::LogCategory;
    ///
    /// assert_eq!(
    ///     LogCategory::infer("It's super effective! (Fire vs Nature)"),
    ///     LogCategory::SuperEffective
    /// );
    /// assert_eq!(LogCategory::infer("Your Dark Mage is defeated!"), LogCategory::Defeat);
    /// assert_eq!(LogCategory::infer("You skipped your turn."), LogCategory::Info);
    /// ```
    #[must_use]
    pub fn infer(message: &str) -> Self {
        if message.contains("super effective") {
            LogCategory::SuperEffective
        } else if message.contains("not very effective") {
            LogCategory::NotEffective
        } else if ["ability", "healed", "shifted type", "Strike ability"]
            .iter()
            .any(|needle| message.contains(needle))
        {
            LogCategory::Ability
        } else if message.contains("defeated") {
            LogCategory::Defeat
        } else if message.contains("won the battle") || message.contains("won the tournament") {
            LogCategory::Victory
        } else {
            LogCategory::Info
        }
    }
}

/// One narration line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub message: String,
    pub category: LogCategory,
}

/// Sink for narration lines.
///
/// The damage resolver narrates through this trait so it can run against a
/// full `BattleLog` or a plain `Vec<String>` in tests.
pub trait Narrator {
    /// Record a line, inferring its category.
    fn narrate(&mut self, message: String);
}

impl Narrator for Vec<String> {
    fn narrate(&mut self, message: String) {
        self.push(message);
    }
}

/// Append-only narration log.
///
/// Backed by a persistent vector: `snapshot()` is O(1), so observers can
/// keep old views while the battle continues.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleLog {
    entries: Vector<LogEntry>,
}

impl BattleLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line with an inferred category.
    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        let category = LogCategory::infer(&message);
        self.entries.push_back(LogEntry { message, category });
    }

    /// Append a line with an explicit category.
    pub fn push_as(&mut self, message: impl Into<String>, category: LogCategory) {
        self.entries.push_back(LogEntry {
            message: message.into(),
            category,
        });
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Iterate message texts, oldest first.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.message.as_str())
    }

    /// Most recent line.
    #[must_use]
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Whether any line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.messages().any(|m| m.contains(needle))
    }

    /// Cheap copy of the current lines.
    #[must_use]
    pub fn snapshot(&self) -> Vector<LogEntry> {
        self.entries.clone()
    }

    /// Lines appended since an earlier length.
    pub fn since(&self, len: usize) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().skip(len)
    }
}

impl Narrator for BattleLog {
    fn narrate(&mut self, message: String) {
        self.push(message);
    }
}
