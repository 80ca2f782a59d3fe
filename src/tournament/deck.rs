//! Choosing a tournament deck from the collection.
//!
//! The deck is a copy: nothing that happens in a tournament touches the
//! collection. Copies get battle defaults for stats the collection record
//! lacks, so old saves without battle stats can still play.

use rustc_hash::FxHashSet;

use crate::cards::{CardRecord, CardType, Rarity};
use crate::core::{ArenaError, Result};

const DEFAULT_DECK_HP: f64 = 50.0;
const DEFAULT_DECK_ATTACK: f64 = 10.0;
const DEFAULT_DECK_NAME: &str = "Unknown Card";

/// Missing, zero or non-numeric counts as absent.
fn stat_or(value: Option<f64>, default: f64) -> f64 {
    value.filter(|v| v.is_finite() && *v != 0.0).unwrap_or(default)
}

/// Copy a collection card for deck use, filling battle defaults.
#[must_use]
pub fn deck_copy(card: &CardRecord) -> CardRecord {
    let mut copy = card.clone();
    copy.hp = Some(stat_or(card.hp, DEFAULT_DECK_HP));
    copy.max_hp = Some(stat_or(card.max_hp, DEFAULT_DECK_HP));
    copy.attack = Some(stat_or(card.attack, DEFAULT_DECK_ATTACK));
    if copy.card_type.as_deref().map_or(true, str::is_empty) {
        copy.card_type = Some(CardType::Nature.name().to_string());
    }
    if copy.rarity.as_deref().map_or(true, str::is_empty) {
        copy.rarity = Some(Rarity::Common.name().to_string());
    }
    if !copy.has_name() {
        copy.name = Some(DEFAULT_DECK_NAME.to_string());
    }
    copy
}

/// Pick exactly `deck_size` distinct collection cards by id, in the given
/// order.
///
/// ```
/// use tcg_arena::cards::CardRecord;
/// use tcg_arena::tournament::select_deck;
///
/// let collection = vec![
///     CardRecord::new("a", "Dark Mage"),
///     CardRecord::new("b", "Aqua Golem"),
///     CardRecord::new("c", "Cosmic Beast"),
/// ];
///
/// let deck = select_deck(&collection, &["c", "a"], 2).unwrap();
/// assert_eq!(deck[0].id.as_deref(), Some("c"));
/// assert_eq!(deck[0].attack, Some(10.0));
/// assert!(select_deck(&collection, &["a"], 2).is_err());
/// ```
pub fn select_deck(collection: &[CardRecord], ids: &[&str], deck_size: usize) -> Result<Vec<CardRecord>> {
    if ids.len() != deck_size {
        return Err(ArenaError::InvalidDeck(format!(
            "select exactly {} cards (got {})",
            deck_size,
            ids.len()
        )));
    }

    let mut seen = FxHashSet::default();
    ids.iter()
        .map(|&id| {
            if !seen.insert(id) {
                return Err(ArenaError::InvalidDeck(format!("card {} selected twice", id)));
            }
            collection
                .iter()
                .find(|card| card.id.as_deref() == Some(id))
                .map(deck_copy)
                .ok_or_else(|| ArenaError::InvalidDeck(format!("card {} is not in the collection", id)))
        })
        .collect()
}
