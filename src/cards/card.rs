//! Battle-ready cards.
//!
//! `Card` is the strongly typed card a battle operates on. Its type is
//! always one of the fixed set and its stats are plain integers, so the
//! only defects left to check at battle time are identity (id, name) and
//! the `hp <= max_hp` bound.
//!
//! Cards arriving from storage come in as `CardRecord` and are turned into
//! `Card`s by the validator.

use serde::{Deserialize, Serialize};

use super::ability::{AbilityEffect, SpecialAbility};
use super::types::{CardType, Rarity};
use crate::core::GameRng;

/// Unique card identifier.
///
/// Identity is by id: a battle removes a defeated card from its deck by
/// matching ids, never by position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub String);

impl CardId {
    /// Create a card id from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random id with the given prefix.
    ///
    /// ```
    /// use tcg_arena::cards::CardId;
    /// use tcg_arena::core::GameRng;
    ///
    /// let mut rng = GameRng::new(1);
    /// let id = CardId::generate("opponent", &mut rng);
    /// assert!(id.as_str().starts_with("opponent-"));
    /// ```
    pub fn generate(prefix: &str, rng: &mut GameRng) -> Self {
        Self(format!("{}-{:012x}", prefix, rng.next_u64() >> 16))
    }

    /// Get the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id is blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A collectible card with battle stats.
///
/// ## Example
///
/// ```
/// use tcg_arena::cards::{Card, CardType, Rarity, SpecialAbility};
///
/// let card = Card::new("c-1", "Fiery Phoenix", CardType::Fire, Rarity::Rare)
///     .with_stats(60, 15)
///     .with_ability(SpecialAbility::sharpness());
///
/// assert_eq!(card.hp, 60);
/// assert_eq!(card.max_hp, 60);
/// assert!(card.special_ability.is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Unique, immutable identifier.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Elemental type. May change in battle through Type Shift.
    #[serde(rename = "type")]
    pub card_type: CardType,

    /// Rarity tier.
    pub rarity: Rarity,

    /// Current HP, never above `max_hp`.
    pub hp: u32,

    /// Maximum HP.
    pub max_hp: u32,

    /// Base attack.
    pub attack: u32,

    /// Optional special ability.
    #[serde(default)]
    pub special_ability: Option<SpecialAbility>,

    /// Market value in dollars, used outside battle.
    #[serde(default)]
    pub value: f64,
}

impl Card {
    /// Create a card with placeholder stats (1 HP, 0 attack).
    pub fn new(id: impl Into<String>, name: impl Into<String>, card_type: CardType, rarity: Rarity) -> Self {
        Self {
            id: CardId::new(id),
            name: name.into(),
            card_type,
            rarity,
            hp: 1,
            max_hp: 1,
            attack: 0,
            special_ability: None,
            value: 0.0,
        }
    }

    /// Set full HP and attack (builder pattern).
    #[must_use]
    pub fn with_stats(mut self, hp: u32, attack: u32) -> Self {
        self.hp = hp;
        self.max_hp = hp;
        self.attack = attack;
        self
    }

    /// Set the special ability (builder pattern).
    #[must_use]
    pub fn with_ability(mut self, ability: SpecialAbility) -> Self {
        self.special_ability = Some(ability);
        self
    }

    /// Set the market value (builder pattern).
    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// The ability's effect, if any.
    #[must_use]
    pub fn effect(&self) -> Option<AbilityEffect> {
        self.special_ability.as_ref().map(|a| a.effect)
    }

    /// Whether the card is out of the fight.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }

    /// Subtract damage, flooring HP at zero. Returns the HP lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.hp);
        self.hp -= lost;
        lost
    }

    /// Restore HP up to `max_hp`. Returns the HP actually gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let new_hp = self.max_hp.min(self.hp.saturating_add(amount));
        let gained = new_hp.saturating_sub(self.hp);
        self.hp = new_hp;
        gained
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Card {
        Card::new("c-1", "Aqua Serpent", CardType::Water, Rarity::Common).with_stats(40, 8)
    }

    #[test]
    fn test_card_id() {
        let id = CardId::new("abc");
        assert_eq!(id.as_str(), "abc");
        assert_eq!(format!("{}", id), "abc");
        assert!(CardId::new("  ").is_empty());
    }

    #[test]
    fn test_generated_ids_differ() {
        let mut rng = GameRng::new(11);
        let a = CardId::generate("card", &mut rng);
        let b = CardId::generate("card", &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn test_take_damage_floors_at_zero() {
        let mut card = sample();
        assert_eq!(card.take_damage(15), 15);
        assert_eq!(card.hp, 25);
        assert_eq!(card.take_damage(100), 25);
        assert_eq!(card.hp, 0);
        assert!(card.is_defeated());
    }

    #[test]
    fn test_heal_capped_at_max() {
        let mut card = sample();
        card.take_damage(5);
        assert_eq!(card.heal(10), 5);
        assert_eq!(card.hp, 40);
        assert_eq!(card.heal(10), 0);
    }

    #[test]
    fn test_effect() {
        assert_eq!(sample().effect(), None);
        let card = sample().with_ability(SpecialAbility::heal());
        assert_eq!(card.effect(), Some(AbilityEffect::Heal(10)));
    }

    #[test]
    fn test_serialization_field_names() {
        let card = sample().with_value(0.25);
        let json = serde_json::to_string(&card).unwrap();
        assert!(json.contains("\"maxHp\":40"));
        assert!(json.contains("\"type\":\"Water\""));

        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }
}
