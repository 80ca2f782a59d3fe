//! Loosely typed card records.
//!
//! A `CardRecord` is a card as the storage layer hands it over: any field
//! may be missing, the type may be an unknown string and numbers may be
//! NaN. Records become battle `Card`s only through the validator, which
//! repairs what it can and rejects what it cannot identify.

use serde::{Deserialize, Serialize};

use super::ability::{AbilityEffect, SpecialAbility};
use super::card::Card;

/// A special ability as persisted: `{name, description, effect, value}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AbilityRecord {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Effect kind, e.g. `"heal"`.
    #[serde(default)]
    pub effect: Option<String>,

    #[serde(default)]
    pub value: Option<f64>,
}

impl AbilityRecord {
    /// Resolve to a typed ability, or `None` if the effect kind is unknown.
    ///
    /// Missing names and descriptions come from the catalog; a missing or
    /// non-finite value takes the catalog default.
    #[must_use]
    pub fn to_ability(&self) -> Option<SpecialAbility> {
        let value = self
            .value
            .filter(|v| v.is_finite())
            .map(|v| v.max(0.0).floor() as u32);
        let effect = AbilityEffect::from_kind(self.effect.as_deref()?, value)?;

        let mut ability = SpecialAbility::for_effect(effect);
        if let Some(name) = self.name.as_deref().filter(|n| !n.trim().is_empty()) {
            ability.name = name.to_string();
        }
        if let Some(description) = &self.description {
            ability.description = description.clone();
        }
        Some(ability)
    }
}

impl From<SpecialAbility> for AbilityRecord {
    fn from(ability: SpecialAbility) -> Self {
        Self {
            value: Some(f64::from(ability.effect.value())),
            effect: Some(ability.effect.kind().to_string()),
            name: Some(ability.name),
            description: Some(ability.description),
        }
    }
}

/// A card as persisted, with every field optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, rename = "type")]
    pub card_type: Option<String>,

    #[serde(default)]
    pub rarity: Option<String>,

    #[serde(default)]
    pub hp: Option<f64>,

    #[serde(default)]
    pub max_hp: Option<f64>,

    #[serde(default)]
    pub attack: Option<f64>,

    #[serde(default)]
    pub special_ability: Option<AbilityRecord>,

    #[serde(default)]
    pub value: Option<f64>,
}

impl CardRecord {
    /// Create an empty record with an id and a name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the type spelling (builder pattern).
    #[must_use]
    pub fn with_type(mut self, card_type: impl Into<String>) -> Self {
        self.card_type = Some(card_type.into());
        self
    }

    /// Set HP, max HP and attack (builder pattern).
    #[must_use]
    pub fn with_stats(mut self, hp: f64, max_hp: f64, attack: f64) -> Self {
        self.hp = Some(hp);
        self.max_hp = Some(max_hp);
        self.attack = Some(attack);
        self
    }

    /// Set the ability (builder pattern).
    #[must_use]
    pub fn with_ability(mut self, ability: SpecialAbility) -> Self {
        self.special_ability = Some(ability.into());
        self
    }

    /// Whether the id is present and non-blank.
    #[must_use]
    pub fn has_id(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.trim().is_empty())
    }

    /// Whether the name is present and non-blank.
    #[must_use]
    pub fn has_name(&self) -> bool {
        self.name.as_deref().is_some_and(|name| !name.trim().is_empty())
    }
}

impl From<&Card> for CardRecord {
    fn from(card: &Card) -> Self {
        Self {
            id: Some(card.id.0.clone()),
            name: Some(card.name.clone()),
            card_type: Some(card.card_type.name().to_string()),
            rarity: Some(card.rarity.name().to_string()),
            hp: Some(f64::from(card.hp)),
            max_hp: Some(f64::from(card.max_hp)),
            attack: Some(f64::from(card.attack)),
            special_ability: card.special_ability.clone().map(AbilityRecord::from),
            value: Some(card.value),
        }
    }
}

impl From<Card> for CardRecord {
    fn from(card: Card) -> Self {
        Self::from(&card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardType, Rarity};

    #[test]
    fn test_identity_checks() {
        assert!(CardRecord::new("a", "b").has_id());
        assert!(!CardRecord::new("", "b").has_id());
        assert!(!CardRecord::new("a", " ").has_name());
        assert!(!CardRecord::default().has_id());
    }

    #[test]
    fn test_from_card() {
        let card = Card::new("c-9", "Cosmic Golem", CardType::Spell, Rarity::Rare).with_stats(45, 12);
        let record = CardRecord::from(&card);

        assert_eq!(record.id.as_deref(), Some("c-9"));
        assert_eq!(record.card_type.as_deref(), Some("Spell"));
        assert_eq!(record.rarity.as_deref(), Some("rare"));
        assert_eq!(record.max_hp, Some(45.0));
    }

    #[test]
    fn test_deserialize_partial() {
        let json = r#"{"id":"x1","name":"Dark Mage","type":"Plasma","attack":7}"#;
        let record: CardRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.card_type.as_deref(), Some("Plasma"));
        assert_eq!(record.attack, Some(7.0));
        assert_eq!(record.hp, None);
        assert_eq!(record.special_ability, None);
    }

    #[test]
    fn test_deserialize_flat_ability() {
        let json = r#"{
            "id": "a",
            "name": "Aqua Mage",
            "type": "Water",
            "specialAbility": {"name": "Heal", "description": "Recover 10 HP each turn", "effect": "heal", "value": 10}
        }"#;
        let record: CardRecord = serde_json::from_str(json).unwrap();
        let ability = record.special_ability.unwrap().to_ability().unwrap();
        assert_eq!(ability, SpecialAbility::heal());
    }

    #[test]
    fn test_unknown_effect_still_loads() {
        let json = r#"{"id":"b","name":"Dark Mage","specialAbility":{"name":"Warp","effect":"teleport","value":2}}"#;
        let record: CardRecord = serde_json::from_str(json).unwrap();
        let ability = record.special_ability.unwrap();
        assert_eq!(ability.effect.as_deref(), Some("teleport"));
        assert_eq!(ability.to_ability(), None);
    }

    #[test]
    fn test_ability_record_defaults() {
        let record = AbilityRecord {
            effect: Some("damage_boost".into()),
            value: Some(f64::NAN),
            ..AbilityRecord::default()
        };
        let ability = record.to_ability().unwrap();
        assert_eq!(ability.name, "Sharpness");
        assert_eq!(ability.effect, AbilityEffect::DamageBoost(5));
    }
}
