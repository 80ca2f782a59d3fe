//! Special abilities carried by rare cards and spells.
//!
//! Abilities persist flat, as `{name, description, effect, value}` with the
//! effect kind as a string. A stored ability with an unknown kind stays an
//! `AbilityRecord` until the validator drops it.

use serde::{Deserialize, Serialize};

use super::record::AbilityRecord;
use crate::core::GameRng;

/// What a special ability does, with its numeric parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AbilityEffect {
    /// Recover HP at the start of every turn.
    Heal(u32),
    /// Add flat damage to every attack.
    DamageBoost(u32),
    /// Change type to counter the opposing card.
    TypeShift,
    /// Reduce incoming damage by a flat amount.
    DamageReduce(u32),
    /// Attack a second time in the same turn.
    DoubleAttack,
}

impl AbilityEffect {
    /// Persisted effect-kind name.
    #[must_use]
    pub const fn kind(self) -> &'static str {
        match self {
            AbilityEffect::Heal(_) => "heal",
            AbilityEffect::DamageBoost(_) => "damage_boost",
            AbilityEffect::TypeShift => "type_shift",
            AbilityEffect::DamageReduce(_) => "damage_reduce",
            AbilityEffect::DoubleAttack => "double_attack",
        }
    }

    /// Numeric parameter (0 for parameterless effects).
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            AbilityEffect::Heal(v) | AbilityEffect::DamageBoost(v) | AbilityEffect::DamageReduce(v) => v,
            AbilityEffect::TypeShift | AbilityEffect::DoubleAttack => 0,
        }
    }

    /// Rebuild an effect from its persisted kind.
    ///
    /// A missing value takes the catalog default for that kind.
    #[must_use]
    pub fn from_kind(kind: &str, value: Option<u32>) -> Option<Self> {
        let effect = match kind {
            "heal" => AbilityEffect::Heal(value.unwrap_or(10)),
            "damage_boost" => AbilityEffect::DamageBoost(value.unwrap_or(5)),
            "type_shift" => AbilityEffect::TypeShift,
            "damage_reduce" => AbilityEffect::DamageReduce(value.unwrap_or(3)),
            "double_attack" => AbilityEffect::DoubleAttack,
            _ => return None,
        };
        Some(effect)
    }
}

/// A named special ability.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AbilityRecord", into = "AbilityRecord")]
pub struct SpecialAbility {
    /// Display name ("Heal", "Sharpness", ...).
    pub name: String,

    /// Short rules text.
    pub description: String,

    /// The effect and its parameter.
    pub effect: AbilityEffect,
}

impl SpecialAbility {
    /// Create a new ability.
    pub fn new(name: impl Into<String>, description: impl Into<String>, effect: AbilityEffect) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            effect,
        }
    }

    /// Recover 10 HP each turn.
    #[must_use]
    pub fn heal() -> Self {
        Self::new("Heal", "Recover 10 HP each turn", AbilityEffect::Heal(10))
    }

    /// Deal +5 damage on attacks.
    #[must_use]
    pub fn sharpness() -> Self {
        Self::new("Sharpness", "Deal +5 damage on attacks", AbilityEffect::DamageBoost(5))
    }

    /// Change type to counter opponent.
    #[must_use]
    pub fn type_shift() -> Self {
        Self::new("Type Shift", "Change type to counter opponent", AbilityEffect::TypeShift)
    }

    /// Reduce incoming damage by 3.
    #[must_use]
    pub fn shield() -> Self {
        Self::new("Shield", "Reduce incoming damage by 3", AbilityEffect::DamageReduce(3))
    }

    /// Attack twice in one turn.
    #[must_use]
    pub fn double_strike() -> Self {
        Self::new("Double Strike", "Attack twice in one turn", AbilityEffect::DoubleAttack)
    }

    /// The full ability catalog, in roll order.
    #[must_use]
    pub fn catalog() -> [SpecialAbility; 5] {
        [
            Self::heal(),
            Self::sharpness(),
            Self::type_shift(),
            Self::shield(),
            Self::double_strike(),
        ]
    }

    /// Roll a uniformly random ability from the catalog.
    pub fn random(rng: &mut GameRng) -> Self {
        let catalog = Self::catalog();
        let index = rng.gen_index(catalog.len());
        catalog.into_iter().nth(index).unwrap_or_else(Self::heal)
    }

    /// The catalog ability with the same effect kind, or a generic one.
    #[must_use]
    pub fn for_effect(effect: AbilityEffect) -> Self {
        let mut ability = Self::catalog()
            .into_iter()
            .find(|a| a.effect.kind() == effect.kind())
            .unwrap_or_else(Self::heal);
        ability.effect = effect;
        ability
    }
}

impl TryFrom<AbilityRecord> for SpecialAbility {
    type Error = String;

    fn try_from(record: AbilityRecord) -> Result<Self, Self::Error> {
        record.to_ability().ok_or_else(|| {
            format!(
                "unknown ability effect {:?}",
                record.effect.as_deref().unwrap_or_default()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog() {
        let catalog = SpecialAbility::catalog();
        let kinds: Vec<_> = catalog.iter().map(|a| a.effect.kind()).collect();
        assert_eq!(
            kinds,
            vec!["heal", "damage_boost", "type_shift", "damage_reduce", "double_attack"]
        );
        assert_eq!(catalog[0].effect.value(), 10);
        assert_eq!(catalog[1].effect.value(), 5);
        assert_eq!(catalog[3].effect.value(), 3);
    }

    #[test]
    fn test_random_is_from_catalog() {
        let mut rng = GameRng::new(5);
        let catalog = SpecialAbility::catalog();
        for _ in 0..20 {
            assert!(catalog.contains(&SpecialAbility::random(&mut rng)));
        }
    }

    #[test]
    fn test_from_kind() {
        assert_eq!(AbilityEffect::from_kind("heal", Some(4)), Some(AbilityEffect::Heal(4)));
        assert_eq!(AbilityEffect::from_kind("damage_boost", None), Some(AbilityEffect::DamageBoost(5)));
        assert_eq!(AbilityEffect::from_kind("type_shift", Some(9)), Some(AbilityEffect::TypeShift));
        assert_eq!(AbilityEffect::from_kind("teleport", Some(1)), None);
    }

    #[test]
    fn test_for_effect_keeps_value() {
        let ability = SpecialAbility::for_effect(AbilityEffect::DamageReduce(7));
        assert_eq!(ability.name, "Shield");
        assert_eq!(ability.effect, AbilityEffect::DamageReduce(7));
    }

    #[test]
    fn test_serialization() {
        let ability = SpecialAbility::shield();
        let json = serde_json::to_value(&ability).unwrap();
        assert_eq!(json["effect"], "damage_reduce");
        assert_eq!(json["value"], 3.0);
        let back: SpecialAbility = serde_json::from_value(json).unwrap();
        assert_eq!(back, ability);

        let unknown = r#"{"name":"Warp","description":"?","effect":"teleport","value":1}"#;
        assert!(serde_json::from_str::<SpecialAbility>(unknown).is_err());

        let shift = SpecialAbility::type_shift();
        let back: SpecialAbility =
            serde_json::from_str(&serde_json::to_string(&shift).unwrap()).unwrap();
        assert_eq!(back, shift);
    }
}
