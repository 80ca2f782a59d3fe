//! Damage resolution for a single attack.
//!
//! ## Order of Operations
//!
//! 1. Hard-check both cards; an unidentifiable card takes or deals 1
//! 2. Base damage = attacker's attack
//! 3. Type modifier (×1.5 or ×0.5, floored)
//! 4. Attacker's damage boost
//! 5. Defender's damage reduction (never below zero on its own)
//! 6. Clamp to a minimum of 1
//!
//! The order is fixed. Flooring the type modifier before adding flat
//! bonuses changes results, e.g. attack 5 vs a resisting type gives
//! `floor(5 × 0.5) + 5 = 7`, not `floor(10 × 0.5) = 5`.

use tracing::warn;

use super::log::Narrator;
use super::validator::check_card;
use crate::cards::{AbilityEffect, Card, CardType};

/// Minimum damage any attack deals.
pub const MIN_DAMAGE: u32 = 1;

/// Type matchup between attacker and defender.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeModifier {
    /// ×1.5
    SuperEffective,
    /// ×0.5
    NotEffective,
    /// ×1
    Neutral,
}

impl TypeModifier {
    /// Matchup for an attack from `attacker` into `defender`.
    ///
    /// Dragon into Dragon is checked first and is super effective.
    #[must_use]
    pub fn between(attacker: CardType, defender: CardType) -> Self {
        let dragon_mirror = attacker == CardType::Dragon && defender == CardType::Dragon;
        if dragon_mirror || attacker.has_advantage_over(defender) {
            TypeModifier::SuperEffective
        } else if defender.has_advantage_over(attacker) {
            TypeModifier::NotEffective
        } else {
            TypeModifier::Neutral
        }
    }

    /// Damage multiplier.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            TypeModifier::SuperEffective => 1.5,
            TypeModifier::NotEffective => 0.5,
            TypeModifier::Neutral => 1.0,
        }
    }

    /// Apply to a damage value, flooring.
    #[must_use]
    pub fn apply(self, damage: u32) -> u32 {
        (f64::from(damage) * self.multiplier()).floor() as u32
    }
}

/// Compute the damage `attacker` deals to `defender`, narrating modifiers.
///
/// Always returns at least `MIN_DAMAGE`.
///
/// ```
/// use tcg_arena::battle::compute_damage;
/// use tcg_arena::cards::{Card, CardType, Rarity};
///
/// let fire = Card::new("a", "Fiery Mage", CardType::Fire, Rarity::Common).with_stats(40, 10);
/// let nature = Card::new("b", "Savage Beast", CardType::Nature, Rarity::Common).with_stats(40, 8);
///
/// let mut lines = Vec::new();
/// assert_eq!(compute_damage(&fire, &nature, &mut lines), 15);
/// assert_eq!(lines, vec!["It's super effective! (Fire vs Nature)".to_string()]);
/// ```
pub fn compute_damage<N: Narrator + ?Sized>(attacker: &Card, defender: &Card, log: &mut N) -> u32 {
    if let Err(error) = check_card(attacker) {
        warn!(%error, "invalid attacker, dealing minimum damage");
        return MIN_DAMAGE;
    }
    if let Err(error) = check_card(defender) {
        warn!(%error, "invalid defender, dealing minimum damage");
        return MIN_DAMAGE;
    }

    let modifier = TypeModifier::between(attacker.card_type, defender.card_type);
    let mut damage = modifier.apply(attacker.attack);
    match modifier {
        TypeModifier::SuperEffective => log.narrate(format!(
            "It's super effective! ({} vs {})",
            attacker.card_type, defender.card_type
        )),
        TypeModifier::NotEffective => log.narrate(format!(
            "It's not very effective... ({} vs {})",
            attacker.card_type, defender.card_type
        )),
        TypeModifier::Neutral => {}
    }

    if let Some(ability) = &attacker.special_ability {
        if let AbilityEffect::DamageBoost(bonus) = ability.effect {
            damage = damage.saturating_add(bonus);
            log.narrate(format!("{}'s {} adds {} damage!", attacker.name, ability.name, bonus));
        }
    }

    if let Some(ability) = &defender.special_ability {
        if let AbilityEffect::DamageReduce(value) = ability.effect {
            let reduction = damage.min(value);
            damage -= reduction;
            log.narrate(format!(
                "{}'s {} reduces damage by {}!",
                defender.name, ability.name, reduction
            ));
        }
    }

    damage.max(MIN_DAMAGE)
}
