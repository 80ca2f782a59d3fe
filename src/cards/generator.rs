//! Random card generation for packs and opponents.
//!
//! ## Generation Rules
//!
//! 1. Roll a rarity by weight (improved odds scale non-common weights by 1.5)
//! 2. Roll HP and attack inside the rarity's ranges; rare and above roll an ability
//! 3. Pick a uniformly random type
//! 4. Apply the type adjustment: Dragons get ×1.2 HP and attack, Spells get
//!    ×0.8 HP and ×0.9 attack and always carry an ability
//!
//! Every multiplication floors to an integer immediately.

use super::ability::SpecialAbility;
use super::card::{Card, CardId};
use super::types::{CardType, Rarity};
use crate::core::GameRng;

const NAME_PREFIXES: [&str; 10] = [
    "Dark", "Mystic", "Ancient", "Fiery", "Aqua", "Elemental", "Cosmic", "Savage", "Enchanted", "Spectral",
];

const NAME_SUFFIXES: [&str; 10] = [
    "Warrior", "Dragon", "Wizard", "Phoenix", "Serpent", "Knight", "Paladin", "Mage", "Beast", "Golem",
];

/// Pack size used when none is given.
pub const DEFAULT_PACK_SIZE: usize = 5;

const ID_PREFIX: &str = "card";

/// Floor `value * factor` to an integer.
pub(crate) fn scale(value: u32, factor: f64) -> u32 {
    (f64::from(value) * factor).floor() as u32
}

/// Base battle stats rolled for a rarity.
#[derive(Clone, Debug, PartialEq)]
pub struct RolledStats {
    pub hp: u32,
    pub attack: u32,
    pub ability: Option<SpecialAbility>,
}

impl RolledStats {
    /// Roll HP, attack and (for rare and above) an ability.
    pub fn roll(rarity: Rarity, rng: &mut GameRng) -> Self {
        let (hp_min, hp_max) = rarity.hp_range();
        let (atk_min, atk_max) = rarity.attack_range();
        let hp = rng.gen_range_inclusive(hp_min, hp_max);
        let attack = rng.gen_range_inclusive(atk_min, atk_max);
        let ability = rarity.grants_ability().then(|| SpecialAbility::random(rng));

        Self { hp, attack, ability }
    }

    /// Apply the per-type stat adjustment.
    #[must_use]
    pub fn adjusted_for(mut self, card_type: CardType, rng: &mut GameRng) -> Self {
        match card_type {
            CardType::Dragon => {
                self.hp = scale(self.hp, 1.2);
                self.attack = scale(self.attack, 1.2);
            }
            CardType::Spell => {
                self.hp = scale(self.hp, 0.8);
                self.attack = scale(self.attack, 0.9);
                if self.ability.is_none() {
                    self.ability = Some(SpecialAbility::random(rng));
                }
            }
            _ => {}
        }
        self
    }
}

/// Roll a rarity by pack weight.
pub fn roll_rarity(rng: &mut GameRng, improved_odds: bool) -> Rarity {
    let weights: Vec<f64> = Rarity::ALL
        .iter()
        .map(|&r| {
            if improved_odds && r != Rarity::Common {
                r.weight() * 1.5
            } else {
                r.weight()
            }
        })
        .collect();

    rng.choose_weighted(&weights)
        .map_or(Rarity::Common, |i| Rarity::ALL[i])
}

/// Random "Prefix Suffix" card name.
pub fn random_name(rng: &mut GameRng) -> String {
    let prefix = NAME_PREFIXES[rng.gen_index(NAME_PREFIXES.len())];
    let suffix = NAME_SUFFIXES[rng.gen_index(NAME_SUFFIXES.len())];
    format!("{} {}", prefix, suffix)
}

/// Random market value inside the rarity's range, in dollars.
pub fn random_value(rarity: Rarity, rng: &mut GameRng) -> f64 {
    let (min, max) = rarity.value_cents();
    f64::from(rng.gen_range_inclusive(min, max)) / 100.0
}

/// Generates collectible cards for packs.
///
/// ## Example
///
/// ```
/// use tcg_arena::cards::CardGenerator;
/// use tcg_arena::core::GameRng;
///
/// let mut rng = GameRng::new(42);
/// let pack = CardGenerator::new().generate_pack(&mut rng, 5);
///
/// assert_eq!(pack.len(), 5);
/// assert!(pack.iter().all(|c| c.hp == c.max_hp));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardGenerator {
    improved_odds: bool,
}

impl CardGenerator {
    /// Create a generator with standard odds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the better-packs odds boost.
    #[must_use]
    pub fn with_improved_odds(mut self, improved: bool) -> Self {
        self.improved_odds = improved;
        self
    }

    /// Generate one random card at full HP.
    pub fn generate_card(&self, rng: &mut GameRng) -> Card {
        let rarity = roll_rarity(rng, self.improved_odds);
        let name = random_name(rng);
        let card_type = CardType::random(rng);
        let value = random_value(rarity, rng);
        let stats = RolledStats::roll(rarity, rng).adjusted_for(card_type, rng);

        Card {
            id: CardId::generate(ID_PREFIX, rng),
            name,
            card_type,
            rarity,
            hp: stats.hp,
            max_hp: stats.hp,
            attack: stats.attack,
            special_ability: stats.ability,
            value,
        }
    }

    /// Generate a pack of `size` cards.
    pub fn generate_pack(&self, rng: &mut GameRng, size: usize) -> Vec<Card> {
        (0..size).map(|_| self.generate_card(rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_floors() {
        assert_eq!(scale(45, 1.2), 54);
        assert_eq!(scale(37, 0.9), 33);
        assert_eq!(scale(41, 0.8), 32);
    }

    #[test]
    fn test_rolled_stats_in_range() {
        let mut rng = GameRng::new(8);
        for rarity in Rarity::ALL {
            for _ in 0..30 {
                let stats = RolledStats::roll(rarity, &mut rng);
                let (hp_min, hp_max) = rarity.hp_range();
                let (atk_min, atk_max) = rarity.attack_range();
                assert!((hp_min..=hp_max).contains(&stats.hp));
                assert!((atk_min..=atk_max).contains(&stats.attack));
                assert_eq!(stats.ability.is_some(), rarity.grants_ability());
            }
        }
    }

    #[test]
    fn test_spell_always_has_ability() {
        let mut rng = GameRng::new(2);
        let stats = RolledStats {
            hp: 50,
            attack: 10,
            ability: None,
        }
        .adjusted_for(CardType::Spell, &mut rng);

        assert_eq!(stats.hp, 40);
        assert_eq!(stats.attack, 9);
        assert!(stats.ability.is_some());
    }

    #[test]
    fn test_dragon_boost() {
        let mut rng = GameRng::new(2);
        let stats = RolledStats {
            hp: 50,
            attack: 10,
            ability: None,
        }
        .adjusted_for(CardType::Dragon, &mut rng);

        assert_eq!((stats.hp, stats.attack), (60, 12));
        assert!(stats.ability.is_none());
    }

    #[test]
    fn test_generated_cards_are_consistent() {
        let mut rng = GameRng::new(77);
        let generator = CardGenerator::new();

        for card in generator.generate_pack(&mut rng, 200) {
            assert_eq!(card.hp, card.max_hp);
            assert!(card.hp > 0);
            let (min, max) = card.rarity.value_cents();
            assert!(card.value >= f64::from(min) / 100.0 && card.value <= f64::from(max) / 100.0);
            if card.card_type == CardType::Spell || card.rarity.grants_ability() {
                assert!(card.special_ability.is_some());
            }
            assert!(card.id.as_str().starts_with("card-"));
        }
    }

    #[test]
    fn test_improved_odds_shift_rarity() {
        let mut rng = GameRng::new(5);
        let normal = (0..2000)
            .filter(|_| roll_rarity(&mut rng, false) != Rarity::Common)
            .count();
        let improved = (0..2000)
            .filter(|_| roll_rarity(&mut rng, true) != Rarity::Common)
            .count();
        assert!(improved > normal);
    }

    #[test]
    fn test_improved_odds_generator() {
        let mut rng = GameRng::new(9);
        let generator = CardGenerator::new().with_improved_odds(true);
        let rare = generator
            .generate_pack(&mut rng, 500)
            .iter()
            .filter(|c| c.rarity != Rarity::Common)
            .count();
        assert!(rare > 0);
    }

    #[test]
    fn test_random_name_shape() {
        let mut rng = GameRng::new(3);
        let name = random_name(&mut rng);
        let parts: Vec<_> = name.split(' ').collect();
        assert_eq!(parts.len(), 2);
        assert!(NAME_PREFIXES.contains(&parts[0]));
        assert!(NAME_SUFFIXES.contains(&parts[1]));
    }
}
