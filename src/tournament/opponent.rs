//! Opponent deck generation.
//!
//! Opponents get stronger with the tournament level and with each battle:
//!
//! ```text
//! stat = floor(base * (1 + level * 0.2) * (1 + (battle - 1) * 0.1))
//! ```
//!
//! Base stats are rolled from the same rarity ranges as pack cards, but the
//! rarity itself comes from a level-dependent table. The type adjustment
//! (Dragon, Spell) is applied after scaling.

use tracing::debug;

use crate::cards::generator::random_name;
use crate::cards::{Card, CardId, CardType, Rarity, RolledStats};
use crate::core::GameRng;

/// Rarity thresholds per level band, checked in order against a roll in
/// `[0, 1)`. The last entry catches everything else.
fn rarity_table(level: u32) -> &'static [(f64, Rarity)] {
    match level {
        0 => &[
            (0.1, Rarity::UltraRare),
            (0.3, Rarity::Rare),
            (0.7, Rarity::Uncommon),
            (1.0, Rarity::Common),
        ],
        1 => &[
            (0.05, Rarity::Legendary),
            (0.2, Rarity::UltraRare),
            (0.6, Rarity::Rare),
            (1.0, Rarity::Uncommon),
        ],
        2 => &[
            (0.1, Rarity::Legendary),
            (0.4, Rarity::UltraRare),
            (1.0, Rarity::Rare),
        ],
        _ => &[
            (0.3, Rarity::Legendary),
            (0.6, Rarity::UltraRare),
            (1.0, Rarity::Rare),
        ],
    }
}

/// Roll an opponent card's rarity for a tournament level.
pub fn roll_opponent_rarity(level: u32, rng: &mut GameRng) -> Rarity {
    let roll = rng.gen_f64();
    let table = rarity_table(level);
    table
        .iter()
        .find(|(threshold, _)| roll < *threshold)
        .or(table.last())
        .map_or(Rarity::Rare, |&(_, rarity)| rarity)
}

/// Level and battle stat multipliers. `battle` is 1-based.
#[must_use]
pub fn stat_multipliers(level: u32, battle: u32) -> (f64, f64) {
    let level_multiplier = 1.0 + f64::from(level) * 0.2;
    let battle_multiplier = 1.0 + f64::from(battle.saturating_sub(1)) * 0.1;
    (level_multiplier, battle_multiplier)
}

fn scale_stat(value: u32, level_multiplier: f64, battle_multiplier: f64) -> u32 {
    (f64::from(value) * level_multiplier * battle_multiplier).floor() as u32
}

/// Generate one opponent card of a given rarity.
pub fn generate_opponent_card(rarity: Rarity, level: u32, battle: u32, rng: &mut GameRng) -> Card {
    let (level_multiplier, battle_multiplier) = stat_multipliers(level, battle);

    let mut stats = RolledStats::roll(rarity, rng);
    stats.hp = scale_stat(stats.hp, level_multiplier, battle_multiplier);
    stats.attack = scale_stat(stats.attack, level_multiplier, battle_multiplier);

    let card_type = CardType::random(rng);
    let stats = stats.adjusted_for(card_type, rng);
    let name = format!("Opponent's {}", random_name(rng));

    Card {
        id: CardId::generate("opponent", rng),
        name,
        card_type,
        rarity,
        hp: stats.hp,
        max_hp: stats.hp,
        attack: stats.attack,
        special_ability: stats.ability,
        value: 0.0,
    }
}

/// Generate an opponent deck for a battle of a tournament.
pub fn generate_opponent_deck(level: u32, battle: u32, size: usize, rng: &mut GameRng) -> Vec<Card> {
    let deck: Vec<Card> = (0..size)
        .map(|_| {
            let rarity = roll_opponent_rarity(level, rng);
            generate_opponent_card(rarity, level, battle, rng)
        })
        .collect();

    debug!(level, battle, cards = deck.len(), "generated opponent deck");
    deck
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipliers() {
        assert_eq!(stat_multipliers(0, 1), (1.0, 1.0));
        let (l, b) = stat_multipliers(2, 3);
        assert!((l - 1.4).abs() < 1e-9);
        assert!((b - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_scaling_floors_once() {
        assert_eq!(scale_stat(50, 1.2, 1.1), 66);
        assert_eq!(scale_stat(33, 1.0, 1.1), 36);
    }

    #[test]
    fn test_rarity_bands() {
        let mut rng = GameRng::new(4);
        for _ in 0..300 {
            assert_ne!(roll_opponent_rarity(0, &mut rng), Rarity::Legendary);
            assert_ne!(roll_opponent_rarity(1, &mut rng), Rarity::Common);
            assert!(roll_opponent_rarity(2, &mut rng) >= Rarity::Rare);
            assert!(roll_opponent_rarity(5, &mut rng) >= Rarity::Rare);
        }
    }

    #[test]
    fn test_opponent_cards() {
        let mut rng = GameRng::new(12);
        let deck = generate_opponent_deck(1, 2, 3, &mut rng);

        assert_eq!(deck.len(), 3);
        for card in &deck {
            assert!(card.name.starts_with("Opponent's "));
            assert!(card.id.as_str().starts_with("opponent-"));
            assert_eq!(card.hp, card.max_hp);
            assert!(card.hp > 0);
            if card.card_type == CardType::Spell {
                assert!(card.special_ability.is_some());
            }
        }
    }

    #[test]
    fn test_level_zero_first_battle_within_base_ranges() {
        let mut rng = GameRng::new(21);
        for _ in 0..100 {
            let card = generate_opponent_card(Rarity::Common, 0, 1, &mut rng);
            let (lo, hi) = match card.card_type {
                CardType::Dragon => (36, 60),
                CardType::Spell => (24, 40),
                _ => (30, 50),
            };
            assert!((lo..=hi).contains(&card.hp), "{} hp {}", card.card_type, card.hp);
        }
    }

    #[test]
    fn test_empty_deck_size() {
        let mut rng = GameRng::new(1);
        assert!(generate_opponent_deck(0, 1, 0, &mut rng).is_empty());
    }
}
