//! Tournament listing and unlock rules.
//!
//! Tier `i` is open to a player when their collection has at least the
//! tier's `min_cards` and `i <= highest_won + 1`. A player who has never
//! won a tournament can only enter tier 0.

use crate::cards::{CardRecord, Rarity};
use crate::core::{ArenaConfig, TournamentTier};

/// A tier together with its level index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TournamentListing<'a> {
    pub level: u32,
    pub tier: &'a TournamentTier,
}

/// Read-only view over the configured tiers.
#[derive(Clone, Copy, Debug)]
pub struct TournamentCatalog<'a> {
    tiers: &'a [TournamentTier],
}

impl<'a> TournamentCatalog<'a> {
    /// Create a catalog over a tier list.
    #[must_use]
    pub fn new(tiers: &'a [TournamentTier]) -> Self {
        Self { tiers }
    }

    /// Catalog over the configured tiers.
    #[must_use]
    pub fn from_config(config: &'a ArenaConfig) -> Self {
        Self::new(&config.tiers)
    }

    /// Tier at a level.
    #[must_use]
    pub fn get(&self, level: u32) -> Option<&'a TournamentTier> {
        self.tiers.get(level as usize)
    }

    /// Every tier, in level order.
    pub fn all(&self) -> impl Iterator<Item = TournamentListing<'a>> + 'a {
        let tiers = self.tiers;
        (0u32..).zip(tiers.iter()).map(|(level, tier)| TournamentListing { level, tier })
    }

    /// Whether progression has reached a level.
    #[must_use]
    pub fn is_unlocked(level: u32, highest_won: Option<u32>) -> bool {
        match highest_won {
            Some(highest) => level <= highest.saturating_add(1),
            None => level == 0,
        }
    }

    /// Whether a player may enter a level.
    #[must_use]
    pub fn is_available(&self, level: u32, collection_size: usize, highest_won: Option<u32>) -> bool {
        self.get(level).is_some_and(|tier| {
            collection_size >= tier.min_cards && Self::is_unlocked(level, highest_won)
        })
    }

    /// Tiers the player may enter now.
    ///
    /// ```
    /// use tcg_arena::core::ArenaConfig;
    /// use tcg_arena::tournament::TournamentCatalog;
    ///
    /// let config = ArenaConfig::default();
    /// let catalog = TournamentCatalog::from_config(&config);
    ///
    /// let open: Vec<u32> = catalog.available(120, Some(0)).iter().map(|t| t.level).collect();
    /// assert_eq!(open, vec![0, 1]);
    /// assert!(catalog.available(10, None).is_empty());
    /// ```
    #[must_use]
    pub fn available(&self, collection_size: usize, highest_won: Option<u32>) -> Vec<TournamentListing<'a>> {
        self.all()
            .filter(|t| t.tier.min_cards <= collection_size && Self::is_unlocked(t.level, highest_won))
            .collect()
    }
}

/// Rough collection power: one point per card plus its rarity multiplier.
///
/// Records with a missing or unknown rarity count as common.
#[must_use]
pub fn player_strength(collection: &[CardRecord]) -> u32 {
    collection
        .iter()
        .map(|card| {
            let rarity = card
                .rarity
                .as_deref()
                .and_then(|r| r.parse().ok())
                .unwrap_or(Rarity::Common);
            1 + rarity.strength_multiplier()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlock_rule() {
        assert!(TournamentCatalog::is_unlocked(0, None));
        assert!(!TournamentCatalog::is_unlocked(1, None));
        assert!(TournamentCatalog::is_unlocked(1, Some(0)));
        assert!(TournamentCatalog::is_unlocked(2, Some(1)));
        assert!(!TournamentCatalog::is_unlocked(2, Some(0)));
    }

    #[test]
    fn test_available_needs_cards_and_progress() {
        let config = ArenaConfig::default();
        let catalog = TournamentCatalog::from_config(&config);

        let levels = |size, highest| {
            catalog
                .available(size, highest)
                .iter()
                .map(|t| t.level)
                .collect::<Vec<_>>()
        };

        assert_eq!(levels(20, None), vec![0]);
        assert_eq!(levels(19, None), Vec::<u32>::new());
        assert_eq!(levels(59, Some(2)), vec![0]);
        assert_eq!(levels(100, Some(2)), vec![0, 1, 2]);
        assert_eq!(levels(100, Some(0)), vec![0, 1]);
    }

    #[test]
    fn test_is_available_unknown_level() {
        let config = ArenaConfig::default();
        let catalog = TournamentCatalog::from_config(&config);
        assert!(!catalog.is_available(9, 1000, Some(10)));
        assert!(catalog.is_available(0, 20, None));
    }

    #[test]
    fn test_player_strength() {
        let mut rare = CardRecord::new("a", "A");
        rare.rarity = Some("rare".into());
        let mut odd = CardRecord::new("b", "B");
        odd.rarity = Some("mythic".into());
        let plain = CardRecord::new("c", "C");

        // (1 + 5) + (1 + 1) + (1 + 1)
        assert_eq!(player_strength(&[rare, odd, plain]), 10);
        assert_eq!(player_strength(&[]), 0);
    }
}
