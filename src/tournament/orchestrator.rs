//! Tournament orchestration.
//!
//! ## Flow
//!
//! ```text
//! enter_tournament ──► Battle 1 ──win──► strategy break ──continue──► Battle 2 ... ──win──► reward
//!                         │                                             │
//!                         └──────────────────── loss ───────────────────┴──► no reward
//! ```
//!
//! The `Arena` owns the running tournament and its current battle. The
//! caller owns the `PlayerProfile` and passes it to every operation that
//! may end a tournament, so rewards and refunds are applied in the same
//! call that decides them.
//!
//! ## Entry Fee
//!
//! `enter_tournament` charges the fee. It is refunded when the tournament
//! cannot start (cancellation, bad deck, no opponent) or is abandoned
//! because of an invalid card. A lost battle or a forfeit keeps the fee.
//!
//! An abandoned tournament is not a loss: its `TournamentResult` carries
//! `abandoned = true` and no defeat line is narrated.

use tracing::{info, warn};

use super::catalog::{TournamentCatalog, TournamentListing};
use super::opponent::generate_opponent_deck;
use super::rewards::{PlayerProfile, Reward, TournamentResult};
use crate::battle::{
    repair, ActionOutcome, Battle, BattleLog, BattleOutcome, LogCategory, ScheduledTurn,
};
use crate::cards::{Card, CardRecord};
use crate::core::{ArenaConfig, ArenaError, GameRng, Result, Side, TournamentTier};

/// Where a running tournament stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TournamentPhase {
    /// A battle is in progress.
    InBattle,
    /// A battle was won and the next one has not started.
    StrategyBreak {
        /// Heal, reorder or skip has been chosen.
        choice_made: bool,
    },
}

/// A running tournament.
#[derive(Clone, Debug)]
pub struct Tournament {
    level: u32,
    tier: TournamentTier,
    battles_required: u32,
    current_battle: u32,
    entry_fee: f64,
    forfeited: bool,
    player_deck: Vec<Card>,
    battle: Option<Battle>,
    phase: TournamentPhase,
}

impl Tournament {
    /// Difficulty level.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Rules and rewards in effect.
    #[must_use]
    pub fn tier(&self) -> &TournamentTier {
        &self.tier
    }

    /// Battles to win.
    #[must_use]
    pub fn battles_required(&self) -> u32 {
        self.battles_required
    }

    /// 1-based number of the current (or last finished) battle.
    #[must_use]
    pub fn current_battle(&self) -> u32 {
        self.current_battle
    }

    /// Fee charged on entry, 0 if started without one.
    #[must_use]
    pub fn entry_fee(&self) -> f64 {
        self.entry_fee
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> TournamentPhase {
        self.phase
    }

    /// The battle in progress.
    #[must_use]
    pub fn battle(&self) -> Option<&Battle> {
        self.battle.as_ref()
    }

    /// The player's deck, including damage taken so far.
    #[must_use]
    pub fn player_deck(&self) -> &[Card] {
        self.battle
            .as_ref()
            .map_or(self.player_deck.as_slice(), |b| b.deck(Side::Player))
    }
}

/// Borrow the tournament if a strategy choice can still be made.
fn open_break(tournament: &mut Option<Tournament>) -> Result<&mut Tournament> {
    let tournament = tournament.as_mut().ok_or(ArenaError::NoActiveTournament)?;
    match tournament.phase {
        TournamentPhase::StrategyBreak { choice_made: false } => Ok(tournament),
        TournamentPhase::StrategyBreak { choice_made: true } => {
            Err(ArenaError::WrongPhase("strategy break already used"))
        }
        TournamentPhase::InBattle => Err(ArenaError::WrongPhase("no strategy break in progress")),
    }
}

/// Tournament driver.
///
/// ## Example
///
/// ```
/// use tcg_arena::cards::CardRecord;
/// use tcg_arena::core::ArenaConfig;
/// use tcg_arena::tournament::{Arena, PlayerProfile};
///
/// let mut arena = Arena::new(ArenaConfig::default(), 7);
/// let collection: Vec<CardRecord> = (0..20)
///     .map(|i| CardRecord::new(format!("c{}", i), "Mystic Knight").with_type("Fire").with_stats(60.0, 60.0, 40.0))
///     .collect();
/// let mut profile = PlayerProfile::new(10.0).with_collection(collection.clone());
///
/// let deck = collection[..3].to_vec();
/// arena.enter_tournament(&mut profile, 0, Some(deck)).unwrap();
///
/// assert_eq!(profile.money, 0.0);
/// assert_eq!(arena.tournament().unwrap().current_battle(), 1);
/// assert!(arena.log().contains("Battle 1 of 2 started!"));
/// ```
#[derive(Clone, Debug)]
pub struct Arena {
    config: ArenaConfig,
    rng: GameRng,
    tournament: Option<Tournament>,
    log: BattleLog,
    last_result: Option<TournamentResult>,
}

impl Arena {
    /// Create an arena with a seeded RNG.
    #[must_use]
    pub fn new(config: ArenaConfig, seed: u64) -> Self {
        Self {
            config,
            rng: GameRng::new(seed),
            tournament: None,
            log: BattleLog::new(),
            last_result: None,
        }
    }

    // === Accessors ===

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Tier listing.
    #[must_use]
    pub fn catalog(&self) -> TournamentCatalog<'_> {
        TournamentCatalog::from_config(&self.config)
    }

    /// Tiers a player may enter.
    #[must_use]
    pub fn available_tournaments(&self, profile: &PlayerProfile) -> Vec<TournamentListing<'_>> {
        self.catalog()
            .available(profile.collection_size(), profile.highest_tournament_won)
    }

    /// The running tournament.
    #[must_use]
    pub fn tournament(&self) -> Option<&Tournament> {
        self.tournament.as_ref()
    }

    /// The battle in progress.
    #[must_use]
    pub fn battle(&self) -> Option<&Battle> {
        self.tournament.as_ref().and_then(Tournament::battle)
    }

    /// Narration, including the battle in progress.
    #[must_use]
    pub fn log(&self) -> &BattleLog {
        self.battle().map_or(&self.log, Battle::log)
    }

    /// Result of the most recently finished tournament.
    #[must_use]
    pub fn last_result(&self) -> Option<&TournamentResult> {
        self.last_result.as_ref()
    }

    /// The opponent turn waiting to run, if any.
    #[must_use]
    pub fn pending_turn(&self) -> Option<ScheduledTurn> {
        self.battle().and_then(Battle::pending_turn)
    }

    // === Entry ===

    /// Pay the entry fee and start a tournament.
    ///
    /// `deck` is `None` when the player backed out of deck selection. A
    /// deck must hold exactly the tier's `deck_size` cards. The fee is
    /// refunded on every refundable error.
    pub fn enter_tournament(
        &mut self,
        profile: &mut PlayerProfile,
        level: u32,
        deck: Option<Vec<CardRecord>>,
    ) -> Result<()> {
        if self.tournament.is_some() {
            return Err(ArenaError::WrongPhase("a tournament is already running"));
        }
        let tier = self
            .config
            .tier(level)
            .cloned()
            .ok_or(ArenaError::UnknownTournament(level))?;
        if !TournamentCatalog::is_unlocked(level, profile.highest_tournament_won) {
            return Err(ArenaError::TournamentLocked(level));
        }
        if profile.collection_size() < tier.min_cards {
            return Err(ArenaError::InsufficientCards {
                required: tier.min_cards,
                available: profile.collection_size(),
            });
        }
        profile.charge(tier.entry_fee)?;

        let started = match deck {
            Some(cards) if cards.len() != tier.deck_size => {
                self.log.push("Error: Invalid deck format. Tournament cancelled.");
                Err(ArenaError::InvalidDeck(format!(
                    "expected {} cards, got {}",
                    tier.deck_size,
                    cards.len()
                )))
            }
            deck => self.start_tournament(deck, level),
        };
        match started {
            Ok(()) => {
                if let Some(tournament) = self.tournament.as_mut() {
                    tournament.entry_fee = tier.entry_fee;
                }
                Ok(())
            }
            Err(error) => {
                if error.refunds_entry() {
                    profile.refund(tier.entry_fee);
                    let message = if error == ArenaError::Cancelled {
                        "Tournament entry cancelled. Entry fee refunded."
                    } else {
                        "Tournament entry cancelled due to an error. Entry fee refunded."
                    };
                    self.log.push(message);
                }
                Err(error)
            }
        }
    }

    /// Start a tournament without charging a fee.
    ///
    /// Every card is validated and repaired; a card that cannot be
    /// identified cancels the tournament. On success the first battle is
    /// running.
    pub fn start_tournament(&mut self, deck: Option<Vec<CardRecord>>, level: u32) -> Result<()> {
        if self.tournament.is_some() {
            return Err(ArenaError::WrongPhase("a tournament is already running"));
        }
        let Some(deck) = deck else {
            info!("tournament cancelled, no deck provided");
            return Err(ArenaError::Cancelled);
        };
        if deck.is_empty() {
            self.log.push("Error: Invalid deck format. Tournament cancelled.");
            return Err(ArenaError::InvalidDeck("deck is empty".to_string()));
        }

        let mut cards = Vec::with_capacity(deck.len());
        let mut first_error = None;
        let mut invalid = 0;
        for (index, record) in deck.iter().enumerate() {
            match repair(record, &mut self.rng, &self.config) {
                Ok(card) => cards.push(card),
                Err(reason) => {
                    invalid += 1;
                    first_error.get_or_insert(ArenaError::Validation { index, reason });
                }
            }
        }
        if let Some(error) = first_error {
            warn!(invalid, %error, "invalid cards in player deck");
            self.log
                .push(format!("Error: {} invalid cards in deck. Tournament cancelled.", invalid));
            return Err(error);
        }

        let tier = self.config.tier_or_default(level);
        let battles_required = tier.battles_required;
        self.log.push(format!(
            "Tournament started! You'll need to win {} battles.",
            battles_required
        ));
        info!(level, battles_required, "tournament started");

        self.tournament = Some(Tournament {
            level,
            tier,
            battles_required,
            current_battle: 0,
            entry_fee: 0.0,
            forfeited: false,
            player_deck: cards,
            battle: None,
            phase: TournamentPhase::InBattle,
        });
        self.start_next_battle()
    }

    // === Battle Actions ===

    /// Attack with the player's active card.
    pub fn player_attack(&mut self, profile: &mut PlayerProfile) -> ActionOutcome {
        self.act(profile, Battle::player_attack)
    }

    /// Pass the player's turn.
    pub fn skip_turn(&mut self, profile: &mut PlayerProfile) -> ActionOutcome {
        self.act(profile, Battle::skip_turn)
    }

    /// Switch the player's active card.
    pub fn switch_card(&mut self, profile: &mut PlayerProfile, index: usize) -> ActionOutcome {
        self.act(profile, |battle| battle.switch_card(index))
    }

    /// Run the scheduled opponent turn.
    pub fn run_pending(&mut self, profile: &mut PlayerProfile) -> ActionOutcome {
        self.act(profile, Battle::run_pending)
    }

    /// Give up the current battle, and with it the tournament.
    pub fn forfeit(&mut self, profile: &mut PlayerProfile) -> ActionOutcome {
        if let Some(tournament) = self.tournament.as_mut() {
            if tournament.battle.as_ref().is_some_and(Battle::is_active) {
                tournament.forfeited = true;
            }
        }
        self.act(profile, Battle::forfeit)
    }

    // === Strategy Break ===

    /// Restore a share of max HP to every deck card.
    pub fn heal_team(&mut self) -> Result<()> {
        let percent = self.config.team_heal_percent;
        let tournament = open_break(&mut self.tournament)?;

        for card in &mut tournament.player_deck {
            let amount = u64::from(card.max_hp) * u64::from(percent) / 100;
            let gained = card.heal(u32::try_from(amount).unwrap_or(u32::MAX));
            if gained > 0 {
                self.log
                    .push_as(format!("{} recovered {} HP!", card.name, gained), LogCategory::Ability);
            }
        }
        tournament.phase = TournamentPhase::StrategyBreak { choice_made: true };
        self.log.push_as(
            "Your team has been healed and is ready for the next battle!",
            LogCategory::Ability,
        );
        Ok(())
    }

    /// Reorder the deck. `order[i]` is the current index of the card that
    /// should end up at position `i`; position 0 leads the next battle.
    pub fn reorder_deck(&mut self, order: &[usize]) -> Result<()> {
        let tournament = open_break(&mut self.tournament)?;
        let len = tournament.player_deck.len();

        let mut seen = vec![false; len];
        let is_permutation = order.len() == len
            && order
                .iter()
                .all(|&i| i < len && !std::mem::replace(&mut seen[i], true));
        if !is_permutation {
            return Err(ArenaError::InvalidDeckOrder(format!(
                "{:?} is not a permutation of 0..{}",
                order, len
            )));
        }

        tournament.player_deck = order
            .iter()
            .map(|&i| tournament.player_deck[i].clone())
            .collect();
        tournament.phase = TournamentPhase::StrategyBreak { choice_made: true };
        self.log.push_as(
            "Your deck has been reorganized for the next battle!",
            LogCategory::Ability,
        );
        Ok(())
    }

    /// Pass on the strategy break.
    pub fn skip_strategy(&mut self) -> Result<()> {
        let tournament = open_break(&mut self.tournament)?;
        tournament.phase = TournamentPhase::StrategyBreak { choice_made: true };
        Ok(())
    }

    /// Start the next battle after a strategy break.
    pub fn continue_tournament(&mut self, profile: &mut PlayerProfile) -> Result<()> {
        let tournament = self.tournament.as_ref().ok_or(ArenaError::NoActiveTournament)?;
        if tournament.phase == TournamentPhase::InBattle {
            return Err(ArenaError::WrongPhase("the current battle is not over"));
        }
        let fee = tournament.entry_fee;
        let level = tournament.level;

        match self.start_next_battle() {
            Ok(()) => Ok(()),
            Err(error) => {
                let refund = if error.refunds_entry() { fee } else { 0.0 };
                self.record_abandoned(profile, level, refund);
                Err(error)
            }
        }
    }

    // === Internals ===

    fn act(&mut self, profile: &mut PlayerProfile, action: impl FnOnce(&mut Battle) -> ActionOutcome) -> ActionOutcome {
        let Some(battle) = self.tournament.as_mut().and_then(|t| t.battle.as_mut()) else {
            return ActionOutcome::Ignored;
        };
        let outcome = action(battle);
        if outcome == ActionOutcome::Applied {
            self.settle_battle(profile);
        }
        outcome
    }

    fn start_next_battle(&mut self) -> Result<()> {
        let tournament = self.tournament.as_mut().ok_or(ArenaError::NoActiveTournament)?;
        tournament.current_battle += 1;
        let level = tournament.level;
        let number = tournament.current_battle;
        let size = self.config.opponent_deck_size;

        let mut opponent = generate_opponent_deck(level, number, size, &mut self.rng);
        if opponent.is_empty() {
            warn!(level, battle = number, "empty opponent deck, retrying");
            opponent = generate_opponent_deck(level, number, size, &mut self.rng);
        }
        if opponent.is_empty() {
            return Err(self.abort(
                "Error: Could not generate opponent deck. Tournament cancelled.",
                ArenaError::OpponentGeneration,
            ));
        }

        self.log.push(format!(
            "Battle {} of {} started!",
            number, tournament.battles_required
        ));
        let player_deck = std::mem::take(&mut tournament.player_deck);
        let log = std::mem::take(&mut self.log);
        let mut battle = Battle::new(player_deck, opponent, &self.config, self.rng.fork()).with_log(log);

        match battle.start() {
            Ok(()) => {
                tournament.battle = Some(battle);
                tournament.phase = TournamentPhase::InBattle;
                Ok(())
            }
            Err(error) => {
                self.log = battle.into_parts().log;
                Err(self.abort("Error: Card validation failed. Tournament cancelled.", error))
            }
        }
    }

    /// Fold a finished battle back into the tournament.
    fn settle_battle(&mut self, profile: &mut PlayerProfile) {
        let Some(tournament) = self.tournament.as_mut() else { return };
        let Some(outcome) = tournament.battle.as_ref().and_then(Battle::outcome) else {
            return;
        };
        let Some(battle) = tournament.battle.take() else { return };

        let parts = battle.into_parts();
        tournament.player_deck = parts.player_deck;
        self.log = parts.log;

        let final_battle = tournament.current_battle >= tournament.battles_required;
        if outcome == BattleOutcome::Victory && !final_battle {
            tournament.phase = TournamentPhase::StrategyBreak { choice_made: false };
            info!(battle = tournament.current_battle, "battle won, strategy break");
            return;
        }

        if outcome == BattleOutcome::Abandoned && !tournament.forfeited {
            let fee = tournament.entry_fee;
            let level = tournament.level;
            self.tournament = None;
            self.log.push("The tournament was abandoned.");
            self.record_abandoned(profile, level, fee);
            return;
        }

        self.finish(profile, outcome == BattleOutcome::Victory);
    }

    fn finish(&mut self, profile: &mut PlayerProfile, won: bool) {
        let Some(tournament) = self.tournament.take() else { return };

        let reward = if won {
            let reward = Reward::roll(&tournament.tier, &mut self.rng);
            profile.credit(&reward, tournament.level);
            self.log.push(format!(
                "You won the tournament! Earned ${:.2} and {} card packs.",
                f64::from(reward.money),
                reward.packs
            ));
            Some(reward)
        } else {
            self.log
                .push_as("You were defeated in the tournament.", LogCategory::Defeat);
            None
        };

        let result = TournamentResult {
            level: tournament.level,
            battle_result: won,
            reward,
            abandoned: false,
        };
        info!(level = result.level, won, "tournament finished");
        self.last_result = Some(result);
    }

    /// Close a tournament that ended without a winner or loser.
    fn record_abandoned(&mut self, profile: &mut PlayerProfile, level: u32, refund: f64) {
        if refund > 0.0 {
            profile.refund(refund);
            self.log
                .push("Tournament entry cancelled due to an error. Entry fee refunded.");
        }
        warn!(level, refund, "tournament abandoned");
        self.last_result = Some(TournamentResult::abandoned(level));
    }

    fn abort(&mut self, message: &str, error: ArenaError) -> ArenaError {
        warn!(%error, "tournament aborted");
        self.log.push(message);
        self.tournament = None;
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, hp: f64, attack: f64) -> CardRecord {
        CardRecord::new(id, format!("Card {}", id))
            .with_type("Spell")
            .with_stats(hp, hp, attack)
    }

    fn strong_deck() -> Vec<CardRecord> {
        (0..3).map(|i| record(&format!("p{}", i), 500.0, 500.0)).collect()
    }

    fn profile(money: f64) -> PlayerProfile {
        let collection = (0..20).map(|i| record(&format!("c{}", i), 50.0, 10.0)).collect();
        PlayerProfile::new(money).with_collection(collection)
    }

    fn play_battle(arena: &mut Arena, profile: &mut PlayerProfile) {
        for _ in 0..200 {
            let Some(battle) = arena.battle() else { return };
            if !battle.is_active() {
                return;
            }
            if battle.is_player_turn() {
                arena.player_attack(profile);
            } else {
                arena.run_pending(profile);
            }
        }
    }

    #[test]
    fn test_cancel_refunds() {
        let mut arena = Arena::new(ArenaConfig::default(), 1);
        let mut profile = profile(15.0);

        let err = arena.enter_tournament(&mut profile, 0, None).unwrap_err();
        assert_eq!(err, ArenaError::Cancelled);
        assert_eq!(profile.money, 15.0);
        assert!(arena.tournament().is_none());
        assert!(arena.log().contains("Entry fee refunded"));
    }

    #[test]
    fn test_entry_requirements() {
        let mut arena = Arena::new(ArenaConfig::default(), 1);

        let mut poor = profile(5.0);
        assert!(matches!(
            arena.enter_tournament(&mut poor, 0, Some(strong_deck())),
            Err(ArenaError::InsufficientFunds { .. })
        ));
        assert_eq!(poor.money, 5.0);

        let mut small = PlayerProfile::new(100.0);
        assert!(matches!(
            arena.enter_tournament(&mut small, 0, Some(strong_deck())),
            Err(ArenaError::InsufficientCards { required: 20, available: 0 })
        ));

        let mut rich = profile(100.0);
        assert_eq!(
            arena.enter_tournament(&mut rich, 1, Some(strong_deck())),
            Err(ArenaError::TournamentLocked(1))
        );
        assert_eq!(
            arena.enter_tournament(&mut rich, 9, Some(strong_deck())),
            Err(ArenaError::UnknownTournament(9))
        );
    }

    #[test]
    fn test_invalid_card_cancels_and_refunds() {
        let mut arena = Arena::new(ArenaConfig::default(), 1);
        let mut profile = profile(10.0);
        let mut deck = strong_deck();
        deck[1].name = None;

        let err = arena.enter_tournament(&mut profile, 0, Some(deck)).unwrap_err();
        assert!(matches!(err, ArenaError::Validation { index: 1, .. }));
        assert_eq!(profile.money, 10.0);
        assert!(arena.log().contains("1 invalid cards in deck"));
    }

    #[test]
    fn test_deck_must_match_tier_size() {
        let mut arena = Arena::new(ArenaConfig::default(), 1);
        let mut profile = profile(10.0);
        let mut deck = strong_deck();
        deck.push(record("p3", 500.0, 500.0));

        let err = arena.enter_tournament(&mut profile, 0, Some(deck)).unwrap_err();
        assert_eq!(err, ArenaError::InvalidDeck("expected 3 cards, got 4".to_string()));
        assert_eq!(profile.money, 10.0);
        assert!(arena.tournament().is_none());
        assert!(arena.log().contains("Error: Invalid deck format. Tournament cancelled."));
    }

    #[test]
    fn test_regional_tier_takes_four_cards() {
        let mut arena = Arena::new(ArenaConfig::default(), 1);
        let collection = (0..60).map(|i| record(&format!("c{}", i), 500.0, 500.0)).collect();
        let mut profile = PlayerProfile::new(100.0).with_collection(collection);
        profile.highest_tournament_won = Some(0);

        assert!(matches!(
            arena.enter_tournament(&mut profile, 1, Some(strong_deck())),
            Err(ArenaError::InvalidDeck(_))
        ));
        assert_eq!(profile.money, 100.0);

        let deck = profile.collection[..4].to_vec();
        arena.enter_tournament(&mut profile, 1, Some(deck)).unwrap();
        assert_eq!(profile.money, 50.0);
        assert_eq!(arena.tournament().unwrap().player_deck().len(), 4);
    }

    #[test]
    fn test_failed_continue_is_abandoned() {
        let mut arena = Arena::new(ArenaConfig::default(), 3);
        let mut profile = profile(10.0);
        arena.enter_tournament(&mut profile, 0, Some(strong_deck())).unwrap();
        play_battle(&mut arena, &mut profile);
        arena.skip_strategy().unwrap();

        arena.config.opponent_deck_size = 0;
        let err = arena.continue_tournament(&mut profile).unwrap_err();
        assert_eq!(err, ArenaError::OpponentGeneration);
        assert_eq!(profile.money, 10.0);
        assert_eq!(arena.last_result(), Some(&TournamentResult::abandoned(0)));
        assert!(!arena.log().contains("You were defeated in the tournament."));
        assert!(arena.tournament().is_none());
    }

    #[test]
    fn test_opponent_generation_failure_refunds() {
        let config = ArenaConfig::default().with_opponent_deck_size(0);
        let mut arena = Arena::new(config, 1);
        let mut profile = profile(10.0);

        let err = arena.enter_tournament(&mut profile, 0, Some(strong_deck())).unwrap_err();
        assert_eq!(err, ArenaError::OpponentGeneration);
        assert_eq!(profile.money, 10.0);
        assert!(arena.tournament().is_none());
    }

    #[test]
    fn test_win_goes_through_strategy_break() {
        let mut arena = Arena::new(ArenaConfig::default(), 3);
        let mut profile = profile(10.0);
        arena.enter_tournament(&mut profile, 0, Some(strong_deck())).unwrap();

        play_battle(&mut arena, &mut profile);
        let tournament = arena.tournament().unwrap();
        assert_eq!(
            tournament.phase(),
            TournamentPhase::StrategyBreak { choice_made: false }
        );
        assert!(arena.battle().is_none());

        // Actions outside a battle are ignored
        assert_eq!(arena.player_attack(&mut profile), ActionOutcome::Ignored);

        arena.skip_strategy().unwrap();
        assert_eq!(
            arena.heal_team(),
            Err(ArenaError::WrongPhase("strategy break already used"))
        );

        arena.continue_tournament(&mut profile).unwrap();
        assert_eq!(arena.tournament().unwrap().current_battle(), 2);
        assert!(arena.log().contains("Battle 2 of 2 started!"));

        play_battle(&mut arena, &mut profile);
        let result = arena.last_result().unwrap();
        assert!(result.battle_result);
        let reward = result.reward.unwrap();
        assert!((15..=30).contains(&reward.money));
        assert_eq!(reward.packs, 1);
        assert_eq!(profile.money, f64::from(reward.money));
        assert_eq!(profile.highest_tournament_won, Some(0));
        assert!(arena.tournament().is_none());
    }

    #[test]
    fn test_reorder_deck() {
        let mut arena = Arena::new(ArenaConfig::default(), 3);
        let mut profile = profile(10.0);
        arena.enter_tournament(&mut profile, 0, Some(strong_deck())).unwrap();
        play_battle(&mut arena, &mut profile);

        assert!(matches!(
            arena.reorder_deck(&[0, 0, 1]),
            Err(ArenaError::InvalidDeckOrder(_))
        ));
        assert!(matches!(
            arena.reorder_deck(&[0, 1]),
            Err(ArenaError::InvalidDeckOrder(_))
        ));

        let before: Vec<_> = arena
            .tournament()
            .unwrap()
            .player_deck()
            .iter()
            .map(|c| c.id.clone())
            .collect();
        arena.reorder_deck(&[2, 0, 1]).unwrap();
        let after: Vec<_> = arena
            .tournament()
            .unwrap()
            .player_deck()
            .iter()
            .map(|c| c.id.clone())
            .collect();
        assert_eq!(after, vec![before[2].clone(), before[0].clone(), before[1].clone()]);
        assert!(arena.log().contains("Your deck has been reorganized"));
    }

    #[test]
    fn test_strategy_ops_need_a_break() {
        let mut arena = Arena::new(ArenaConfig::default(), 3);
        assert_eq!(arena.heal_team(), Err(ArenaError::NoActiveTournament));

        let mut profile = profile(10.0);
        arena.enter_tournament(&mut profile, 0, Some(strong_deck())).unwrap();
        assert_eq!(
            arena.skip_strategy(),
            Err(ArenaError::WrongPhase("no strategy break in progress"))
        );
        assert_eq!(
            arena.continue_tournament(&mut profile),
            Err(ArenaError::WrongPhase("the current battle is not over"))
        );
    }

    #[test]
    fn test_forfeit_keeps_fee() {
        let mut arena = Arena::new(ArenaConfig::default(), 3);
        let mut profile = profile(10.0);
        arena.enter_tournament(&mut profile, 0, Some(strong_deck())).unwrap();

        assert_eq!(arena.forfeit(&mut profile), ActionOutcome::Applied);
        assert_eq!(profile.money, 0.0);
        let result = arena.last_result().unwrap();
        assert!(!result.battle_result);
        assert!(!result.abandoned);
        assert_eq!(result.reward, None);
        assert!(arena.tournament().is_none());
    }
}
