//! The battle state machine.
//!
//! ## Lifecycle
//!
//! ```text
//! NotStarted --start()--> Active --(a deck empties)--> Ended(Victory | Defeat)
//!                           |
//!                           +--(invalid active card, forfeit)--> Ended(Abandoned)
//! ```
//!
//! ## Turn Structure
//!
//! Sides alternate, player first. Each side's turn begins with the
//! start-of-turn effects, in order:
//! 1. Heal on the player's active card
//! 2. Heal on the opponent's active card
//! 3. Type Shift on the active card of the side about to act
//!
//! The player acts through `player_attack`, `skip_turn` and `switch_card`.
//! The opponent always attacks, but only after a pacing delay: ending the
//! player's turn schedules the opponent's turn, and the driver runs it with
//! `run_pending` once the delay has elapsed.
//!
//! ## Double Strike
//!
//! A Double Strike attack arms a one-shot marker on the attacking card and
//! keeps the turn with the same side. The bonus attack consumes it. Markers
//! are dropped whenever a turn ends and at battle start.
//!
//! ## Active Cards
//!
//! Active cards are held by id and looked up in their deck on use, so a
//! defeated card that has been removed can never be referenced again.

use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

use super::damage::compute_damage;
use super::log::{BattleLog, LogCategory};
use super::scheduler::{ScheduledTurn, TurnKind, TurnScheduler};
use super::validator::{check_card, validate_card};
use crate::cards::{AbilityEffect, Card, CardId};
use crate::core::{ArenaConfig, ArenaError, GameRng, Result, Side, SideMap};

/// How a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BattleOutcome {
    /// The opponent's deck was exhausted.
    Victory,
    /// The player's deck was exhausted.
    Defeat,
    /// The battle could not continue (invalid card or forfeit).
    Abandoned,
}

impl BattleOutcome {
    /// Whether the player won.
    #[must_use]
    pub fn player_won(self) -> bool {
        self == BattleOutcome::Victory
    }
}

/// Battle lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattlePhase {
    NotStarted,
    Active,
    Ended(BattleOutcome),
}

/// Result of a player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action was performed.
    Applied,
    /// Not the player's turn, or the battle is not active. Nothing changed.
    Ignored,
    /// The action was refused; the reason was narrated.
    Rejected,
}

/// Everything a battle hands back when it is torn down.
#[derive(Clone, Debug)]
pub struct BattleParts {
    pub outcome: Option<BattleOutcome>,
    pub player_deck: Vec<Card>,
    pub opponent_deck: Vec<Card>,
    pub log: BattleLog,
}

/// One encounter between two decks.
///
/// ## Example
///
/// ```
/// use tcg_arena::battle::{Battle, BattleOutcome};
/// use tcg_arena::cards::{Card, CardType, Rarity};
/// use tcg_arena::core::{ArenaConfig, GameRng};
///
/// let strong = vec![Card::new("p1", "Fiery Dragon", CardType::Fire, Rarity::Rare).with_stats(50, 30)];
/// let weak = vec![Card::new("o1", "Aqua Beast", CardType::Fire, Rarity::Common).with_stats(20, 5)];
///
/// let mut battle = Battle::new(strong, weak, &ArenaConfig::default(), GameRng::new(1));
/// battle.start().unwrap();
/// battle.player_attack();
///
/// assert_eq!(battle.outcome(), Some(BattleOutcome::Victory));
/// assert!(battle.log().contains("You won the battle!"));
/// ```
#[derive(Clone, Debug)]
pub struct Battle {
    decks: SideMap<Vec<Card>>,
    active: SideMap<Option<CardId>>,
    turn: u32,
    to_act: Side,
    phase: BattlePhase,
    double_strike: FxHashSet<CardId>,
    scheduler: TurnScheduler,
    log: BattleLog,
    rng: GameRng,
    config: ArenaConfig,
}

impl Battle {
    /// Create a battle that has not started yet.
    pub fn new(player_deck: Vec<Card>, opponent_deck: Vec<Card>, config: &ArenaConfig, rng: GameRng) -> Self {
        Self {
            decks: SideMap::from_pair(player_deck, opponent_deck),
            active: SideMap::with_value(None),
            turn: 0,
            to_act: Side::Player,
            phase: BattlePhase::NotStarted,
            double_strike: FxHashSet::default(),
            scheduler: TurnScheduler::new(),
            log: BattleLog::new(),
            rng,
            config: config.clone(),
        }
    }

    /// Continue narrating into an existing log (builder pattern).
    #[must_use]
    pub fn with_log(mut self, log: BattleLog) -> Self {
        self.log = log;
        self
    }

    // === Accessors ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// Check if the battle is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == BattlePhase::Active
    }

    /// Outcome, once ended.
    #[must_use]
    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self.phase {
            BattlePhase::Ended(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Side-turns begun so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Side whose turn it is.
    #[must_use]
    pub fn to_act(&self) -> Side {
        self.to_act
    }

    /// Check if the player may act now.
    #[must_use]
    pub fn is_player_turn(&self) -> bool {
        self.is_active() && self.to_act == Side::Player
    }

    /// A side's remaining deck, in order.
    #[must_use]
    pub fn deck(&self, side: Side) -> &[Card] {
        &self.decks[side]
    }

    /// A side's active card.
    #[must_use]
    pub fn active_card(&self, side: Side) -> Option<&Card> {
        self.active_index(side).map(|i| &self.decks[side][i])
    }

    /// Narration so far.
    #[must_use]
    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    /// The opponent turn waiting to run, if any.
    #[must_use]
    pub fn pending_turn(&self) -> Option<ScheduledTurn> {
        self.scheduler.pending()
    }

    /// Whether a side's active card has an unused bonus attack.
    #[must_use]
    pub fn double_strike_armed(&self, side: Side) -> bool {
        self.active[side]
            .as_ref()
            .is_some_and(|id| self.double_strike.contains(id))
    }

    /// Tear the battle down, returning decks and log.
    #[must_use]
    pub fn into_parts(self) -> BattleParts {
        let outcome = self.outcome();
        let (player_deck, opponent_deck) = self.decks.into_pair();
        BattleParts {
            outcome,
            player_deck,
            opponent_deck,
            log: self.log,
        }
    }

    // === Lifecycle ===

    /// Start the battle.
    ///
    /// Both decks must be non-empty and every card must be identifiable.
    /// Recoverable HP defects are repaired. On success the player's first
    /// turn has begun.
    pub fn start(&mut self) -> Result<()> {
        if self.phase != BattlePhase::NotStarted {
            return Err(ArenaError::WrongPhase("battle already started"));
        }
        if self.decks[Side::Player].is_empty() {
            return Err(ArenaError::InvalidDeck("player deck is empty".to_string()));
        }
        if self.decks[Side::Opponent].is_empty() {
            return Err(ArenaError::OpponentGeneration);
        }

        for (index, card) in self.decks[Side::Player].iter_mut().enumerate() {
            check_card(card).map_err(|reason| ArenaError::Validation { index, reason })?;
            validate_card(card, &self.config);
        }
        for (index, card) in self.decks[Side::Opponent].iter_mut().enumerate() {
            check_card(card).map_err(|reason| {
                ArenaError::InvalidDeck(format!("opponent card {} is invalid: {}", index, reason))
            })?;
            validate_card(card, &self.config);
        }

        self.turn = 0;
        self.to_act = Side::Player;
        self.double_strike.clear();
        self.scheduler.cancel();
        for side in Side::BOTH {
            self.active[side] = self.decks[side].first().map(|c| c.id.clone());
        }
        self.phase = BattlePhase::Active;

        let player = self.decks[Side::Player][0].name.clone();
        let opponent = self.decks[Side::Opponent][0].name.clone();
        self.log.push(format!("Your {} faces opponent's {}!", player, opponent));
        debug!(player = %player, opponent = %opponent, "battle started");

        self.begin_turn(Side::Player);
        Ok(())
    }

    /// Give up the battle. Any pending opponent turn is cancelled.
    pub fn forfeit(&mut self) -> ActionOutcome {
        if !self.is_active() {
            return ActionOutcome::Ignored;
        }
        self.scheduler.cancel();
        self.log.push("You forfeited the battle.");
        self.end(BattleOutcome::Abandoned);
        ActionOutcome::Applied
    }

    // === Player Actions ===

    /// Attack the opponent's active card.
    pub fn player_attack(&mut self) -> ActionOutcome {
        if !self.is_player_turn() {
            return ActionOutcome::Ignored;
        }
        self.attack(Side::Player);
        ActionOutcome::Applied
    }

    /// Pass the turn.
    pub fn skip_turn(&mut self) -> ActionOutcome {
        if !self.is_player_turn() {
            return ActionOutcome::Ignored;
        }
        self.log.push("You skipped your turn.");
        self.end_turn(Side::Player);
        ActionOutcome::Applied
    }

    /// Make the deck card at `index` active. Costs the turn.
    pub fn switch_card(&mut self, index: usize) -> ActionOutcome {
        if !self.is_player_turn() {
            return ActionOutcome::Ignored;
        }

        let Some(card) = self.decks[Side::Player].get(index) else {
            self.log.push("Invalid card selection.");
            return ActionOutcome::Rejected;
        };
        if self.active[Side::Player].as_ref() == Some(&card.id) {
            self.log.push("That card is already active.");
            return ActionOutcome::Rejected;
        }

        let new_id = card.id.clone();
        let new_name = card.name.clone();
        let old_name = self
            .active_card(Side::Player)
            .map(|c| c.name.clone())
            .unwrap_or_default();

        self.active[Side::Player] = Some(new_id);
        self.log.push_as(
            format!("You switched from {} to {}!", old_name, new_name),
            LogCategory::Ability,
        );
        self.end_turn(Side::Player);
        ActionOutcome::Applied
    }

    // === Opponent ===

    /// Run the scheduled opponent turn, if any.
    ///
    /// Drivers call this once the turn's delay has elapsed.
    pub fn run_pending(&mut self) -> ActionOutcome {
        let Some(turn) = self.scheduler.take() else {
            return ActionOutcome::Ignored;
        };
        if !self.is_active() || self.to_act != Side::Opponent {
            return ActionOutcome::Ignored;
        }

        debug!(kind = ?turn.kind, "running opponent turn");
        self.attack(Side::Opponent);
        ActionOutcome::Applied
    }

    // === Internals ===

    fn active_index(&self, side: Side) -> Option<usize> {
        let id = self.active[side].as_ref()?;
        self.decks[side].iter().position(|c| &c.id == id)
    }

    fn begin_turn(&mut self, side: Side) {
        self.turn += 1;
        self.to_act = side;

        for s in Side::BOTH {
            let valid = self
                .active_index(s)
                .is_some_and(|i| validate_card(&mut self.decks[s][i], &self.config).valid);
            if !valid {
                self.abandon("Error: Active cards are invalid. Battle will restart.");
                return;
            }
        }

        self.apply_start_of_turn_effects(side);

        if side == Side::Opponent {
            self.scheduler.schedule(TurnKind::OpponentTurn, self.config.ai_turn_delay);
        }
    }

    fn apply_start_of_turn_effects(&mut self, acting: Side) {
        for side in Side::BOTH {
            let Some(index) = self.active_index(side) else { continue };
            let card = &mut self.decks[side][index];
            if let Some(AbilityEffect::Heal(amount)) = card.effect() {
                let gained = card.heal(amount);
                if gained > 0 {
                    let message = format!("{} {} healed for {} HP!", side.possessive(), card.name, gained);
                    self.log.push(message);
                }
            }
        }

        let (Some(index), Some(target)) = (
            self.active_index(acting),
            self.active_card(acting.other()).map(|c| c.card_type),
        ) else {
            return;
        };
        let card = &mut self.decks[acting][index];
        if card.effect() == Some(AbilityEffect::TypeShift) {
            let original = card.card_type;
            let shifted = original.shift_against(target, &mut self.rng);
            if shifted != original {
                card.card_type = shifted;
                let message = format!(
                    "{} {} shifted type from {} to {}!",
                    acting.possessive(),
                    card.name,
                    original,
                    shifted
                );
                self.log.push(message);
            }
        }
    }

    fn attack(&mut self, side: Side) {
        let defending = side.other();
        let (Some(attacker_index), Some(defender_index)) = (self.active_index(side), self.active_index(defending))
        else {
            self.abandon("Error: Missing active cards. Battle will restart.");
            return;
        };

        for (s, i) in [(side, attacker_index), (defending, defender_index)] {
            if !validate_card(&mut self.decks[s][i], &self.config).valid {
                let message = match s {
                    Side::Player => "Error: Your active card is invalid. Battle will restart.",
                    Side::Opponent => "Error: Opponent active card is invalid. Battle will restart.",
                };
                self.abandon(message);
                return;
            }
        }

        let attacker = &self.decks[side][attacker_index];
        let attacker_id = attacker.id.clone();
        let attacker_name = attacker.name.clone();
        let attacker_effect = attacker.effect();
        let follow_up = self.double_strike.contains(&attacker_id);

        let damage = compute_damage(
            &self.decks[side][attacker_index],
            &self.decks[defending][defender_index],
            &mut self.log,
        );

        let defender = &mut self.decks[defending][defender_index];
        defender.take_damage(damage);
        let defeated = defender.is_defeated();
        let defender_id = defender.id.clone();
        let defender_name = defender.name.clone();

        let verb = if follow_up { "attacks again" } else { "attacks" };
        self.log.push(format!(
            "{} {} {} for {} damage!",
            side.possessive(),
            attacker_name,
            verb,
            damage
        ));

        if defeated {
            self.log
                .push(format!("{} {} is defeated!", defending.possessive(), defender_name));
            if let Some(pos) = self.decks[defending].iter().position(|c| c.id == defender_id) {
                self.decks[defending].remove(pos);
            }
            self.active[defending] = None;

            if self.decks[defending].is_empty() {
                self.end(match side {
                    Side::Player => BattleOutcome::Victory,
                    Side::Opponent => BattleOutcome::Defeat,
                });
                return;
            }
            if !self.promote(defending) {
                return;
            }
        }

        if !follow_up && attacker_effect == Some(AbilityEffect::DoubleAttack) {
            self.double_strike.insert(attacker_id);
            let owner = match side {
                Side::Player => "",
                Side::Opponent => "Opponent's ",
            };
            self.log
                .push(format!("{}{}'s Double Strike ability activates!", owner, attacker_name));
            if side == Side::Opponent {
                self.scheduler
                    .schedule(TurnKind::OpponentFollowUp, self.config.double_strike_delay);
            }
            return;
        }

        self.end_turn(side);
    }

    /// Make the first card of a deck active. Returns `false` if the battle
    /// had to be abandoned.
    fn promote(&mut self, side: Side) -> bool {
        let Some(card) = self.decks[side].first_mut() else {
            return false;
        };
        if !validate_card(card, &self.config).valid {
            self.abandon("Error: Could not select the next card. Battle will restart.");
            return false;
        }

        let id = card.id.clone();
        let message = match side {
            Side::Player => format!("You send out {}!", card.name),
            Side::Opponent => format!("Opponent sends out {}!", card.name),
        };
        self.active[side] = Some(id);
        self.log.push(message);
        true
    }

    fn end_turn(&mut self, side: Side) {
        self.double_strike.clear();
        self.begin_turn(side.other());
    }

    fn abandon(&mut self, message: &str) {
        warn!(turn = self.turn, reason = message, "battle abandoned");
        self.log.push(message);
        self.end(BattleOutcome::Abandoned);
    }

    fn end(&mut self, outcome: BattleOutcome) {
        self.phase = BattlePhase::Ended(outcome);
        self.scheduler.cancel();
        self.double_strike.clear();
        self.active = SideMap::with_value(None);

        match outcome {
            BattleOutcome::Victory => self.log.push_as("You won the battle!", LogCategory::Victory),
            BattleOutcome::Defeat => self.log.push_as("You lost the battle!", LogCategory::Defeat),
            BattleOutcome::Abandoned => {}
        }
        info!(?outcome, turn = self.turn, "battle ended");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardType, Rarity, SpecialAbility};
    use std::time::Duration;

    fn card(id: &str, card_type: CardType, hp: u32, attack: u32) -> Card {
        Card::new(id, format!("Card {}", id), card_type, Rarity::Common).with_stats(hp, attack)
    }

    fn battle(player: Vec<Card>, opponent: Vec<Card>) -> Battle {
        let mut battle = Battle::new(player, opponent, &ArenaConfig::default(), GameRng::new(7));
        battle.start().unwrap();
        battle
    }

    #[test]
    fn test_start_sets_up_first_turn() {
        let b = battle(
            vec![card("p1", CardType::Fire, 50, 10), card("p2", CardType::Water, 50, 10)],
            vec![card("o1", CardType::Water, 40, 5)],
        );

        assert!(b.is_player_turn());
        assert_eq!(b.turn(), 1);
        assert_eq!(b.active_card(Side::Player).unwrap().id.as_str(), "p1");
        assert_eq!(b.active_card(Side::Opponent).unwrap().id.as_str(), "o1");
        assert!(b.log().contains("Your Card p1 faces opponent's Card o1!"));
    }

    #[test]
    fn test_start_rejects_bad_decks() {
        let config = ArenaConfig::default();
        let mut empty = Battle::new(Vec::new(), vec![card("o1", CardType::Fire, 10, 1)], &config, GameRng::new(1));
        assert!(matches!(empty.start(), Err(ArenaError::InvalidDeck(_))));
        assert_eq!(empty.phase(), BattlePhase::NotStarted);

        let nameless = Card::new("p1", "", CardType::Fire, Rarity::Common);
        let mut invalid = Battle::new(vec![nameless], vec![card("o1", CardType::Fire, 10, 1)], &config, GameRng::new(1));
        assert!(matches!(
            invalid.start(),
            Err(ArenaError::Validation { index: 0, .. })
        ));

        let mut started = battle(vec![card("p1", CardType::Fire, 10, 1)], vec![card("o1", CardType::Fire, 10, 1)]);
        assert_eq!(started.start(), Err(ArenaError::WrongPhase("battle already started")));
    }

    #[test]
    fn test_attack_schedules_opponent() {
        let mut b = battle(
            vec![card("p1", CardType::Fire, 50, 10)],
            vec![card("o1", CardType::Fire, 50, 5)],
        );

        assert_eq!(b.player_attack(), ActionOutcome::Applied);
        assert_eq!(b.active_card(Side::Opponent).unwrap().hp, 40);
        assert_eq!(b.to_act(), Side::Opponent);
        assert_eq!(
            b.pending_turn(),
            Some(ScheduledTurn {
                kind: TurnKind::OpponentTurn,
                delay: Duration::from_millis(1000)
            })
        );

        // Not the player's turn any more
        assert_eq!(b.player_attack(), ActionOutcome::Ignored);
        assert_eq!(b.skip_turn(), ActionOutcome::Ignored);

        assert_eq!(b.run_pending(), ActionOutcome::Applied);
        assert_eq!(b.active_card(Side::Player).unwrap().hp, 45);
        assert!(b.is_player_turn());
        assert_eq!(b.turn(), 3);
        assert_eq!(b.run_pending(), ActionOutcome::Ignored);
    }

    #[test]
    fn test_exact_lethal_promotes_next_card() {
        let mut b = battle(
            vec![card("p1", CardType::Fire, 50, 10)],
            vec![card("o1", CardType::Fire, 10, 5), card("o2", CardType::Water, 30, 5)],
        );

        b.player_attack();
        assert_eq!(b.deck(Side::Opponent).len(), 1);
        assert_eq!(b.active_card(Side::Opponent).unwrap().id.as_str(), "o2");
        assert!(b.log().contains("Opponent's Card o1 is defeated!"));
        assert!(b.log().contains("Opponent sends out Card o2!"));
        assert!(b.is_active());
    }

    #[test]
    fn test_player_loses_when_deck_empties() {
        let mut b = battle(
            vec![card("p1", CardType::Fire, 5, 1)],
            vec![card("o1", CardType::Fire, 50, 5)],
        );

        b.skip_turn();
        b.run_pending();

        assert_eq!(b.outcome(), Some(BattleOutcome::Defeat));
        assert!(b.deck(Side::Player).is_empty());
        assert!(b.active_card(Side::Player).is_none());
        assert_eq!(b.log().last().unwrap().category, LogCategory::Defeat);
        assert_eq!(b.pending_turn(), None);
    }

    #[test]
    fn test_switch_card() {
        let mut b = battle(
            vec![card("p1", CardType::Fire, 50, 10), card("p2", CardType::Water, 50, 10)],
            vec![card("o1", CardType::Fire, 50, 5)],
        );

        assert_eq!(b.switch_card(5), ActionOutcome::Rejected);
        assert_eq!(b.log().last().unwrap().message, "Invalid card selection.");
        assert_eq!(b.switch_card(0), ActionOutcome::Rejected);
        assert_eq!(b.log().last().unwrap().message, "That card is already active.");
        assert!(b.is_player_turn());

        assert_eq!(b.switch_card(1), ActionOutcome::Applied);
        assert_eq!(b.active_card(Side::Player).unwrap().id.as_str(), "p2");
        assert!(b.log().contains("You switched from Card p1 to Card p2!"));
        assert_eq!(b.to_act(), Side::Opponent);
    }

    #[test]
    fn test_player_double_strike_is_one_shot() {
        let striker = card("p1", CardType::Fire, 50, 5).with_ability(SpecialAbility::double_strike());
        let mut b = battle(vec![striker], vec![card("o1", CardType::Fire, 100, 1)]);

        b.player_attack();
        assert!(b.is_player_turn());
        assert!(b.double_strike_armed(Side::Player));
        assert!(b.log().contains("Card p1's Double Strike ability activates!"));

        b.player_attack();
        assert!(!b.double_strike_armed(Side::Player));
        assert_eq!(b.to_act(), Side::Opponent);
        assert!(b.log().contains("Your Card p1 attacks again for 5 damage!"));
        assert_eq!(b.active_card(Side::Opponent).unwrap().hp, 90);

        // Re-triggers on the next turn
        b.run_pending();
        b.player_attack();
        assert!(b.double_strike_armed(Side::Player));
    }

    #[test]
    fn test_opponent_double_strike_schedules_follow_up() {
        let striker = card("o1", CardType::Fire, 50, 5).with_ability(SpecialAbility::double_strike());
        let mut b = battle(vec![card("p1", CardType::Fire, 50, 1)], vec![striker]);

        b.skip_turn();
        b.run_pending();
        assert_eq!(
            b.pending_turn().map(|t| t.kind),
            Some(TurnKind::OpponentFollowUp)
        );
        assert_eq!(b.to_act(), Side::Opponent);
        assert!(b.log().contains("Opponent's Card o1's Double Strike ability activates!"));

        b.run_pending();
        assert!(b.is_player_turn());
        assert_eq!(b.active_card(Side::Player).unwrap().hp, 40);
    }

    #[test]
    fn test_heal_at_turn_start() {
        let healer = card("p1", CardType::Fire, 50, 1).with_ability(SpecialAbility::heal());
        let mut b = battle(vec![healer], vec![card("o1", CardType::Fire, 50, 15)]);

        b.skip_turn();
        b.run_pending();
        // Took 15, healed 10 at the start of the player's turn
        assert_eq!(b.active_card(Side::Player).unwrap().hp, 45);
        assert!(b.log().contains("Your Card p1 healed for 10 HP!"));
    }

    #[test]
    fn test_type_shift_on_own_turn() {
        let shifter = card("p1", CardType::Water, 50, 10).with_ability(SpecialAbility::type_shift());
        let b = battle(vec![shifter], vec![card("o1", CardType::Water, 50, 5)]);

        assert_eq!(b.active_card(Side::Player).unwrap().card_type, CardType::Nature);
        assert!(b.log().contains("Your Card p1 shifted type from Water to Nature!"));
    }

    #[test]
    fn test_forfeit_cancels_pending() {
        let mut b = battle(vec![card("p1", CardType::Fire, 50, 1)], vec![card("o1", CardType::Fire, 50, 1)]);
        b.skip_turn();
        assert!(b.pending_turn().is_some());

        assert_eq!(b.forfeit(), ActionOutcome::Applied);
        assert_eq!(b.outcome(), Some(BattleOutcome::Abandoned));
        assert_eq!(b.pending_turn(), None);
        assert_eq!(b.run_pending(), ActionOutcome::Ignored);
        assert_eq!(b.forfeit(), ActionOutcome::Ignored);
    }

    #[test]
    fn test_into_parts_carries_damage() {
        let mut b = battle(
            vec![card("p1", CardType::Fire, 50, 50)],
            vec![card("o1", CardType::Fire, 20, 5)],
        );
        b.player_attack();

        let parts = b.into_parts();
        assert_eq!(parts.outcome, Some(BattleOutcome::Victory));
        assert_eq!(parts.player_deck[0].hp, 50);
        assert!(parts.opponent_deck.is_empty());
        assert!(parts.log.contains("You won the battle!"));
    }
}
