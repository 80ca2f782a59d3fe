//! Card validation and repair.
//!
//! Two card shapes are checked here:
//! - `CardRecord` (from storage): every recoverable defect is repaired in
//!   place, unidentifiable records fail.
//! - `Card` (already typed): only identity and the HP bound can be wrong.
//!
//! ## Repair Rules
//!
//! | Defect                         | Repair                              |
//! |--------------------------------|-------------------------------------|
//! | type missing or unknown        | uniformly random type               |
//! | attack missing or NaN          | `config.default_attack`             |
//! | attack negative                | 0                                   |
//! | hp missing or NaN              | hp = maxHp = `config.default_hp`    |
//! | maxHp missing, NaN or zero     | filled from hp                      |
//! | hp above maxHp                 | clamped to maxHp                    |
//! | ability with unknown effect    | removed                             |
//!
//! A missing card, id or name cannot be repaired and fails validation.

use tracing::{debug, warn};

use crate::cards::{AbilityRecord, Card, CardId, CardRecord, CardType, Rarity};
use crate::core::{ArenaConfig, GameRng, ValidationError};

/// Reason reported for a card that needed no repair.
pub const VALID_REASON: &str = "Card is valid";

/// Outcome of validating one card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationReport {
    /// Whether the card may enter battle.
    pub valid: bool,

    /// Whether anything was changed.
    pub repaired: bool,

    /// Human-readable reason: the failure, the repairs, or `VALID_REASON`.
    pub reason: String,
}

impl ValidationReport {
    /// A card that needed nothing.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            valid: true,
            repaired: false,
            reason: VALID_REASON.to_string(),
        }
    }

    /// A hard failure.
    #[must_use]
    pub fn failed(error: &ValidationError) -> Self {
        Self {
            valid: false,
            repaired: false,
            reason: error.to_string(),
        }
    }

    fn from_repairs(repairs: Vec<String>) -> Self {
        if repairs.is_empty() {
            Self::ok()
        } else {
            Self {
                valid: true,
                repaired: true,
                reason: repairs.join("; "),
            }
        }
    }
}

fn is_number(value: Option<f64>) -> bool {
    value.is_some_and(f64::is_finite)
}

fn identify(has_id: bool, has_name: bool) -> Result<(), ValidationError> {
    if !has_id {
        return Err(ValidationError::MissingId);
    }
    if !has_name {
        return Err(ValidationError::MissingName);
    }
    Ok(())
}

/// Validate a card slot that may be empty.
pub fn validate_slot(
    card: Option<&mut CardRecord>,
    rng: &mut GameRng,
    config: &ArenaConfig,
) -> ValidationReport {
    match card {
        Some(card) => validate_record(card, rng, config),
        None => {
            warn!("card slot is empty");
            ValidationReport::failed(&ValidationError::MissingCard)
        }
    }
}

/// Validate a persisted card, repairing every recoverable defect in place.
///
/// A second call on the same record always reports no repair.
///
/// ```
/// use tcg_arena::battle::validate_record;
/// use tcg_arena::cards::CardRecord;
/// use tcg_arena::core::{ArenaConfig, GameRng};
///
/// let config = ArenaConfig::default();
/// let mut rng = GameRng::new(1);
/// let mut record = CardRecord::new("c-1", "Dark Knight").with_type("Plasma");
///
/// let report = validate_record(&mut record, &mut rng, &config);
/// assert!(report.valid && report.repaired);
/// assert_eq!(record.attack, Some(5.0));
/// assert_eq!(record.hp, Some(30.0));
///
/// let again = validate_record(&mut record, &mut rng, &config);
/// assert!(again.valid && !again.repaired);
/// ```
pub fn validate_record(card: &mut CardRecord, rng: &mut GameRng, config: &ArenaConfig) -> ValidationReport {
    if let Err(error) = identify(card.has_id(), card.has_name()) {
        warn!(id = ?card.id, %error, "card failed validation");
        return ValidationReport::failed(&error);
    }

    let mut repairs = Vec::new();

    let known_type = card
        .card_type
        .as_deref()
        .is_some_and(|t| t.parse::<CardType>().is_ok());
    if !known_type {
        let fixed = CardType::random(rng);
        card.card_type = Some(fixed.name().to_string());
        repairs.push(format!("Fixed invalid card type to {}", fixed));
    }

    match card.attack {
        Some(attack) if attack.is_finite() => {
            if attack < 0.0 {
                card.attack = Some(0.0);
                repairs.push("Clamped negative attack to 0".to_string());
            }
        }
        _ => {
            card.attack = Some(f64::from(config.default_attack));
            repairs.push(format!("Fixed missing attack value to {}", config.default_attack));
        }
    }

    let default_hp = f64::from(config.default_hp);
    match card.hp {
        Some(hp) if hp.is_finite() => {
            if hp < 0.0 {
                card.hp = Some(0.0);
                repairs.push("Clamped negative HP to 0".to_string());
            }
        }
        _ => {
            card.hp = Some(default_hp);
            card.max_hp = Some(default_hp);
            repairs.push(format!("Fixed missing HP value to {}", config.default_hp));
        }
    }

    let hp = card.hp.unwrap_or(default_hp);
    let max_hp_ok = is_number(card.max_hp) && card.max_hp.is_some_and(|m| m > 0.0);
    if !max_hp_ok {
        let filled = if hp > 0.0 { hp } else { default_hp };
        card.max_hp = Some(filled);
        repairs.push(format!("Fixed missing max HP value to {}", filled));
    }

    let max_hp = card.max_hp.unwrap_or(default_hp);
    if hp > max_hp {
        card.hp = Some(max_hp);
        repairs.push(format!("Clamped HP to max HP {}", max_hp));
    }

    if let Some(ability) = card.special_ability.take() {
        if ability.to_ability().is_some() {
            card.special_ability = Some(ability);
        } else {
            repairs.push(format!(
                "Removed unknown special ability {}",
                ability.effect.as_deref().unwrap_or("(none)")
            ));
        }
    }

    let report = ValidationReport::from_repairs(repairs);
    if report.repaired {
        debug!(id = ?card.id, reason = %report.reason, "repaired card");
    }
    report
}

/// Build a battle card from a record without touching the record.
///
/// Fails only when the record cannot be identified.
pub fn repair(card: &CardRecord, rng: &mut GameRng, config: &ArenaConfig) -> Result<Card, ValidationError> {
    identify(card.has_id(), card.has_name())?;

    let mut fixed = card.clone();
    validate_record(&mut fixed, rng, config);
    Ok(card_from_valid_record(fixed, config))
}

/// Convert a record that has passed `validate_record`.
fn card_from_valid_record(record: CardRecord, config: &ArenaConfig) -> Card {
    let card_type = record
        .card_type
        .as_deref()
        .and_then(|t| t.parse().ok())
        .unwrap_or(CardType::Nature);
    let rarity = record
        .rarity
        .as_deref()
        .and_then(|r| r.parse().ok())
        .unwrap_or(Rarity::Common);

    let to_stat = |v: Option<f64>, fallback: u32| v.map_or(fallback, |v| v.max(0.0).floor() as u32);
    let max_hp = to_stat(record.max_hp, config.default_hp).max(1);
    let hp = to_stat(record.hp, config.default_hp).min(max_hp);

    Card {
        id: CardId::new(record.id.unwrap_or_default()),
        name: record.name.unwrap_or_default(),
        card_type,
        rarity,
        hp,
        max_hp,
        attack: to_stat(record.attack, config.default_attack),
        special_ability: record.special_ability.as_ref().and_then(AbilityRecord::to_ability),
        value: record.value.filter(|v| v.is_finite()).unwrap_or(0.0),
    }
}

/// Read-only hard check of a battle card.
pub fn check_card(card: &Card) -> Result<(), ValidationError> {
    identify(!card.id.is_empty(), !card.name.trim().is_empty())
}

/// Validate a battle card, repairing its HP in place.
pub fn validate_card(card: &mut Card, config: &ArenaConfig) -> ValidationReport {
    if let Err(error) = check_card(card) {
        warn!(id = %card.id, %error, "card failed validation");
        return ValidationReport::failed(&error);
    }

    let mut repairs = Vec::new();
    if card.max_hp == 0 {
        card.hp = config.default_hp;
        card.max_hp = config.default_hp;
        repairs.push(format!("Fixed missing HP value to {}", config.default_hp));
    }
    if card.hp > card.max_hp {
        card.hp = card.max_hp;
        repairs.push(format!("Clamped HP to max HP {}", card.max_hp));
    }

    let report = ValidationReport::from_repairs(repairs);
    if report.repaired {
        debug!(id = %card.id, reason = %report.reason, "repaired card");
    }
    report
}
