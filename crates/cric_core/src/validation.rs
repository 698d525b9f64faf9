//! Field validation for the record-keeping models.
//!
//! Validators collect every violated constraint instead of stopping at the
//! first, so a rejected request carries the complete list in one pass.

use std::fmt;

use crate::models::{Ground, Player, TeamSide, Toss};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A name field is outside its allowed character range.
    NameLength { field: &'static str, min: usize, max: usize, found: usize },

    /// A toss cannot have the same side batting and bowling.
    SameBattingAndBowlingSide(TeamSide),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NameLength { field, min, max, found } => {
                write!(f, "{} must be {}-{} characters long, found {}", field, min, max, found)
            }
            ValidationError::SameBattingAndBowlingSide(side) => {
                write!(f, "batting and bowling side are both {:?}", side)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Field validation utility. Each `validate_*` returns all violations,
/// never just the first.
pub struct FieldValidator;

impl FieldValidator {
    const PLAYER_NAME_RANGE: (usize, usize) = (2, 20);
    const TEAM_NAME_RANGE: (usize, usize) = (5, 30);
    const GROUND_NAME_RANGE: (usize, usize) = (5, 30);

    pub fn validate_player(player: &Player) -> Result<(), Vec<ValidationError>> {
        let mut violations = Vec::new();
        Self::check_length("first_name", &player.first_name, Self::PLAYER_NAME_RANGE, &mut violations);
        Self::check_length("last_name", &player.last_name, Self::PLAYER_NAME_RANGE, &mut violations);
        Self::done(violations)
    }

    pub fn validate_team_name(name: &str) -> Result<(), Vec<ValidationError>> {
        let mut violations = Vec::new();
        Self::check_length("team_name", name, Self::TEAM_NAME_RANGE, &mut violations);
        Self::done(violations)
    }

    pub fn validate_ground(ground: &Ground) -> Result<(), Vec<ValidationError>> {
        let mut violations = Vec::new();
        Self::check_length("ground_name", &ground.name, Self::GROUND_NAME_RANGE, &mut violations);
        Self::done(violations)
    }

    pub fn validate_toss(toss: &Toss) -> Result<(), Vec<ValidationError>> {
        let mut violations = Vec::new();
        if toss.batting_side == toss.bowling_side {
            violations.push(ValidationError::SameBattingAndBowlingSide(toss.batting_side));
        }
        Self::done(violations)
    }

    fn check_length(
        field: &'static str,
        value: &str,
        (min, max): (usize, usize),
        violations: &mut Vec<ValidationError>,
    ) {
        let found = value.chars().count();
        if found < min || found > max {
            violations.push(ValidationError::NameLength { field, min, max, found });
        }
    }

    fn done(violations: Vec<ValidationError>) -> Result<(), Vec<ValidationError>> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
