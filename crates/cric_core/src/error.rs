use thiserror::Error;

use crate::store::RecordId;
use crate::validation::ValidationError;

/// Entity names used in lookup-miss errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Team,
    Player,
    Ground,
    Inning,
    Match,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Team => "team",
            EntityKind::Player => "player",
            EntityKind::Ground => "ground",
            EntityKind::Inning => "inning",
            EntityKind::Match => "match",
        };
        write!(f, "{}", name)
    }
}

/// Every failure a core operation can reject with. None of these are
/// retried internally and none abort the process; callers recover by
/// correcting input.
#[derive(Error, Debug, PartialEq)]
pub enum CricketError {
    #[error("{entity} with id {id} does not exist")]
    NotFound { entity: EntityKind, id: RecordId },

    #[error("team name '{name}' already exists, team names must be unique")]
    DuplicateName { name: String },

    #[error("player {player_id} is already in team {team_id}")]
    DuplicatePlayerInTeam { team_id: RecordId, player_id: RecordId },

    #[error("player {player_id} is not a member of team {team_id}")]
    PlayerNotInTeam { team_id: RecordId, player_id: RecordId },

    #[error(
        "cannot record more than {limit} overs for inning {}",
        .inning_id.map(|id| id.to_string()).unwrap_or_else(|| "(unsaved)".to_string())
    )]
    OverLimitExceeded { inning_id: Option<RecordId>, limit: u32 },

    #[error("validation failed with {} violation(s)", .0.len())]
    Validation(Vec<ValidationError>),
}

pub type Result<T> = std::result::Result<T, CricketError>;
