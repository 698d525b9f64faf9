use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::store::{Record, RecordId};

/// One interval of a player's membership in a team.
///
/// Relations are append-only history: a closed relation (end date set) is
/// never reopened, changed or deleted. Per player, at most one open
/// relation exists at a time and it names the player's current team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPlayerRelation {
    pub id: Option<RecordId>,
    pub team_id: RecordId,
    pub player_id: RecordId,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl TeamPlayerRelation {
    pub fn open(team_id: RecordId, player_id: RecordId, start_date: NaiveDate) -> Self {
        Self { id: None, team_id, player_id, start_date, end_date: None }
    }

    pub fn is_open(&self) -> bool {
        self.end_date.is_none()
    }
}

impl Record for TeamPlayerRelation {
    fn record_id(&self) -> Option<RecordId> {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }
}
