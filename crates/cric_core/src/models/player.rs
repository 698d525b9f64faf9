use serde::{Deserialize, Serialize};

use crate::store::{Record, RecordId};

/// A cricketer. Owned independently of any team; `team_id` is the
/// back-reference to the current team, if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: Option<RecordId>,
    pub first_name: String,
    pub last_name: String,
    pub role: PlayerRole,
    pub batting_style: BattingStyle,
    pub bowling_style: BowlingStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<RecordId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerRole {
    Batter,
    Bowler,
    AllRounder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattingStyle {
    LeftHanded,
    RightHanded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BowlingStyle {
    LeftArmFast,
    RightArmFast,
    LeftArmOffSpin,
    RightArmOffSpin,
    LeftArmChinaman,
    RightArmLegSpin,
}

impl Player {
    pub fn new(
        first_name: String,
        last_name: String,
        role: PlayerRole,
        batting_style: BattingStyle,
        bowling_style: BowlingStyle,
    ) -> Self {
        Self { id: None, first_name, last_name, role, batting_style, bowling_style, team_id: None }
    }

    /// Structural comparison by first name, last name, role and batting
    /// style. Ids and the current team never participate.
    pub fn player_equals(&self, other: &Player) -> bool {
        self.first_name == other.first_name
            && self.last_name == other.last_name
            && self.role == other.role
            && self.batting_style == other.batting_style
    }
}

impl Record for Player {
    fn record_id(&self) -> Option<RecordId> {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }
}
