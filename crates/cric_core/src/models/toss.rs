use serde::{Deserialize, Serialize};

use crate::store::{Record, RecordId};

/// The two competing sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    TeamA,
    TeamB,
}

/// Coin toss outcome: who won it and which side bats first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toss {
    pub id: Option<RecordId>,
    pub winning_side: TeamSide,
    pub batting_side: TeamSide,
    pub bowling_side: TeamSide,
}

impl Toss {
    pub fn new(winning_side: TeamSide, batting_side: TeamSide, bowling_side: TeamSide) -> Self {
        Self { id: None, winning_side, batting_side, bowling_side }
    }

    pub fn toss_equals(&self, other: &Toss) -> bool {
        self.winning_side == other.winning_side
            && self.batting_side == other.batting_side
            && self.bowling_side == other.bowling_side
    }
}

impl Record for Toss {
    fn record_id(&self) -> Option<RecordId> {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }
}
