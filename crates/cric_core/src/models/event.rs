use serde::{Deserialize, Serialize};

use crate::store::{Record, RecordId};

/// Run value of a delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreType {
    NoRun,
    Single,
    Double,
    Triple,
    Four,
    Six,
}

impl ScoreType {
    pub fn runs(&self) -> u32 {
        match self {
            ScoreType::NoRun => 0,
            ScoreType::Single => 1,
            ScoreType::Double => 2,
            ScoreType::Triple => 3,
            ScoreType::Four => 4,
            ScoreType::Six => 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraType {
    Wide,
    NoBall,
    Bye,
    LegBye,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WicketType {
    Bowled,
    Caught,
    LegBeforeWicket,
    RunOut,
    Stumped,
    HitWicket,
}

/// Outcome of one delivery.
///
/// `ball_id` points back at the owning ball; comparisons use that identity
/// instead of recursing into the ball itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BallEvent {
    pub id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ball_id: Option<RecordId>,
    #[serde(flatten)]
    pub kind: BallEventKind,
}

/// The three mutually exclusive outcome shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BallEventKind {
    Score {
        score_type: ScoreType,
    },
    Extra {
        extra_type: ExtraType,
        score_type: ScoreType,
    },
    Wicket {
        wicket_type: WicketType,
        #[serde(skip_serializing_if = "Option::is_none")]
        fielder_id: Option<RecordId>,
    },
}

impl BallEvent {
    pub fn score(score_type: ScoreType) -> Self {
        Self { id: None, ball_id: None, kind: BallEventKind::Score { score_type } }
    }

    pub fn extra(extra_type: ExtraType, score_type: ScoreType) -> Self {
        Self { id: None, ball_id: None, kind: BallEventKind::Extra { extra_type, score_type } }
    }

    pub fn wicket(wicket_type: WicketType, fielder_id: Option<RecordId>) -> Self {
        Self { id: None, ball_id: None, kind: BallEventKind::Wicket { wicket_type, fielder_id } }
    }

    /// Runs credited by this outcome. Wickets score nothing by themselves.
    pub fn runs(&self) -> u32 {
        match &self.kind {
            BallEventKind::Score { score_type } => score_type.runs(),
            BallEventKind::Extra { score_type, .. } => score_type.runs(),
            BallEventKind::Wicket { .. } => 0,
        }
    }

    pub fn is_wicket(&self) -> bool {
        matches!(self.kind, BallEventKind::Wicket { .. })
    }

    /// Variant first (different variants are never equal), then the
    /// variant's own fields, then the identity of the owning ball. An
    /// absent fielder only equals another absent fielder.
    pub fn event_equals(&self, other: &BallEvent) -> bool {
        let kind_equal = match (&self.kind, &other.kind) {
            (BallEventKind::Score { score_type: a }, BallEventKind::Score { score_type: b }) => {
                a == b
            }
            (
                BallEventKind::Extra { extra_type: a_extra, score_type: a_score },
                BallEventKind::Extra { extra_type: b_extra, score_type: b_score },
            ) => a_score == b_score && a_extra == b_extra,
            (
                BallEventKind::Wicket { wicket_type: a_wicket, fielder_id: a_fielder },
                BallEventKind::Wicket { wicket_type: b_wicket, fielder_id: b_fielder },
            ) => {
                a_wicket == b_wicket
                    && match (a_fielder, b_fielder) {
                        (None, None) => true,
                        (Some(a), Some(b)) => a == b,
                        _ => false,
                    }
            }
            _ => false,
        };
        kind_equal && self.ball_id == other.ball_id
    }
}

impl Record for BallEvent {
    fn record_id(&self) -> Option<RecordId> {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }
}
