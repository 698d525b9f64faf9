use serde::{Deserialize, Serialize};

use super::Ball;
use crate::store::{Record, RecordId};

/// A consecutive group of deliveries. Grouping performs no ball-count
/// validation; an over records whatever was bowled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Over {
    pub id: Option<RecordId>,
    pub balls: Vec<Ball>,
}

impl Over {
    pub fn new(balls: Vec<Ball>) -> Self {
        Self { id: None, balls }
    }

    pub fn total_runs(&self) -> u32 {
        self.balls.iter().map(|ball| ball.event.runs()).sum()
    }

    pub fn wickets(&self) -> usize {
        self.balls.iter().filter(|ball| ball.event.is_wicket()).count()
    }

    /// Structural comparison: same length, then pairwise in delivery order.
    pub fn over_equals(&self, other: &Over) -> bool {
        if self.balls.len() != other.balls.len() {
            return false;
        }
        for (mine, theirs) in self.balls.iter().zip(&other.balls) {
            if !mine.ball_equals(theirs) {
                return false;
            }
        }
        true
    }
}

impl Record for Over {
    fn record_id(&self) -> Option<RecordId> {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }
}
