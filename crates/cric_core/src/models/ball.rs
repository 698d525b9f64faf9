use serde::{Deserialize, Serialize};

use super::{BallEvent, Player};
use crate::store::{Record, RecordId};

/// One delivery: the three player roles involved and its recorded outcome.
/// The event is owned exclusively by this ball; the players are referenced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: Option<RecordId>,
    pub striker: Player,
    pub non_striker: Player,
    pub bowler: Player,
    pub event: BallEvent,
}

impl Ball {
    pub fn new(striker: Player, non_striker: Player, bowler: Player, event: BallEvent) -> Self {
        Self { id: None, striker, non_striker, bowler, event }
    }

    /// Point the owned event back at this ball. Call once the ball has
    /// been assigned an id by the store.
    pub fn claim_event(&mut self) {
        self.event.ball_id = self.id;
    }

    pub fn ball_equals(&self, other: &Ball) -> bool {
        self.striker.player_equals(&other.striker)
            && self.non_striker.player_equals(&other.non_striker)
            && self.bowler.player_equals(&other.bowler)
            && self.event.event_equals(&other.event)
    }
}

impl Record for Ball {
    fn record_id(&self) -> Option<RecordId> {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;
    use crate::models::{BallEvent, ScoreType};

    fn delivery(event: BallEvent) -> Ball {
        Ball::new(
            fixtures::player("Babar", "Azam"),
            fixtures::player("Mohammad", "Rizwan"),
            fixtures::player("Shaheen", "Afridi"),
            event,
        )
    }

    #[test]
    fn claimed_event_points_back_at_its_ball() {
        let mut ball = delivery(BallEvent::score(ScoreType::Four));
        ball.assign_id(12);
        ball.claim_event();
        assert_eq!(ball.event.ball_id, Some(12));
    }

    #[test]
    fn a_different_bowler_breaks_comparison() {
        let first = delivery(BallEvent::score(ScoreType::Single));
        let mut second = delivery(BallEvent::score(ScoreType::Single));
        assert!(first.ball_equals(&second));

        second.bowler = fixtures::player("Haris", "Rauf");
        assert!(!first.ball_equals(&second));
    }

    #[test]
    fn owning_ball_identity_splits_otherwise_equal_deliveries() {
        let mut first = delivery(BallEvent::score(ScoreType::NoRun));
        first.assign_id(1);
        first.claim_event();

        let mut second = delivery(BallEvent::score(ScoreType::NoRun));
        second.assign_id(2);
        second.claim_event();

        assert!(!first.ball_equals(&second));
    }
}
