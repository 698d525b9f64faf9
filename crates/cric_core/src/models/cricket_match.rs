use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Ground, Inning, Team, TeamSide, Toss};
use crate::store::{Record, RecordId};

/// A complete two-innings fixture. Composition is a pure aggregate:
/// beyond carrying all of its parts there is nothing to validate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: Option<RecordId>,
    pub match_date: NaiveDate,
    pub ground: Ground,
    pub team_a: Team,
    pub team_b: Team,
    pub toss: Toss,
    pub first_innings: Inning,
    pub second_innings: Inning,
    pub number_of_overs: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<TeamSide>,
}

impl Match {
    pub fn new(
        match_date: NaiveDate,
        ground: Ground,
        team_a: Team,
        team_b: Team,
        toss: Toss,
        first_innings: Inning,
        second_innings: Inning,
        number_of_overs: u32,
    ) -> Self {
        Self {
            id: None,
            match_date,
            ground,
            team_a,
            team_b,
            toss,
            first_innings,
            second_innings,
            number_of_overs,
            winner: None,
        }
    }

    pub fn with_winner(mut self, winner: TeamSide) -> Self {
        self.winner = Some(winner);
        self
    }

    /// Depth-first structural comparison, short-circuiting at the first
    /// unequal component: date, ground, team A, team B, toss, first
    /// innings, second innings, over limit, winner.
    pub fn match_equals(&self, other: &Match) -> bool {
        self.match_date == other.match_date
            && self.ground.ground_equals(&other.ground)
            && self.team_a.team_equals(&other.team_a)
            && self.team_b.team_equals(&other.team_b)
            && self.toss.toss_equals(&other.toss)
            && self.first_innings.inning_equals(&other.first_innings)
            && self.second_innings.inning_equals(&other.second_innings)
            && self.number_of_overs == other.number_of_overs
            && self.winner == other.winner
    }
}

impl Record for Match {
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
    use crate::models::{BallEventKind, WicketType};

    #[test]
    fn identical_inputs_build_equal_matches() {
        let a = fixtures::full_match();
        let b = fixtures::full_match();
        assert!(a.match_equals(&b));
    }

    #[test]
    fn changing_one_leaf_field_breaks_equality() {
        let a = fixtures::full_match();

        // Flip a single wicket type deep inside the second innings.
        let mut b = fixtures::full_match();
        let event = &mut b.second_innings.overs[0].balls[2].event;
        assert!(event.is_wicket());
        event.kind = BallEventKind::Wicket { wicket_type: WicketType::Stumped, fielder_id: None };
        assert!(!a.match_equals(&b));
    }

    #[test]
    fn winner_participates_in_comparison() {
        let a = fixtures::full_match().with_winner(TeamSide::TeamA);
        let unset = fixtures::full_match();
        let other = fixtures::full_match().with_winner(TeamSide::TeamB);

        assert!(!a.match_equals(&unset));
        assert!(!a.match_equals(&other));
        assert!(a.match_equals(&fixtures::full_match().with_winner(TeamSide::TeamA)));
    }

    #[test]
    fn date_mismatch_short_circuits() {
        let a = fixtures::full_match();
        let mut b = fixtures::full_match();
        b.match_date = a.match_date.succ_opt().unwrap();
        assert!(!a.match_equals(&b));
    }
}
