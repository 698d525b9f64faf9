use serde::{Deserialize, Serialize};

use super::{Over, Team};
use crate::error::{CricketError, Result};
use crate::store::{Record, RecordId};

/// One team's turn batting, bounded by a configured over limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inning {
    pub id: Option<RecordId>,
    pub number_of_overs: u32,
    pub batting_side: Team,
    pub bowling_side: Team,
    pub overs: Vec<Over>,
}

impl Inning {
    pub fn new(number_of_overs: u32, batting_side: Team, bowling_side: Team) -> Self {
        Self { id: None, number_of_overs, batting_side, bowling_side, overs: Vec::new() }
    }

    /// Record the next over. The append is rejected without touching the
    /// inning when the configured limit is already reached.
    pub fn append_over(&mut self, over: Over) -> Result<()> {
        if self.overs.len() as u32 >= self.number_of_overs {
            return Err(CricketError::OverLimitExceeded {
                inning_id: self.id,
                limit: self.number_of_overs,
            });
        }
        self.overs.push(over);
        Ok(())
    }

    pub fn total_runs(&self) -> u32 {
        self.overs.iter().map(Over::total_runs).sum()
    }

    pub fn wickets(&self) -> usize {
        self.overs.iter().map(Over::wickets).sum()
    }

    /// Structural comparison: overs pairwise in order, then the over
    /// limit and both sides.
    pub fn inning_equals(&self, other: &Inning) -> bool {
        if self.overs.len() != other.overs.len() {
            return false;
        }
        for (mine, theirs) in self.overs.iter().zip(&other.overs) {
            if !mine.over_equals(theirs) {
                return false;
            }
        }
        self.number_of_overs == other.number_of_overs
            && self.batting_side.team_equals(&other.batting_side)
            && self.bowling_side.team_equals(&other.bowling_side)
    }
}

impl Record for Inning {
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

    fn single_run_over() -> Over {
        fixtures::over(vec![BallEvent::score(ScoreType::Single)])
    }

    #[test]
    fn appending_past_the_limit_is_rejected_atomically() {
        let mut inning = fixtures::inning(2);
        inning.id = Some(40);
        inning.append_over(single_run_over()).unwrap();
        inning.append_over(single_run_over()).unwrap();

        let err = inning.append_over(single_run_over()).unwrap_err();
        assert_eq!(err, CricketError::OverLimitExceeded { inning_id: Some(40), limit: 2 });
        assert_eq!(inning.overs.len(), 2);
    }

    #[test]
    fn runs_accumulate_across_overs() {
        let mut inning = fixtures::inning(5);
        inning
            .append_over(fixtures::over(vec![
                BallEvent::score(ScoreType::Four),
                BallEvent::score(ScoreType::Six),
            ]))
            .unwrap();
        inning.append_over(single_run_over()).unwrap();
        assert_eq!(inning.total_runs(), 11);
        assert_eq!(inning.wickets(), 0);
    }
}
