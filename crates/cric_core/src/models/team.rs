use serde::{Deserialize, Serialize};

use super::Player;
use crate::store::{Record, RecordId};

/// A team and its current roster, in membership order.
///
/// The roster is a back-reference view over players; Team does not own
/// them. An empty roster and an absent one are the same value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default)]
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(name: String) -> Self {
        Self { id: None, name, players: Vec::new() }
    }

    pub fn has_member(&self, player_id: RecordId) -> bool {
        self.players.iter().any(|p| p.id == Some(player_id))
    }

    /// Structural comparison: roster pairwise in membership order, then
    /// name. A mismatch at any position fails the whole comparison.
    pub fn team_equals(&self, other: &Team) -> bool {
        if self.players.len() != other.players.len() {
            return false;
        }
        for (mine, theirs) in self.players.iter().zip(&other.players) {
            if !mine.player_equals(theirs) {
                return false;
            }
        }
        self.name == other.name
    }
}

impl Record for Team {
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

    #[test]
    fn roster_order_is_significant() {
        let a = fixtures::player("Babar", "Azam");
        let b = fixtures::player("Mohammad", "Rizwan");

        let mut first = Team::new("LAHORE QALANDARS".to_string());
        first.players = vec![a.clone(), b.clone()];
        let mut second = Team::new("LAHORE QALANDARS".to_string());
        second.players = vec![b, a];

        assert!(!first.team_equals(&second));
    }

    #[test]
    fn empty_rosters_compare_equal() {
        let first = Team::new("KARACHI KINGS".to_string());
        let second = Team::new("KARACHI KINGS".to_string());
        assert!(first.team_equals(&second));
    }

    #[test]
    fn ids_do_not_affect_comparison() {
        let mut first = Team::new("QUETTA GLADIATORS".to_string());
        first.id = Some(1);
        let mut second = Team::new("QUETTA GLADIATORS".to_string());
        second.id = Some(2);
        assert!(first.team_equals(&second));
    }
}
