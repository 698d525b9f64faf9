//! In-memory store backend, used by tests and as the default collaborator.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

use super::{Clock, Record, RecordId, RecordStore};
use crate::models::{Player, Team, TeamPlayerRelation};

/// One table of records keyed by id, with a store-assigned id sequence.
#[derive(Debug)]
pub struct InMemoryStore<T> {
    rows: BTreeMap<RecordId, T>,
    sequence: RecordId,
}

impl<T> InMemoryStore<T> {
    pub fn new() -> Self {
        Self { rows: BTreeMap::new(), sequence: 0 }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record + Clone> RecordStore<T> for InMemoryStore<T> {
    fn get(&self, id: RecordId) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn save(&mut self, mut record: T) -> T {
        let id = match record.record_id() {
            Some(id) => {
                // Keep the sequence ahead of externally assigned ids.
                self.sequence = self.sequence.max(id);
                id
            }
            None => {
                self.sequence += 1;
                record.assign_id(self.sequence);
                self.sequence
            }
        };
        self.rows.insert(id, record.clone());
        record
    }

    fn save_all(&mut self, records: Vec<T>) -> Vec<T> {
        records.into_iter().map(|record| self.save(record)).collect()
    }

    fn delete(&mut self, id: RecordId) -> bool {
        self.rows.remove(&id).is_some()
    }

    fn delete_all(&mut self) {
        self.rows.clear();
    }

    fn find_by(&self, predicate: &dyn Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|record| predicate(record)).cloned().collect()
    }
}

/// Store backend holding every roster-related table in memory.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    teams: InMemoryStore<Team>,
    players: InMemoryStore<Player>,
    relations: InMemoryStore<TeamPlayerRelation>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

macro_rules! delegate_store {
    ($record:ty, $table:ident) => {
        impl RecordStore<$record> for InMemoryBackend {
            fn get(&self, id: RecordId) -> Option<$record> {
                self.$table.get(id)
            }

            fn save(&mut self, record: $record) -> $record {
                self.$table.save(record)
            }

            fn save_all(&mut self, records: Vec<$record>) -> Vec<$record> {
                self.$table.save_all(records)
            }

            fn delete(&mut self, id: RecordId) -> bool {
                RecordStore::<$record>::delete(&mut self.$table, id)
            }

            fn delete_all(&mut self) {
                RecordStore::<$record>::delete_all(&mut self.$table)
            }

            fn find_by(&self, predicate: &dyn Fn(&$record) -> bool) -> Vec<$record> {
                self.$table.find_by(predicate)
            }
        }
    };
}

delegate_store!(Team, teams);
delegate_store!(Player, players);
delegate_store!(TeamPlayerRelation, relations);

/// Wall-clock dates for production use.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Fixed date for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BattingStyle, BowlingStyle, PlayerRole};

    fn sample(first: &str) -> Player {
        Player::new(
            first.to_string(),
            "Khan".to_string(),
            PlayerRole::AllRounder,
            BattingStyle::RightHanded,
            BowlingStyle::RightArmLegSpin,
        )
    }

    #[test]
    fn save_assigns_sequential_ids() {
        let mut store = InMemoryStore::new();
        let a = store.save(sample("Shadab"));
        let b = store.save(sample("Imad"));
        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn save_keeps_an_existing_id() {
        let mut store = InMemoryStore::new();
        let mut player = sample("Babar");
        player.id = Some(7);
        let saved = store.save(player);
        assert_eq!(saved.id, Some(7));

        // Sequence continues past the external id.
        let next = store.save(sample("Rizwan"));
        assert_eq!(next.id, Some(8));
    }

    #[test]
    fn find_by_filters_and_clones() {
        let mut store = InMemoryStore::new();
        store.save(sample("Naseem"));
        store.save(sample("Haris"));

        let hits = store.find_by(&|p: &Player| p.first_name == "Haris");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].first_name, "Haris");
    }

    #[test]
    fn delete_and_delete_all() {
        let mut store = InMemoryStore::new();
        let saved = store.save(sample("Fakhar"));
        assert!(RecordStore::<Player>::delete(&mut store, saved.id.unwrap()));
        assert!(!RecordStore::<Player>::delete(&mut store, 99));

        store.save(sample("Saim"));
        RecordStore::<Player>::delete_all(&mut store);
        assert!(store.is_empty());
    }
}
