use serde::{Deserialize, Serialize};

use crate::store::{Record, RecordId};

/// A venue a match is played at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ground {
    pub id: Option<RecordId>,
    pub name: String,
}

impl Ground {
    pub fn new(name: String) -> Self {
        Self { id: None, name }
    }

    pub fn ground_equals(&self, other: &Ground) -> bool {
        self.name == other.name
    }
}

impl Record for Ground {
    fn record_id(&self) -> Option<RecordId> {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }
}
