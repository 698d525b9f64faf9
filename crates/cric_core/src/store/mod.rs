//! Record store and clock collaborator contracts.
//!
//! The core never talks to a database: persistence is whatever implements
//! [`RecordStore`], and dates come from whatever implements [`Clock`].
//! Timeouts and transport concerns live behind these seams.

pub mod memory;

pub use memory::{FixedClock, InMemoryBackend, InMemoryStore, SystemClock};

use chrono::NaiveDate;

/// Opaque numeric id assigned by the store at first save. Immutable once
/// assigned.
pub type RecordId = u64;

/// A persistable record with a store-assigned identity.
pub trait Record {
    fn record_id(&self) -> Option<RecordId>;
    fn assign_id(&mut self, id: RecordId);
}

/// Simple persistence operations over one record type.
pub trait RecordStore<T: Record> {
    fn get(&self, id: RecordId) -> Option<T>;

    /// Upsert. A record without an id receives a fresh one.
    fn save(&mut self, record: T) -> T;

    fn save_all(&mut self, records: Vec<T>) -> Vec<T>;

    fn delete(&mut self, id: RecordId) -> bool;

    fn delete_all(&mut self);

    fn find_by(&self, predicate: &dyn Fn(&T) -> bool) -> Vec<T>;
}

/// Date source for stamping membership intervals.
pub trait Clock {
    fn now(&self) -> NaiveDate;
}
