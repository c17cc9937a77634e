//! In-memory record store for tests and headless flows.

use super::{RecordStore, StoreResult};
use crate::model::record::Record;
use std::cell::RefCell;

/// Record store holding the collection in process memory.
///
/// Mirrors the durable store contract without touching the filesystem; used
/// wherever a session needs storage but no persistence (unit tests, probes).
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RefCell<Vec<Record>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with existing records.
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: RefCell::new(records),
        }
    }

    /// Returns a copy of the last saved collection.
    pub fn snapshot(&self) -> Vec<Record> {
        self.records.borrow().clone()
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> StoreResult<Vec<Record>> {
        Ok(self.records.borrow().clone())
    }

    fn save(&self, records: &[Record]) -> StoreResult<()> {
        *self.records.borrow_mut() = records.to_vec();
        Ok(())
    }
}
