//! In-process storage backend for tests and ephemeral sessions.

use super::{BookStore, StoreResult};
use crate::model::record::Record;
use std::cell::RefCell;

/// Keeps the persisted book in memory; starts as a never-written store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RefCell<Option<Vec<Record>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether `save` has been called at least once.
    pub fn is_written(&self) -> bool {
        self.records.borrow().is_some()
    }
}

impl BookStore for MemoryStore {
    fn load(&self) -> StoreResult<Option<Vec<Record>>> {
        Ok(self.records.borrow().clone())
    }

    fn save(&self, records: &[Record]) -> StoreResult<()> {
        *self.records.borrow_mut() = Some(records.to_vec());
        Ok(())
    }
}
