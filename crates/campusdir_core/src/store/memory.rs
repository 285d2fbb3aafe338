//! In-memory record store.
//!
//! # Responsibility
//! - Provide a volatile `RecordStore` for tests and non-persistent runs.
//!
//! # Invariants
//! - The id counter is atomic and never reused within the store lifetime.
//! - All record access goes through one interior lock, so per-record
//!   operations are atomic with respect to each other.

use super::{FieldValues, RecordStore, StoreError, StoreResult};
use crate::model::resource::{Resource, ResourceId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Mutex, MutexGuard};

/// Volatile record store backed by a locked map.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: Mutex<HashMap<ResourceId, Resource>>,
    next_id: AtomicI64,
}

impl MemoryRecordStore {
    /// Creates an empty store with the id counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, HashMap<ResourceId, Resource>>> {
        self.records
            .lock()
            .map_err(|_| StoreError::Backend("record map lock poisoned".to_string()))
    }
}

impl RecordStore for MemoryRecordStore {
    fn allocate_id(&self) -> StoreResult<ResourceId> {
        Ok(self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn put(&self, record: &Resource) -> StoreResult<()> {
        self.lock()?.insert(record.id, record.clone());
        Ok(())
    }

    fn get_by_id(&self, id: ResourceId) -> StoreResult<Option<Resource>> {
        Ok(self.lock()?.get(&id).cloned())
    }

    fn update_fields(&self, id: ResourceId, fields: &FieldValues) -> StoreResult<bool> {
        let mut records = self.lock()?;
        match records.get_mut(&id) {
            Some(record) => {
                fields.apply_to(record);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&self, id: ResourceId) -> StoreResult<bool> {
        Ok(self.lock()?.remove(&id).is_some())
    }

    fn scan_all(&self) -> StoreResult<Vec<Resource>> {
        Ok(self.lock()?.values().cloned().collect())
    }
}
