//! Record store contracts shared by every storage backend.
//!
//! # Responsibility
//! - Define the keyed store interface the repository is written against.
//! - Define the sparse column assignment set used for conditional writes.
//!
//! # Invariants
//! - `allocate_id` is strictly monotonic per store and never hands out an
//!   id twice, including after deletes.
//! - `update_fields` and `delete` are conditional writes: they report
//!   whether the target existed instead of requiring a prior read.

use crate::db::DbError;
use crate::model::resource::{Resource, ResourceId, ResourcePatch};
use chrono::{DateTime, Utc};
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryRecordStore;
pub use sqlite::SqliteRecordStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport/availability error reported by a record store backend.
#[derive(Debug)]
pub enum StoreError {
    /// SQLite transport or bootstrap failure.
    Db(DbError),
    /// Backend-specific failure, e.g. a poisoned in-memory lock.
    Backend(String),
    /// A persisted row could not be decoded into a valid record.
    InvalidRecord(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Backend(message) => write!(f, "record store failure: {message}"),
            Self::InvalidRecord(message) => {
                write!(f, "invalid persisted resource data: {message}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Backend(_) => None,
            Self::InvalidRecord(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Sparse column assignment set applied by [`RecordStore::update_fields`].
///
/// Combines the caller-facing patch with repository-stamped bookkeeping
/// columns. Only the repository constructs the stamped part, which is how
/// general updates are kept away from the verification columns.
#[derive(Debug, Clone, Default)]
pub struct FieldValues {
    /// Caller-facing sparse patch.
    pub patch: ResourcePatch,
    /// Mutation stamp. Present on every repository write.
    pub last_updated: Option<DateTime<Utc>>,
    /// Verifying actor. Present only on verification writes.
    pub verified_by: Option<String>,
    /// Verification instant. Present only on verification writes.
    pub verified_at: Option<DateTime<Utc>>,
}

impl FieldValues {
    /// Applies every present assignment to `record` in place.
    ///
    /// Shared by in-memory backends; SQL backends compile the same
    /// assignment set into a single `UPDATE` statement.
    pub fn apply_to(&self, record: &mut Resource) {
        if let Some(name) = &self.patch.name {
            record.name = name.clone();
        }
        if let Some(kind) = &self.patch.kind {
            record.kind = kind.clone();
        }
        if let Some(category) = &self.patch.category {
            record.category = category.clone();
        }
        if let Some(wing) = &self.patch.wing {
            record.wing = Some(wing.clone());
        }
        if let Some(floor) = self.patch.floor {
            record.floor = Some(floor);
        }
        if let Some(room) = &self.patch.room {
            record.room = Some(room.clone());
        }
        if let Some(status) = &self.patch.status {
            record.status = status.clone();
        }
        if let Some(updated_by) = &self.patch.updated_by {
            record.updated_by = Some(updated_by.clone());
        }
        if let Some(owned_by) = &self.patch.owned_by {
            record.owned_by = Some(owned_by.clone());
        }
        if let Some(stall_number) = self.patch.stall_number {
            record.stall_number = Some(stall_number);
        }
        if let Some(last_updated) = self.last_updated {
            record.last_updated = last_updated;
        }
        if let Some(verified_by) = &self.verified_by {
            record.verified_by = Some(verified_by.clone());
        }
        if let Some(verified_at) = self.verified_at {
            record.verified_at = Some(verified_at);
        }
    }
}

/// Keyed store interface for resource records.
///
/// The repository owns all business semantics; implementations only
/// provide atomic per-record primitives and their own concurrency
/// control.
pub trait RecordStore {
    /// Allocates the next resource id from the store-owned counter.
    fn allocate_id(&self) -> StoreResult<ResourceId>;

    /// Inserts a full record under its id.
    fn put(&self, record: &Resource) -> StoreResult<()>;

    /// Returns the record for `id`, or `None` when absent.
    fn get_by_id(&self, id: ResourceId) -> StoreResult<Option<Resource>>;

    /// Applies `fields` to the record in one conditional write.
    ///
    /// Returns `false` when no record with `id` exists.
    fn update_fields(&self, id: ResourceId, fields: &FieldValues) -> StoreResult<bool>;

    /// Removes the record permanently. Returns `false` when absent.
    fn delete(&self, id: ResourceId) -> StoreResult<bool>;

    /// Returns every live record. Order is unspecified.
    fn scan_all(&self) -> StoreResult<Vec<Resource>>;
}
