//! Resource repository: mutation protocol against an injected store.
//!
//! # Responsibility
//! - Enforce the record model rules for create, partial update, delete
//!   and verification.
//! - Stamp `last_updated` on every successful mutation.
//!
//! # Invariants
//! - Ids come from the store-owned monotonic allocator; a record is never
//!   created with a caller-supplied id.
//! - A partial update can never alter `id`, `verified_by` or
//!   `verified_at`; those columns are reachable only through `verify`.
//! - Existence checks ride on the store's conditional writes, so a
//!   concurrent delete surfaces as `NotFound`, never as a resurrected
//!   record.

use crate::model::resource::{
    NewResource, Resource, ResourceId, ResourcePatch, ResourceValidationError,
};
use crate::store::{FieldValues, RecordStore, StoreError};
use chrono::Utc;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Caller-facing error taxonomy for directory operations.
#[derive(Debug)]
pub enum RepoError {
    /// Malformed or missing required input. Never retried.
    Validation(ResourceValidationError),
    /// The target id does not name a live record. Never retried.
    NotFound(ResourceId),
    /// The underlying store was unavailable or rejected the operation.
    /// Retry policy belongs to the caller, not the core.
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "resource not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ResourceValidationError> for RepoError {
    fn from(value: ResourceValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Repository applying the mutation protocol against an injected store.
pub struct ResourceRepository<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> ResourceRepository<S> {
    /// Creates a repository over the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrows the underlying store for read-only query layers.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates a resource from a validated draft and returns the full
    /// record, id assigned and verification fields unset.
    pub fn create(&self, draft: &NewResource) -> RepoResult<Resource> {
        draft.validate()?;

        let id = self.store.allocate_id()?;
        let record = Resource::from_draft(id, draft, Utc::now());
        self.store.put(&record)?;

        Ok(record)
    }

    /// Returns the record for `id`.
    pub fn get(&self, id: ResourceId) -> RepoResult<Resource> {
        self.store
            .get_by_id(id)?
            .ok_or(RepoError::NotFound(id))
    }

    /// Applies a sparse patch and returns the updated record.
    ///
    /// `last_updated` is refreshed on every successful call, even for an
    /// empty patch. Verification columns are untouched regardless of the
    /// patch contents.
    pub fn update(&self, id: ResourceId, patch: &ResourcePatch) -> RepoResult<Resource> {
        patch.validate()?;

        let fields = FieldValues {
            patch: patch.clone(),
            last_updated: Some(Utc::now()),
            ..FieldValues::default()
        };

        if !self.store.update_fields(id, &fields)? {
            return Err(RepoError::NotFound(id));
        }

        self.get(id)
    }

    /// Removes the record permanently.
    ///
    /// Deleting an already-deleted id always fails with `NotFound`; the id
    /// is never reallocated afterwards.
    pub fn delete(&self, id: ResourceId) -> RepoResult<()> {
        if !self.store.delete(id)? {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }

    /// Returns all live records. Order is unspecified.
    pub fn list(&self) -> RepoResult<Vec<Resource>> {
        Ok(self.store.scan_all()?)
    }

    /// Records a verification event for `id` by `actor`.
    ///
    /// Re-entrant for the life of the record: a later verification fully
    /// replaces the prior verifier and timestamp. The same instant is
    /// stamped into `verified_at` and `last_updated`, so `last_updated`
    /// keeps meaning "any change".
    pub fn verify(&self, id: ResourceId, actor: &str) -> RepoResult<Resource> {
        if actor.trim().is_empty() {
            return Err(ResourceValidationError::BlankActor.into());
        }

        let now = Utc::now();
        let fields = FieldValues {
            verified_by: Some(actor.to_string()),
            verified_at: Some(now),
            last_updated: Some(now),
            ..FieldValues::default()
        };

        if !self.store.update_fields(id, &fields)? {
            return Err(RepoError::NotFound(id));
        }

        self.get(id)
    }
}
