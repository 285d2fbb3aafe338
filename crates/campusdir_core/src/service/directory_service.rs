//! Directory use-case service.
//!
//! # Responsibility
//! - Expose the full directory operation set to request handlers.
//! - Delegate mutation semantics to the repository and read filtering to
//!   the query layer.
//!
//! # Invariants
//! - Service APIs never bypass repository validation or stamping.
//! - The service layer remains storage-agnostic.

use crate::model::resource::{NewResource, Resource, ResourceId, ResourcePatch};
use crate::query::filter::{filter_by_field, filter_by_wing, filter_by_wing_and_floor};
use crate::repo::resource_repo::{RepoResult, ResourceRepository};
use crate::store::RecordStore;
use log::info;

/// Request-handler facing facade over one record store.
pub struct DirectoryService<S: RecordStore> {
    repo: ResourceRepository<S>,
}

impl<S: RecordStore> DirectoryService<S> {
    /// Creates a service owning a repository over the provided store.
    pub fn new(store: S) -> Self {
        Self {
            repo: ResourceRepository::new(store),
        }
    }

    /// Creates a resource and returns the full record.
    pub fn create_resource(&self, draft: &NewResource) -> RepoResult<Resource> {
        let record = self.repo.create(draft)?;
        info!(
            "event=resource_create module=service status=ok id={} category={}",
            record.id, record.category
        );
        Ok(record)
    }

    /// Returns one resource by id.
    pub fn get_resource(&self, id: ResourceId) -> RepoResult<Resource> {
        self.repo.get(id)
    }

    /// Applies a sparse patch and returns the updated record.
    pub fn update_resource(&self, id: ResourceId, patch: &ResourcePatch) -> RepoResult<Resource> {
        let record = self.repo.update(id, patch)?;
        info!("event=resource_update module=service status=ok id={id}");
        Ok(record)
    }

    /// Removes a resource permanently.
    pub fn delete_resource(&self, id: ResourceId) -> RepoResult<()> {
        self.repo.delete(id)?;
        info!("event=resource_delete module=service status=ok id={id}");
        Ok(())
    }

    /// Returns all resources. Order is unspecified.
    pub fn list_resources(&self) -> RepoResult<Vec<Resource>> {
        self.repo.list()
    }

    /// Returns resources whose `field_name` equals `value` exactly.
    pub fn filter_resources(&self, field_name: &str, value: &str) -> RepoResult<Vec<Resource>> {
        filter_by_field(self.repo.store(), field_name, value)
    }

    /// Returns resources located in `wing`.
    pub fn list_by_wing(&self, wing: &str) -> RepoResult<Vec<Resource>> {
        filter_by_wing(self.repo.store(), wing)
    }

    /// Returns resources located in `wing` on `floor`.
    pub fn list_by_wing_and_floor(&self, wing: &str, floor: i32) -> RepoResult<Vec<Resource>> {
        filter_by_wing_and_floor(self.repo.store(), wing, floor)
    }

    /// Records a verification event for `id` by `actor`.
    pub fn verify_resource(&self, id: ResourceId, actor: &str) -> RepoResult<Resource> {
        let record = self.repo.verify(id, actor)?;
        info!("event=resource_verify module=service status=ok id={id} actor={actor}");
        Ok(record)
    }
}
