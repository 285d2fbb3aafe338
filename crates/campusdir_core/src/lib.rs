//! Core domain logic for the campus resource directory.
//! This crate is the single source of truth for record-model invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::resource::{
    NewResource, Resource, ResourceId, ResourcePatch, ResourceValidationError,
};
pub use query::filter::{
    filter_by_field, filter_by_wing, filter_by_wing_and_floor, FilterField,
};
pub use repo::resource_repo::{RepoError, RepoResult, ResourceRepository};
pub use service::directory_service::DirectoryService;
pub use store::{FieldValues, MemoryRecordStore, RecordStore, SqliteRecordStore, StoreError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
