//! Repository layer owning resource mutation semantics.
//!
//! # Responsibility
//! - Validate and apply create/update/delete/verify operations.
//! - Own identity assignment and mutation stamping.
//!
//! # Invariants
//! - Writes validate inputs before touching the store.
//! - Repository APIs return semantic errors (`NotFound`, `Validation`) in
//!   addition to store transport errors.

pub mod resource_repo;
