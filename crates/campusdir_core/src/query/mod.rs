//! Read-side query layer over the record store.
//!
//! # Responsibility
//! - Filter the full record set by descriptive or location fields.
//! - Validate filter parameters at the boundary.
//!
//! # Invariants
//! - Filters are full scans; results need not be linearizable with
//!   concurrent writes.

pub mod filter;
