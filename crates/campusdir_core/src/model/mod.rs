//! Domain model for tracked campus resources.
//!
//! # Responsibility
//! - Define the canonical resource record shared by every layer.
//! - Own field-level validation for create and patch inputs.
//!
//! # Invariants
//! - Every record is identified by a stable `ResourceId` allocated at
//!   creation and never reused.
//! - Required descriptive fields are never blank on a persisted record.

pub mod resource;
