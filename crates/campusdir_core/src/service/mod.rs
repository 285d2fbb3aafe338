//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository and query calls into the request-handler
//!   facing operation set.
//! - Keep transport layers decoupled from storage details.

pub mod directory_service;
