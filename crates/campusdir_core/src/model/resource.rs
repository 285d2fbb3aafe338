//! Resource record model.
//!
//! # Responsibility
//! - Define the canonical record for rooms, halls, stalls and equipment.
//! - Define the create draft and sparse patch inputs and their validation.
//!
//! # Invariants
//! - `id` is stable and never reused for another resource.
//! - `name`, `kind`, `category` and `status` are non-blank on every
//!   persisted record; a patch may omit them but never blank them.
//! - `verified_by` and `verified_at` change only together, and only
//!   through the verification workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for every tracked resource.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ResourceId = i64;

/// Canonical record for a tracked physical campus resource.
///
/// `status` is deliberately an open string tag rather than a closed enum,
/// so callers can introduce new statuses without a schema change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Stable global ID used for lookups and auditing.
    pub id: ResourceId,
    /// Display name, e.g. `S506` or `Main Hall`.
    pub name: String,
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: String,
    /// Grouping above `kind`, e.g. `room`, `hall`, `lagoon_stall`.
    pub category: String,
    /// Optional wing descriptor, e.g. `North`.
    pub wing: Option<String>,
    /// Optional floor number. Not cross-validated against `wing`/`room`.
    pub floor: Option<i32>,
    /// Optional room descriptor within the wing/floor.
    pub room: Option<String>,
    /// Open status tag, e.g. `available`, `occupied`, `out-of-service`.
    pub status: String,
    /// Stamped by the repository on every mutation. Never caller-supplied.
    pub last_updated: DateTime<Utc>,
    /// Actor of the last mutation. Left unchanged when a patch omits it.
    pub updated_by: Option<String>,
    /// Last verifying actor. Set only by the verification workflow.
    pub verified_by: Option<String>,
    /// Instant of the last verification. Set together with `verified_by`.
    pub verified_at: Option<DateTime<Utc>>,
    /// Free-text owner/custodian identifier.
    pub owned_by: Option<String>,
    /// Sub-index for resources sharing a room, e.g. restroom stalls.
    pub stall_number: Option<i32>,
}

impl Resource {
    /// Materializes a record from a validated draft.
    ///
    /// # Invariants
    /// - Verification fields start unset.
    /// - `last_updated` is the repository-supplied creation instant.
    pub fn from_draft(id: ResourceId, draft: &NewResource, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            kind: draft.kind.clone(),
            category: draft.category.clone(),
            wing: draft.wing.clone(),
            floor: draft.floor,
            room: draft.room.clone(),
            status: draft.status.clone(),
            last_updated: created_at,
            updated_by: Some(draft.updated_by.clone()),
            verified_by: None,
            verified_at: None,
            owned_by: draft.owned_by.clone(),
            stall_number: draft.stall_number,
        }
    }

    /// Returns whether this resource has been verified at least once.
    pub fn is_verified(&self) -> bool {
        self.verified_by.is_some()
    }
}

/// Create input for a new resource.
///
/// The caller never supplies `id`, `last_updated` or verification fields;
/// those are owned by the repository and the verification workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewResource {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    #[serde(default)]
    pub wing: Option<String>,
    #[serde(default)]
    pub floor: Option<i32>,
    #[serde(default)]
    pub room: Option<String>,
    pub status: String,
    pub updated_by: String,
    #[serde(default)]
    pub owned_by: Option<String>,
    #[serde(default)]
    pub stall_number: Option<i32>,
}

impl NewResource {
    /// Validates required fields.
    ///
    /// # Errors
    /// - `BlankField` when any of `name`, `type`, `category`, `status` or
    ///   `updatedBy` is missing or blank.
    pub fn validate(&self) -> Result<(), ResourceValidationError> {
        require_non_blank("name", &self.name)?;
        require_non_blank("type", &self.kind)?;
        require_non_blank("category", &self.category)?;
        require_non_blank("status", &self.status)?;
        require_non_blank("updatedBy", &self.updated_by)?;
        Ok(())
    }
}

/// Sparse field patch for partial updates.
///
/// Only fields present (`Some`) are applied; absent fields leave the
/// stored value unchanged. There is no clear-to-null form. `id`,
/// `verified_by`, `verified_at` and `last_updated` are not expressible
/// here, so a patch can never alter them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub wing: Option<String>,
    #[serde(default)]
    pub floor: Option<i32>,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub updated_by: Option<String>,
    #[serde(default)]
    pub owned_by: Option<String>,
    #[serde(default)]
    pub stall_number: Option<i32>,
}

impl ResourcePatch {
    /// Validates that no required field is being blanked.
    ///
    /// An empty patch is valid; applying it still refreshes the record's
    /// `last_updated` stamp.
    pub fn validate(&self) -> Result<(), ResourceValidationError> {
        if let Some(name) = &self.name {
            require_non_blank("name", name)?;
        }
        if let Some(kind) = &self.kind {
            require_non_blank("type", kind)?;
        }
        if let Some(category) = &self.category {
            require_non_blank("category", category)?;
        }
        if let Some(status) = &self.status {
            require_non_blank("status", status)?;
        }
        Ok(())
    }

    /// Returns whether the patch carries no assignments at all.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Validation error for resource inputs and filter parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceValidationError {
    /// A required field is missing or blank. Carries the wire field name.
    BlankField(&'static str),
    /// The verification actor identifier is blank.
    BlankActor,
    /// The requested filter field is not part of the filterable set.
    UnsupportedFilterField(String),
}

impl Display for ResourceValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField(field) => {
                write!(f, "required field `{field}` is missing or blank")
            }
            Self::BlankActor => write!(f, "verification actor must not be blank"),
            Self::UnsupportedFilterField(field) => write!(
                f,
                "unsupported filter field `{field}`; expected status|type|category"
            ),
        }
    }
}

impl Error for ResourceValidationError {}

fn require_non_blank(
    field: &'static str,
    value: &str,
) -> Result<(), ResourceValidationError> {
    if value.trim().is_empty() {
        return Err(ResourceValidationError::BlankField(field));
    }
    Ok(())
}
