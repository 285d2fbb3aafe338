//! Exact-match filtering over the full record set.
//!
//! # Responsibility
//! - Provide the filterable-field set and its boundary validation.
//! - Filter scans by status/type/category and by location descriptors.
//!
//! # Invariants
//! - Comparisons are exact and case-sensitive.
//! - Result ordering is unspecified, matching the store scan contract.

use crate::model::resource::{Resource, ResourceValidationError};
use crate::repo::resource_repo::RepoResult;
use crate::store::RecordStore;

/// Filterable field set for [`filter_by_field`].
///
/// Field *names* form a closed set validated at the boundary; field
/// *values* stay open string tags, so callers can filter on statuses the
/// core has never seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Status,
    Kind,
    Category,
}

impl FilterField {
    /// Parses an external field name.
    ///
    /// # Errors
    /// - `UnsupportedFilterField` for anything outside
    ///   `status|type|category`, including a blank name.
    pub fn parse(name: &str) -> Result<Self, ResourceValidationError> {
        match name {
            "status" => Ok(Self::Status),
            "type" => Ok(Self::Kind),
            "category" => Ok(Self::Category),
            other => Err(ResourceValidationError::UnsupportedFilterField(
                other.to_string(),
            )),
        }
    }

    /// Returns the external name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Kind => "type",
            Self::Category => "category",
        }
    }

    fn value_of<'r>(&self, record: &'r Resource) -> &'r str {
        match self {
            Self::Status => &record.status,
            Self::Kind => &record.kind,
            Self::Category => &record.category,
        }
    }
}

/// Returns all records whose `field_name` equals `value` exactly.
///
/// Full-scan semantics: acceptable for directory-sized record sets.
pub fn filter_by_field<S: RecordStore>(
    store: &S,
    field_name: &str,
    value: &str,
) -> RepoResult<Vec<Resource>> {
    let field = FilterField::parse(field_name)?;
    let mut records = store.scan_all()?;
    records.retain(|record| field.value_of(record) == value);
    Ok(records)
}

/// Returns all records located in `wing`.
///
/// Records without a wing descriptor never match.
pub fn filter_by_wing<S: RecordStore>(store: &S, wing: &str) -> RepoResult<Vec<Resource>> {
    let mut records = store.scan_all()?;
    records.retain(|record| record.wing.as_deref() == Some(wing));
    Ok(records)
}

/// Returns all records located in `wing` on `floor`.
pub fn filter_by_wing_and_floor<S: RecordStore>(
    store: &S,
    wing: &str,
    floor: i32,
) -> RepoResult<Vec<Resource>> {
    let mut records = store.scan_all()?;
    records.retain(|record| {
        record.wing.as_deref() == Some(wing) && record.floor == Some(floor)
    });
    Ok(records)
}
