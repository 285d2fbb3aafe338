use campusdir_core::{NewResource, Resource, ResourcePatch, ResourceValidationError};
use chrono::{DateTime, Utc};

fn classroom_draft() -> NewResource {
    NewResource {
        name: "Room A".to_string(),
        kind: "classroom".to_string(),
        category: "academic".to_string(),
        wing: Some("North".to_string()),
        floor: Some(3),
        room: Some("12".to_string()),
        status: "available".to_string(),
        updated_by: "admin".to_string(),
        owned_by: None,
        stall_number: None,
    }
}

#[test]
fn from_draft_sets_defaults() {
    let draft = classroom_draft();
    let created_at = Utc::now();
    let record = Resource::from_draft(7, &draft, created_at);

    assert_eq!(record.id, 7);
    assert_eq!(record.name, "Room A");
    assert_eq!(record.kind, "classroom");
    assert_eq!(record.category, "academic");
    assert_eq!(record.status, "available");
    assert_eq!(record.last_updated, created_at);
    assert_eq!(record.updated_by.as_deref(), Some("admin"));
    assert_eq!(record.verified_by, None);
    assert_eq!(record.verified_at, None);
    assert!(!record.is_verified());
}

#[test]
fn draft_validation_rejects_blank_required_fields() {
    let mut draft = classroom_draft();
    draft.name = "  ".to_string();
    assert_eq!(
        draft.validate().unwrap_err(),
        ResourceValidationError::BlankField("name")
    );

    let mut draft = classroom_draft();
    draft.kind = String::new();
    assert_eq!(
        draft.validate().unwrap_err(),
        ResourceValidationError::BlankField("type")
    );

    let mut draft = classroom_draft();
    draft.status = String::new();
    assert_eq!(
        draft.validate().unwrap_err(),
        ResourceValidationError::BlankField("status")
    );

    let mut draft = classroom_draft();
    draft.updated_by = String::new();
    assert_eq!(
        draft.validate().unwrap_err(),
        ResourceValidationError::BlankField("updatedBy")
    );
}

#[test]
fn patch_validation_rejects_blanked_required_fields() {
    let patch = ResourcePatch {
        status: Some(String::new()),
        ..ResourcePatch::default()
    };
    assert_eq!(
        patch.validate().unwrap_err(),
        ResourceValidationError::BlankField("status")
    );

    let patch = ResourcePatch {
        category: Some(" ".to_string()),
        ..ResourcePatch::default()
    };
    assert_eq!(
        patch.validate().unwrap_err(),
        ResourceValidationError::BlankField("category")
    );
}

#[test]
fn empty_patch_is_valid() {
    let patch = ResourcePatch::default();
    assert!(patch.is_empty());
    patch.validate().unwrap();
}

#[test]
fn patch_touching_optional_fields_only_is_valid() {
    let patch = ResourcePatch {
        wing: Some("East".to_string()),
        floor: Some(2),
        stall_number: Some(4),
        ..ResourcePatch::default()
    };
    assert!(!patch.is_empty());
    patch.validate().unwrap();
}

#[test]
fn resource_serialization_uses_expected_wire_fields() {
    let mut record = Resource::from_draft(12, &classroom_draft(), Utc::now());
    record.owned_by = Some("facilities".to_string());
    record.stall_number = Some(1);

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], 12);
    assert_eq!(json["name"], "Room A");
    assert_eq!(json["type"], "classroom");
    assert_eq!(json["category"], "academic");
    assert_eq!(json["wing"], "North");
    assert_eq!(json["floor"], 3);
    assert_eq!(json["room"], "12");
    assert_eq!(json["status"], "available");
    assert_eq!(json["updatedBy"], "admin");
    assert_eq!(json["verifiedBy"], serde_json::Value::Null);
    assert_eq!(json["verifiedAt"], serde_json::Value::Null);
    assert_eq!(json["ownedBy"], "facilities");
    assert_eq!(json["stallNumber"], 1);

    let wire_ts = json["lastUpdated"].as_str().unwrap();
    DateTime::parse_from_rfc3339(wire_ts).unwrap();

    let decoded: Resource = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn draft_deserialization_defaults_optional_fields() {
    let draft: NewResource = serde_json::from_str(
        r#"{
            "name": "Main Hall",
            "type": "Conference Hall",
            "category": "hall",
            "status": "available",
            "updatedBy": "admin"
        }"#,
    )
    .unwrap();

    assert_eq!(draft.wing, None);
    assert_eq!(draft.floor, None);
    assert_eq!(draft.room, None);
    assert_eq!(draft.owned_by, None);
    assert_eq!(draft.stall_number, None);
    draft.validate().unwrap();
}
