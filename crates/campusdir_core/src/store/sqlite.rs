//! SQLite-backed record store.
//!
//! # Responsibility
//! - Map the `RecordStore` contract onto the `resources` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Id allocation bumps the `id_alloc` counter, which survives deletes.
//! - `update_fields` compiles the assignment set into a single `UPDATE`,
//!   so the existence check and the write are one statement.

use super::{FieldValues, RecordStore, StoreError, StoreResult};
use crate::model::resource::{Resource, ResourceId};
use chrono::{DateTime, Utc};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const RESOURCE_SELECT_SQL: &str = "SELECT
    id,
    name,
    type,
    category,
    wing,
    floor,
    room,
    status,
    last_updated,
    updated_by,
    verified_by,
    verified_at,
    owned_by,
    stall_number
FROM resources";

/// SQLite-backed record store borrowing an open connection.
pub struct SqliteRecordStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRecordStore<'conn> {
    /// Wraps a connection opened through [`crate::db::open_db`] or
    /// [`crate::db::open_db_in_memory`].
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl RecordStore for SqliteRecordStore<'_> {
    fn allocate_id(&self) -> StoreResult<ResourceId> {
        let id = self.conn.query_row(
            "UPDATE id_alloc
             SET next_id = next_id + 1
             WHERE scope = 'resource'
             RETURNING next_id;",
            [],
            |row| row.get::<_, i64>(0),
        )?;
        Ok(id)
    }

    fn put(&self, record: &Resource) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO resources (
                id,
                name,
                type,
                category,
                wing,
                floor,
                room,
                status,
                last_updated,
                updated_by,
                verified_by,
                verified_at,
                owned_by,
                stall_number
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14);",
            params![
                record.id,
                record.name.as_str(),
                record.kind.as_str(),
                record.category.as_str(),
                record.wing.as_deref(),
                record.floor,
                record.room.as_deref(),
                record.status.as_str(),
                timestamp_to_db(record.last_updated),
                record.updated_by.as_deref(),
                record.verified_by.as_deref(),
                record.verified_at.map(timestamp_to_db),
                record.owned_by.as_deref(),
                record.stall_number,
            ],
        )?;

        Ok(())
    }

    fn get_by_id(&self, id: ResourceId) -> StoreResult<Option<Resource>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{RESOURCE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_resource_row(row)?));
        }

        Ok(None)
    }

    fn update_fields(&self, id: ResourceId, fields: &FieldValues) -> StoreResult<bool> {
        let mut assignments: Vec<&'static str> = Vec::new();
        let mut bind_values: Vec<Value> = Vec::new();

        let patch = &fields.patch;
        if let Some(name) = &patch.name {
            assignments.push("name = ?");
            bind_values.push(Value::Text(name.clone()));
        }
        if let Some(kind) = &patch.kind {
            assignments.push("type = ?");
            bind_values.push(Value::Text(kind.clone()));
        }
        if let Some(category) = &patch.category {
            assignments.push("category = ?");
            bind_values.push(Value::Text(category.clone()));
        }
        if let Some(wing) = &patch.wing {
            assignments.push("wing = ?");
            bind_values.push(Value::Text(wing.clone()));
        }
        if let Some(floor) = patch.floor {
            assignments.push("floor = ?");
            bind_values.push(Value::Integer(i64::from(floor)));
        }
        if let Some(room) = &patch.room {
            assignments.push("room = ?");
            bind_values.push(Value::Text(room.clone()));
        }
        if let Some(status) = &patch.status {
            assignments.push("status = ?");
            bind_values.push(Value::Text(status.clone()));
        }
        if let Some(updated_by) = &patch.updated_by {
            assignments.push("updated_by = ?");
            bind_values.push(Value::Text(updated_by.clone()));
        }
        if let Some(owned_by) = &patch.owned_by {
            assignments.push("owned_by = ?");
            bind_values.push(Value::Text(owned_by.clone()));
        }
        if let Some(stall_number) = patch.stall_number {
            assignments.push("stall_number = ?");
            bind_values.push(Value::Integer(i64::from(stall_number)));
        }
        if let Some(last_updated) = fields.last_updated {
            assignments.push("last_updated = ?");
            bind_values.push(Value::Text(timestamp_to_db(last_updated)));
        }
        if let Some(verified_by) = &fields.verified_by {
            assignments.push("verified_by = ?");
            bind_values.push(Value::Text(verified_by.clone()));
        }
        if let Some(verified_at) = fields.verified_at {
            assignments.push("verified_at = ?");
            bind_values.push(Value::Text(timestamp_to_db(verified_at)));
        }

        if assignments.is_empty() {
            let exists: i64 = self.conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM resources WHERE id = ?1);",
                params![id],
                |row| row.get(0),
            )?;
            return Ok(exists == 1);
        }

        let sql = format!(
            "UPDATE resources SET {} WHERE id = ?;",
            assignments.join(", ")
        );
        bind_values.push(Value::Integer(id));

        let changed = self
            .conn
            .execute(&sql, params_from_iter(bind_values))?;
        Ok(changed > 0)
    }

    fn delete(&self, id: ResourceId) -> StoreResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM resources WHERE id = ?1;", params![id])?;
        Ok(changed > 0)
    }

    fn scan_all(&self) -> StoreResult<Vec<Resource>> {
        let mut stmt = self.conn.prepare(RESOURCE_SELECT_SQL)?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            records.push(parse_resource_row(row)?);
        }

        Ok(records)
    }
}

fn parse_resource_row(row: &Row<'_>) -> StoreResult<Resource> {
    let last_updated_text: String = row.get("last_updated")?;
    let last_updated = timestamp_from_db(&last_updated_text, "resources.last_updated")?;

    let verified_at = match row.get::<_, Option<String>>("verified_at")? {
        Some(text) => Some(timestamp_from_db(&text, "resources.verified_at")?),
        None => None,
    };

    Ok(Resource {
        id: row.get("id")?,
        name: row.get("name")?,
        kind: row.get("type")?,
        category: row.get("category")?,
        wing: row.get("wing")?,
        floor: row.get("floor")?,
        room: row.get("room")?,
        status: row.get("status")?,
        last_updated,
        updated_by: row.get("updated_by")?,
        verified_by: row.get("verified_by")?,
        verified_at,
        owned_by: row.get("owned_by")?,
        stall_number: row.get("stall_number")?,
    })
}

fn timestamp_to_db(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339()
}

fn timestamp_from_db(text: &str, column: &str) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| {
            StoreError::InvalidRecord(format!("invalid timestamp `{text}` in {column}"))
        })
}
