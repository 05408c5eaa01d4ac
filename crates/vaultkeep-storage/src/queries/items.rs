// SPDX-FileCopyrightText: 2026 Vaultkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vault item CRUD operations, always scoped by owner.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{OptionalExtension, Row, params};
use vaultkeep_core::{ItemId, OwnerId, VaultError, VaultItem};

use crate::database::{Database, map_tr_err};

const ITEM_COLUMNS: &str = "id, owner_id, encrypted_data, created_at, updated_at";

/// Fixed-width RFC 3339 so text ordering matches time ordering.
fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn conversion_error(
    idx: usize,
    e: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
}

fn parse_timestamp(row: &Row<'_>, idx: usize) -> Result<DateTime<Utc>, rusqlite::Error> {
    let raw: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| conversion_error(idx, e))
}

fn item_from_row(row: &Row<'_>) -> Result<VaultItem, rusqlite::Error> {
    let id: String = row.get(0)?;
    let owner: String = row.get(1)?;
    Ok(VaultItem {
        id: id.parse::<ItemId>().map_err(|e| conversion_error(0, e))?,
        owner_id: OwnerId::new(&owner).map_err(|e| conversion_error(1, e))?,
        encrypted_data: row.get(2)?,
        created_at: parse_timestamp(row, 3)?,
        updated_at: parse_timestamp(row, 4)?,
    })
}

/// Insert a new item.
pub async fn insert_item(db: &Database, item: &VaultItem) -> Result<(), VaultError> {
    let id = item.id.to_string();
    let owner = item.owner_id.as_str().to_string();
    let encrypted_data = item.encrypted_data.clone();
    let created_at = format_timestamp(&item.created_at);
    let updated_at = format_timestamp(&item.updated_at);

    db.connection()
        .call(move |conn| -> Result<(), rusqlite::Error> {
            conn.execute(
                "INSERT INTO vault_items (id, owner_id, encrypted_data, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![id, owner, encrypted_data, created_at, updated_at],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Get one item by id for an owner.
pub async fn get_item(
    db: &Database,
    id: &ItemId,
    owner: &OwnerId,
) -> Result<Option<VaultItem>, VaultError> {
    let id = id.to_string();
    let owner = owner.as_str().to_string();
    db.connection()
        .call(move |conn| -> Result<Option<VaultItem>, rusqlite::Error> {
            conn.query_row(
                &format!("SELECT {ITEM_COLUMNS} FROM vault_items WHERE id = ?1 AND owner_id = ?2"),
                params![id, owner],
                item_from_row,
            )
            .optional()
        })
        .await
        .map_err(map_tr_err)
}

/// All items for an owner, newest first.
pub async fn list_items(db: &Database, owner: &OwnerId) -> Result<Vec<VaultItem>, VaultError> {
    let owner = owner.as_str().to_string();
    db.connection()
        .call(move |conn| -> Result<Vec<VaultItem>, rusqlite::Error> {
            let mut stmt = conn.prepare(&format!(
                "SELECT {ITEM_COLUMNS} FROM vault_items WHERE owner_id = ?1
                 ORDER BY created_at DESC, rowid DESC"
            ))?;
            let rows = stmt.query_map(params![owner], item_from_row)?;
            let mut items = Vec::new();
            for row in rows {
                items.push(row?);
            }
            Ok(items)
        })
        .await
        .map_err(map_tr_err)
}

/// Replace an item's ciphertext and bump `updated_at`.
///
/// Returns the updated item, or `None` if the owner has no such item.
pub async fn update_item(
    db: &Database,
    id: &ItemId,
    owner: &OwnerId,
    encrypted_data: &str,
    updated_at: DateTime<Utc>,
) -> Result<Option<VaultItem>, VaultError> {
    let id = id.to_string();
    let owner = owner.as_str().to_string();
    let encrypted_data = encrypted_data.to_string();
    let updated_at = format_timestamp(&updated_at);

    db.connection()
        .call(move |conn| -> Result<Option<VaultItem>, rusqlite::Error> {
            let tx = conn.transaction()?;
            let changed = tx.execute(
                "UPDATE vault_items SET encrypted_data = ?1, updated_at = ?2
                 WHERE id = ?3 AND owner_id = ?4",
                params![encrypted_data, updated_at, id, owner],
            )?;
            if changed == 0 {
                return Ok(None);
            }
            let item = tx.query_row(
                &format!("SELECT {ITEM_COLUMNS} FROM vault_items WHERE id = ?1 AND owner_id = ?2"),
                params![id, owner],
                item_from_row,
            )?;
            tx.commit()?;
            Ok(Some(item))
        })
        .await
        .map_err(map_tr_err)
}

/// Delete an item. Returns whether a row was removed.
pub async fn delete_item(db: &Database, id: &ItemId, owner: &OwnerId) -> Result<bool, VaultError> {
    let id = id.to_string();
    let owner = owner.as_str().to_string();
    db.connection()
        .call(move |conn| -> Result<bool, rusqlite::Error> {
            let deleted = conn.execute(
                "DELETE FROM vault_items WHERE id = ?1 AND owner_id = ?2",
                params![id, owner],
            )?;
            Ok(deleted > 0)
        })
        .await
        .map_err(map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(owner: &str, data: &str) -> VaultItem {
        let now = Utc::now();
        VaultItem {
            id: ItemId::new(),
            owner_id: OwnerId::new(owner).unwrap(),
            encrypted_data: data.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn insert_then_get() {
        let db = Database::open_in_memory().await.unwrap();
        let original = item("alice@example.com", "v1.blob");
        insert_item(&db, &original).await.unwrap();

        let fetched = get_item(&db, &original.id, &original.owner_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.id, original.id);
        assert_eq!(fetched.encrypted_data, "v1.blob");
        // Microsecond precision survives the text round-trip.
        assert_eq!(
            fetched.created_at.timestamp_micros(),
            original.created_at.timestamp_micros()
        );
    }

    #[tokio::test]
    async fn get_is_scoped_by_owner() {
        let db = Database::open_in_memory().await.unwrap();
        let original = item("alice@example.com", "v1.blob");
        insert_item(&db, &original).await.unwrap();

        let mallory = OwnerId::new("mallory@example.com").unwrap();
        assert!(get_item(&db, &original.id, &mallory).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_missing_returns_none() {
        let db = Database::open_in_memory().await.unwrap();
        let owner = OwnerId::new("alice@example.com").unwrap();
        let updated = update_item(&db, &ItemId::new(), &owner, "v1.new", Utc::now())
            .await
            .unwrap();
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn corrupt_timestamp_surfaces_as_storage_error() {
        let db = Database::open_in_memory().await.unwrap();
        let original = item("alice@example.com", "v1.blob");
        insert_item(&db, &original).await.unwrap();
        db.connection()
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute("UPDATE vault_items SET created_at = 'yesterday'", [])?;
                Ok(())
            })
            .await
            .unwrap();

        let err = get_item(&db, &original.id, &original.owner_id)
            .await
            .unwrap_err();
        assert!(matches!(err, VaultError::Storage { .. }));
    }
}
