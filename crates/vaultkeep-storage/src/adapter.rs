// SPDX-FileCopyrightText: 2026 Vaultkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the VaultStore trait.

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use tracing::debug;

use vaultkeep_config::model::StorageConfig;
use vaultkeep_core::traits::require_encrypted_data;
use vaultkeep_core::{ItemId, OwnerId, VaultError, VaultItem, VaultStore};

use crate::database::Database;
use crate::queries;

/// SQLite-backed vault store.
///
/// Wraps a [`Database`] handle and delegates to the typed query modules.
pub struct SqliteVaultStore {
    db: Database,
}

impl SqliteVaultStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Open the database named by the storage configuration.
    pub async fn open(config: &StorageConfig) -> Result<Self, VaultError> {
        let db = Database::open(&config.database_path, config.wal_mode).await?;
        Ok(Self::new(db))
    }

    pub async fn open_in_memory() -> Result<Self, VaultError> {
        Ok(Self::new(Database::open_in_memory().await?))
    }

    /// Checkpoint the WAL before shutdown.
    pub async fn close(&self) -> Result<(), VaultError> {
        self.db.close().await
    }
}

/// Current time at the precision timestamps are stored with.
fn stored_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

#[async_trait]
impl VaultStore for SqliteVaultStore {
    async fn create(
        &self,
        owner: &OwnerId,
        encrypted_data: &str,
    ) -> Result<VaultItem, VaultError> {
        require_encrypted_data(encrypted_data)?;
        let now = stored_now();
        let item = VaultItem {
            id: ItemId::new(),
            owner_id: owner.clone(),
            encrypted_data: encrypted_data.to_string(),
            created_at: now,
            updated_at: now,
        };
        queries::items::insert_item(&self.db, &item).await?;
        debug!(id = %item.id, blob_len = encrypted_data.len(), "vault item stored");
        Ok(item)
    }

    async fn fetch(&self, id: &ItemId, owner: &OwnerId) -> Result<Option<VaultItem>, VaultError> {
        queries::items::get_item(&self.db, id, owner).await
    }

    async fn list(&self, owner: &OwnerId) -> Result<Vec<VaultItem>, VaultError> {
        queries::items::list_items(&self.db, owner).await
    }

    async fn replace(
        &self,
        id: &ItemId,
        owner: &OwnerId,
        encrypted_data: &str,
    ) -> Result<Option<VaultItem>, VaultError> {
        require_encrypted_data(encrypted_data)?;
        let updated =
            queries::items::update_item(&self.db, id, owner, encrypted_data, stored_now()).await?;
        if updated.is_some() {
            debug!(%id, "vault item replaced");
        }
        Ok(updated)
    }

    async fn delete(&self, id: &ItemId, owner: &OwnerId) -> Result<bool, VaultError> {
        let deleted = queries::items::delete_item(&self.db, id, owner).await?;
        if deleted {
            debug!(%id, "vault item deleted");
        }
        Ok(deleted)
    }
}
