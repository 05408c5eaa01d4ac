// SPDX-FileCopyrightText: 2026 Vaultkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory vault store.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use vaultkeep_core::traits::require_encrypted_data;
use vaultkeep_core::{ItemId, OwnerId, VaultError, VaultItem, VaultStore};

/// Non-persistent [`VaultStore`] backed by a map.
///
/// Same ownership and ordering rules as the SQLite store.
#[derive(Debug, Default)]
pub struct MemoryVaultStore {
    items: RwLock<HashMap<ItemId, (u64, VaultItem)>>,
}

impl MemoryVaultStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VaultStore for MemoryVaultStore {
    async fn create(
        &self,
        owner: &OwnerId,
        encrypted_data: &str,
    ) -> Result<VaultItem, VaultError> {
        require_encrypted_data(encrypted_data)?;
        let now = Utc::now();
        let item = VaultItem {
            id: ItemId::new(),
            owner_id: owner.clone(),
            encrypted_data: encrypted_data.to_string(),
            created_at: now,
            updated_at: now,
        };

        let mut items = self.items.write().await;
        // Insertion sequence breaks ties between equal timestamps.
        let seq = items.values().map(|(seq, _)| *seq + 1).max().unwrap_or(0);
        items.insert(item.id, (seq, item.clone()));
        Ok(item)
    }

    async fn fetch(&self, id: &ItemId, owner: &OwnerId) -> Result<Option<VaultItem>, VaultError> {
        let items = self.items.read().await;
        Ok(items
            .get(id)
            .filter(|(_, item)| &item.owner_id == owner)
            .map(|(_, item)| item.clone()))
    }

    async fn list(&self, owner: &OwnerId) -> Result<Vec<VaultItem>, VaultError> {
        let items = self.items.read().await;
        let mut owned: Vec<&(u64, VaultItem)> = items
            .values()
            .filter(|(_, item)| &item.owner_id == owner)
            .collect();
        owned.sort_by(|(a_seq, a), (b_seq, b)| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b_seq.cmp(a_seq))
        });
        Ok(owned.into_iter().map(|(_, item)| item.clone()).collect())
    }

    async fn replace(
        &self,
        id: &ItemId,
        owner: &OwnerId,
        encrypted_data: &str,
    ) -> Result<Option<VaultItem>, VaultError> {
        require_encrypted_data(encrypted_data)?;
        let mut items = self.items.write().await;
        match items.get_mut(id) {
            Some((_, item)) if &item.owner_id == owner => {
                item.encrypted_data = encrypted_data.to_string();
                item.updated_at = Utc::now();
                Ok(Some(item.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete(&self, id: &ItemId, owner: &OwnerId) -> Result<bool, VaultError> {
        let mut items = self.items.write().await;
        let owned = items
            .get(id)
            .is_some_and(|(_, item)| &item.owner_id == owner);
        if owned {
            items.remove(id);
        }
        Ok(owned)
    }
}
