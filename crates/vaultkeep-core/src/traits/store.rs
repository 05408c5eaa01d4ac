// SPDX-FileCopyrightText: 2026 Vaultkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistence capability for opaque vault items.

use async_trait::async_trait;

use crate::error::VaultError;
use crate::types::{ItemId, OwnerId, VaultItem};

/// Stores and retrieves ciphertext blobs keyed by item id and owner.
///
/// Implementations enforce ownership: every lookup is scoped by `owner`, and
/// an item belonging to someone else behaves exactly like a missing one.
/// They must reject an empty `encrypted_data` with
/// [`VaultError::InvalidInput`] and never inspect it otherwise.
#[async_trait]
pub trait VaultStore: Send + Sync {
    /// Persist a new item and return it with its assigned id and timestamps.
    async fn create(&self, owner: &OwnerId, encrypted_data: &str)
    -> Result<VaultItem, VaultError>;

    /// Fetch one item owned by `owner`.
    async fn fetch(&self, id: &ItemId, owner: &OwnerId) -> Result<Option<VaultItem>, VaultError>;

    /// List every item owned by `owner`, newest first.
    async fn list(&self, owner: &OwnerId) -> Result<Vec<VaultItem>, VaultError>;

    /// Replace an item's ciphertext wholesale, bumping `updated_at`.
    ///
    /// Returns `None` when no such item exists for `owner`.
    async fn replace(
        &self,
        id: &ItemId,
        owner: &OwnerId,
        encrypted_data: &str,
    ) -> Result<Option<VaultItem>, VaultError>;

    /// Delete an item. Returns whether anything was removed.
    async fn delete(&self, id: &ItemId, owner: &OwnerId) -> Result<bool, VaultError>;
}

/// Reject empty ciphertext payloads before they reach a backend.
pub fn require_encrypted_data(encrypted_data: &str) -> Result<(), VaultError> {
    if encrypted_data.trim().is_empty() {
        return Err(VaultError::InvalidInput(
            "encrypted data is required".to_string(),
        ));
    }
    Ok(())
}
