// SPDX-FileCopyrightText: 2026 Vaultkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Encrypt-before-store, decrypt-after-fetch vault operations.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use tracing::{debug, info, warn};
use vaultkeep_core::{ItemId, OwnerId, VaultError, VaultItem, VaultStore};
use vaultkeep_crypto::{KdfParams, SecretRecord, Session};

/// A stored item with its record decrypted.
#[derive(Debug)]
pub struct DecryptedItem {
    pub id: ItemId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub record: SecretRecord,
}

/// One entry of a listing.
///
/// Items are decrypted independently, so one corrupted blob shows up as an
/// `Err` here instead of failing the whole listing.
#[derive(Debug)]
pub struct ListedItem {
    pub id: ItemId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub record: Result<SecretRecord, VaultError>,
}

/// An unlocked vault bound to a store.
///
/// The store only ever receives ciphertext produced by the session.
///
/// The store cannot tell keys apart, so a mistyped master password would
/// otherwise seal new items under a key that never opens them again. Writes
/// first check the session key against the owner's existing items.
pub struct VaultClient<S: VaultStore> {
    session: Session,
    store: S,
    key_verified: AtomicBool,
}

impl<S: VaultStore> VaultClient<S> {
    pub fn new(session: Session, store: S) -> Self {
        Self {
            session,
            store,
            key_verified: AtomicBool::new(false),
        }
    }

    /// Derive the key for `account` and bind it to `store`.
    pub fn unlock(
        account: &str,
        master_password: &SecretString,
        params: &KdfParams,
        store: S,
    ) -> Result<Self, VaultError> {
        let session = Session::unlock(account, master_password, params)?;
        Ok(Self::new(session, store))
    }

    pub fn owner(&self) -> &OwnerId {
        self.session.owner()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Check that the session key opens at least one of the owner's items.
    ///
    /// An owner without items has nothing to check against, so the first
    /// write fixes the key. A record that authenticates but does not parse
    /// still proves the key.
    pub async fn verify_key(&self) -> Result<(), VaultError> {
        if self.key_verified.load(Ordering::Acquire) {
            return Ok(());
        }
        let items = self.store.list(self.owner()).await?;
        let opens = items.is_empty()
            || items.iter().any(|item| {
                !matches!(
                    self.session.decrypt(&item.encrypted_data),
                    Err(VaultError::DecryptionFailed)
                )
            });
        if !opens {
            warn!(count = items.len(), "session key opens none of the stored items");
            return Err(VaultError::DecryptionFailed);
        }
        self.key_verified.store(true, Ordering::Release);
        Ok(())
    }

    /// Encrypt and store a new record.
    ///
    /// Fails with [`VaultError::DecryptionFailed`] without writing when the
    /// owner already has items and the session key opens none of them.
    pub async fn add(&self, record: &SecretRecord) -> Result<VaultItem, VaultError> {
        self.verify_key().await?;
        let blob = self.session.encrypt(record)?;
        let item = self.store.create(self.owner(), &blob).await?;
        info!(id = %item.id, "vault item added");
        Ok(item)
    }

    /// Fetch and decrypt one record.
    pub async fn get(&self, id: &ItemId) -> Result<DecryptedItem, VaultError> {
        let item = self
            .store
            .fetch(id, self.owner())
            .await?
            .ok_or(VaultError::NotFound { id: *id })?;
        let record = self.session.decrypt(&item.encrypted_data)?;
        Ok(DecryptedItem {
            id: item.id,
            created_at: item.created_at,
            updated_at: item.updated_at,
            record,
        })
    }

    /// Fetch and decrypt every record, newest first.
    ///
    /// When no item authenticates under the session key the whole call fails
    /// with [`VaultError::DecryptionFailed`].
    pub async fn list(&self) -> Result<Vec<ListedItem>, VaultError> {
        let items = self.store.list(self.owner()).await?;
        let listed: Vec<ListedItem> = items
            .into_iter()
            .map(|item| {
                let record = self.session.decrypt(&item.encrypted_data);
                if let Err(e) = &record {
                    warn!(id = %item.id, error = %e, "vault item could not be decrypted");
                }
                ListedItem {
                    id: item.id,
                    created_at: item.created_at,
                    updated_at: item.updated_at,
                    record,
                }
            })
            .collect();
        let opened = listed
            .iter()
            .any(|entry| !matches!(entry.record, Err(VaultError::DecryptionFailed)));
        if !listed.is_empty() && !opened {
            return Err(VaultError::DecryptionFailed);
        }
        if opened {
            self.key_verified.store(true, Ordering::Release);
        }
        debug!(count = listed.len(), "vault items listed");
        Ok(listed)
    }

    /// Re-encrypt `record` and replace the stored item wholesale.
    pub async fn update(&self, id: &ItemId, record: &SecretRecord) -> Result<VaultItem, VaultError> {
        self.verify_key().await?;
        let blob = self.session.encrypt(record)?;
        let item = self
            .store
            .replace(id, self.owner(), &blob)
            .await?
            .ok_or(VaultError::NotFound { id: *id })?;
        info!(%id, "vault item updated");
        Ok(item)
    }

    pub async fn delete(&self, id: &ItemId) -> Result<(), VaultError> {
        self.verify_key().await?;
        if !self.store.delete(id, self.owner()).await? {
            return Err(VaultError::NotFound { id: *id });
        }
        info!(%id, "vault item deleted");
        Ok(())
    }

    /// Log out: zeroize the key and hand back the store.
    pub fn lock(self) -> S {
        let Self { session, store, .. } = self;
        session.logout();
        info!("vault locked");
        store
    }
}

impl<S: VaultStore> std::fmt::Debug for VaultClient<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultClient")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
