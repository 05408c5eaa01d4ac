// SPDX-FileCopyrightText: 2026 Vaultkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The unlocked-vault session: owner identity plus the derived key.

use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info};
use vaultkeep_core::{OwnerId, VaultError};
use zeroize::Zeroize;

use crate::cipher::{decrypt_record, encrypt_record};
use crate::kdf::{KdfParams, derive_key_with};
use crate::key::EncryptionKey;
use crate::record::SecretRecord;

/// Holds the encryption key for the duration of a login.
///
/// The key is only ever borrowed immutably, so one session can serve any
/// number of concurrent encrypt/decrypt calls. It is zeroed on
/// [`Session::logout`] or whenever the session is dropped.
pub struct Session {
    owner: OwnerId,
    key: EncryptionKey,
}

impl Session {
    /// Derive the key for `account` and open a session.
    pub fn unlock(
        account: &str,
        master_password: &SecretString,
        params: &KdfParams,
    ) -> Result<Self, VaultError> {
        let owner = OwnerId::new(account)?;
        let key = derive_key_with(master_password.expose_secret(), owner.as_str(), params)?;
        info!(algorithm = params.algorithm_name(), "vault unlocked");
        Ok(Self { owner, key })
    }

    /// Wrap an already-derived key.
    pub fn from_key(owner: OwnerId, key: EncryptionKey) -> Self {
        Self { owner, key }
    }

    pub fn owner(&self) -> &OwnerId {
        &self.owner
    }

    pub fn key(&self) -> &EncryptionKey {
        &self.key
    }

    pub fn encrypt(&self, record: &SecretRecord) -> Result<String, VaultError> {
        encrypt_record(record, &self.key)
    }

    pub fn decrypt(&self, blob: &str) -> Result<SecretRecord, VaultError> {
        decrypt_record(blob, &self.key)
    }

    /// End the session, zeroing the key.
    pub fn logout(mut self) {
        self.key.zeroize();
        debug!("session key zeroized");
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("owner", &self.owner)
            .field("key", &"[REDACTED]")
            .finish()
    }
}
