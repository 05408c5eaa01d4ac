// SPDX-FileCopyrightText: 2026 Vaultkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for Vaultkeep.

use thiserror::Error;

use crate::types::ItemId;

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, VaultError>;

/// The primary error type for key derivation, record encryption, and storage.
///
/// Cryptographic failures never carry key or plaintext material in their
/// messages.
#[derive(Debug, Error)]
pub enum VaultError {
    /// Empty or otherwise unusable caller input (master password, account
    /// identifier, KDF cost, generator length, blob payload).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Authentication tag mismatch or a structurally invalid ciphertext blob.
    ///
    /// Either the master password is wrong or the item was corrupted.
    #[error("decryption failed: wrong master password or corrupted item")]
    DecryptionFailed,

    /// Decrypted bytes do not parse into a secret record.
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// Failure inside a cryptographic primitive (RNG, key setup).
    #[error("crypto error: {0}")]
    Crypto(String),

    /// Configuration errors (invalid TOML, out-of-range values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Persistence backend errors (connection, query, migration).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No vault item with this id exists for the requesting owner.
    #[error("vault item not found: {id}")]
    NotFound { id: ItemId },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl VaultError {
    /// Whether the caller should re-prompt for the master password rather
    /// than retry the operation.
    pub fn is_reauth_required(&self) -> bool {
        matches!(self, VaultError::DecryptionFailed)
    }

    /// Whether retrying the same call might succeed.
    ///
    /// Cryptographic failures are deterministic and never transient.
    pub fn is_transient(&self) -> bool {
        matches!(self, VaultError::Storage { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decryption_failure_requires_reauth() {
        assert!(VaultError::DecryptionFailed.is_reauth_required());
        assert!(!VaultError::DecryptionFailed.is_transient());
    }

    #[test]
    fn storage_failure_is_transient_not_reauth() {
        let err = VaultError::Storage {
            source: "database is locked".into(),
        };
        assert!(err.is_transient());
        assert!(!err.is_reauth_required());
    }

    #[test]
    fn malformed_record_is_neither() {
        let err = VaultError::MalformedRecord("missing field `title`".into());
        assert!(!err.is_transient());
        assert!(!err.is_reauth_required());
    }

    #[test]
    fn decryption_failure_message_is_generic() {
        let msg = VaultError::DecryptionFailed.to_string();
        assert_eq!(
            msg,
            "decryption failed: wrong master password or corrupted item"
        );
    }
}
