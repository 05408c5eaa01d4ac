// SPDX-FileCopyrightText: 2026 Vaultkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The plaintext secret record and its canonical byte encoding.

use serde::{Deserialize, Serialize};
use vaultkeep_core::VaultError;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// A credential as the user sees it.
///
/// Lives only in client memory, is zeroized on drop, and never prints its
/// contents through `Debug`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(deny_unknown_fields)]
pub struct SecretRecord {
    // Field order is the canonical encoding order.
    pub title: String,
    pub username: String,
    pub password: String,
    pub url: String,
    pub notes: String,
}

impl SecretRecord {
    pub fn new(
        title: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        url: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            username: username.into(),
            password: password.into(),
            url: url.into(),
            notes: notes.into(),
        }
    }

    /// Canonical encoding: compact JSON with a fixed field order.
    pub fn to_canonical_bytes(&self) -> Result<Zeroizing<Vec<u8>>, VaultError> {
        serde_json::to_vec(self)
            .map(Zeroizing::new)
            .map_err(|e| VaultError::Internal(format!("failed to encode record: {e}")))
    }

    /// Parse canonical bytes back into a record.
    ///
    /// Unknown, missing, or mistyped fields are `MalformedRecord`. The error
    /// names only the position, never the offending content.
    pub fn from_canonical_bytes(bytes: &[u8]) -> Result<Self, VaultError> {
        serde_json::from_slice(bytes).map_err(|e| {
            VaultError::MalformedRecord(format!(
                "decrypted payload is not a secret record ({:?} error at line {}, column {})",
                e.classify(),
                e.line(),
                e.column()
            ))
        })
    }
}

impl std::fmt::Debug for SecretRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretRecord")
            .field("title", &"[REDACTED]")
            .field("username", &"[REDACTED]")
            .field("password", &"[REDACTED]")
            .field("url", &"[REDACTED]")
            .field("notes", &"[REDACTED]")
            .finish()
    }
}
