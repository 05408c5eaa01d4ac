// SPDX-FileCopyrightText: 2026 Vaultkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared between the client, the crypto core, and storage.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::VaultError;

/// Unique identifier for a stored vault item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Generate a fresh random item id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ItemId {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|e| VaultError::InvalidInput(format!("invalid item id `{s}`: {e}")))
    }
}

/// Identity that owns a set of vault items.
///
/// Built from the account identifier after normalization, so
/// `Alice@Example.com` and `alice@example.com` name the same owner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(String);

impl OwnerId {
    /// Normalize an account identifier into an owner id.
    ///
    /// Returns `InvalidInput` when nothing is left after trimming.
    pub fn new(account: &str) -> Result<Self, VaultError> {
        let normalized = normalize_account(account);
        if normalized.is_empty() {
            return Err(VaultError::InvalidInput(
                "account identifier cannot be empty".to_string(),
            ));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trim surrounding whitespace and lower-case an account identifier.
pub fn normalize_account(account: &str) -> String {
    account.trim().to_lowercase()
}

/// A persisted vault item.
///
/// `encrypted_data` is an opaque ciphertext blob; storage backends never
/// interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultItem {
    pub id: ItemId,
    pub owner_id: OwnerId,
    pub encrypted_data: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_id_normalizes_case_and_whitespace() {
        let a = OwnerId::new("  Alice@Example.COM ").unwrap();
        let b = OwnerId::new("alice@example.com").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "alice@example.com");
    }

    #[test]
    fn owner_id_rejects_blank() {
        assert!(matches!(
            OwnerId::new("   "),
            Err(VaultError::InvalidInput(_))
        ));
    }

    #[test]
    fn item_id_parses_display_output() {
        let id = ItemId::new();
        let parsed: ItemId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn item_id_rejects_garbage() {
        let err = "not-a-uuid".parse::<ItemId>().unwrap_err();
        assert!(err.to_string().contains("invalid item id"));
    }

    #[test]
    fn vault_item_serializes_encrypted_data_field() {
        let now = Utc::now();
        let item = VaultItem {
            id: ItemId::new(),
            owner_id: OwnerId::new("bob@example.com").unwrap(),
            encrypted_data: "v1.abc.def".to_string(),
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["encrypted_data"], "v1.abc.def");
        assert_eq!(json["owner_id"], "bob@example.com");
    }
}
