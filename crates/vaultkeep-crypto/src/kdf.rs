// SPDX-FileCopyrightText: 2026 Vaultkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Master-password key derivation.
//!
//! The salt is `SHA-256(normalized account identifier)`, so the key can be
//! re-derived at every login without storing anything server-side. The
//! stretching step is PBKDF2-HMAC-SHA256 by default, or Argon2id when
//! configured. Cost floors are enforced by configuration validation, not
//! here, so tests can use cheap parameters.

use std::num::NonZeroU32;

use ring::{digest, pbkdf2};
use tracing::debug;
use vaultkeep_config::model::{KdfAlgorithm, KdfConfig};
use vaultkeep_core::VaultError;
use vaultkeep_core::types::normalize_account;

use crate::key::{EncryptionKey, KEY_LEN};

/// Default PBKDF2 iteration count.
pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 600_000;

/// Salt length produced by [`account_salt`].
pub const SALT_LEN: usize = 32;

/// Key derivation algorithm and cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KdfParams {
    Pbkdf2Sha256 {
        iterations: u32,
    },
    Argon2id {
        /// Memory cost in KiB.
        memory_cost: u32,
        time_cost: u32,
        parallelism: u32,
    },
}

impl KdfParams {
    /// Short algorithm name for logs and diagnostics.
    pub fn algorithm_name(&self) -> &'static str {
        match self {
            KdfParams::Pbkdf2Sha256 { .. } => "pbkdf2-sha256",
            KdfParams::Argon2id { .. } => "argon2id",
        }
    }
}

impl Default for KdfParams {
    fn default() -> Self {
        KdfParams::Pbkdf2Sha256 {
            iterations: DEFAULT_PBKDF2_ITERATIONS,
        }
    }
}

impl From<&KdfConfig> for KdfParams {
    fn from(config: &KdfConfig) -> Self {
        match config.algorithm {
            KdfAlgorithm::Pbkdf2Sha256 => KdfParams::Pbkdf2Sha256 {
                iterations: config.iterations,
            },
            KdfAlgorithm::Argon2id => KdfParams::Argon2id {
                memory_cost: config.memory_cost,
                time_cost: config.time_cost,
                parallelism: config.parallelism,
            },
        }
    }
}

/// Salt bound to an account: SHA-256 of the normalized identifier.
pub fn account_salt(account: &str) -> Result<[u8; SALT_LEN], VaultError> {
    let normalized = normalize_account(account);
    if normalized.is_empty() {
        return Err(VaultError::InvalidInput(
            "account identifier cannot be empty".to_string(),
        ));
    }

    let hash = digest::digest(&digest::SHA256, normalized.as_bytes());
    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(hash.as_ref());
    Ok(salt)
}

/// Derive a key with [`KdfParams::default`].
pub fn derive_key(master_password: &str, account: &str) -> Result<EncryptionKey, VaultError> {
    derive_key_with(master_password, account, &KdfParams::default())
}

/// Derive a key from a master password and account identifier.
///
/// Deterministic: the same inputs always produce the same key. Fails with
/// `InvalidInput` for an empty password, an empty account identifier, or a
/// zero cost parameter.
pub fn derive_key_with(
    master_password: &str,
    account: &str,
    params: &KdfParams,
) -> Result<EncryptionKey, VaultError> {
    if master_password.is_empty() {
        return Err(VaultError::InvalidInput(
            "master password cannot be empty".to_string(),
        ));
    }
    let salt = account_salt(account)?;

    let mut key = EncryptionKey::zeroed();
    match *params {
        KdfParams::Pbkdf2Sha256 { iterations } => {
            let iterations = NonZeroU32::new(iterations).ok_or_else(|| {
                VaultError::InvalidInput("PBKDF2 iteration count must be non-zero".to_string())
            })?;
            pbkdf2::derive(
                pbkdf2::PBKDF2_HMAC_SHA256,
                iterations,
                &salt,
                master_password.as_bytes(),
                key.bytes_mut(),
            );
        }
        KdfParams::Argon2id {
            memory_cost,
            time_cost,
            parallelism,
        } => {
            let argon_params =
                argon2::Params::new(memory_cost, time_cost, parallelism, Some(KEY_LEN))
                    .map_err(|e| VaultError::InvalidInput(format!("invalid Argon2id parameters: {e}")))?;
            argon2::Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, argon_params)
                .hash_password_into(master_password.as_bytes(), &salt, key.bytes_mut())
                .map_err(|e| VaultError::Crypto(format!("Argon2id key derivation failed: {e}")))?;
        }
    }

    debug!(algorithm = params.algorithm_name(), "encryption key derived");
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAST: KdfParams = KdfParams::Pbkdf2Sha256 { iterations: 1_000 };
    const FAST_ARGON: KdfParams = KdfParams::Argon2id {
        memory_cost: 8192,
        time_cost: 1,
        parallelism: 1,
    };

    #[test]
    fn salt_is_sha256_of_normalized_account() {
        let salt = account_salt("alice@example.com").unwrap();
        assert_eq!(
            hex::encode(salt),
            "ff8d9819fc0e12bf0d24892e45987e249a28dce836a85cad60e28eaaa8c6d976"
        );
        assert_eq!(account_salt("  ALICE@Example.com\n").unwrap(), salt);
    }

    #[test]
    fn pbkdf2_matches_known_answer() {
        let key = derive_key_with("correct horse battery staple", "alice@example.com", &FAST)
            .unwrap();
        assert_eq!(
            hex::encode(key.as_bytes()),
            "112785743fd1b30b7704eece860961d62b07c2e046fa6a20f0f2523354fe5534"
        );

        let one = KdfParams::Pbkdf2Sha256 { iterations: 1 };
        let key = derive_key_with("correct horse battery staple", "alice@example.com", &one)
            .unwrap();
        assert_eq!(
            hex::encode(key.as_bytes()),
            "21623d254a95f53920613e85206c986cd4258f4197b3bd025d4106f0aea66431"
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let key1 = derive_key_with("master-pass", "bob@example.com", &FAST).unwrap();
        let key2 = derive_key_with("master-pass", "bob@example.com", &FAST).unwrap();
        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn different_account_different_key() {
        let key1 = derive_key_with("master-pass", "bob@example.com", &FAST).unwrap();
        let key2 = derive_key_with("master-pass", "carol@example.com", &FAST).unwrap();
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn different_password_different_key() {
        let key1 = derive_key_with("master-pass-one", "bob@example.com", &FAST).unwrap();
        let key2 = derive_key_with("master-pass-two", "bob@example.com", &FAST).unwrap();
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn iteration_count_changes_key() {
        let key1 = derive_key_with("master-pass", "bob@example.com", &FAST).unwrap();
        let key2 = derive_key_with(
            "master-pass",
            "bob@example.com",
            &KdfParams::Pbkdf2Sha256 { iterations: 1_001 },
        )
        .unwrap();
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn empty_password_rejected() {
        let err = derive_key_with("", "bob@example.com", &FAST).unwrap_err();
        assert!(matches!(err, VaultError::InvalidInput(_)));
        assert!(err.to_string().contains("master password cannot be empty"));
    }

    #[test]
    fn empty_account_rejected() {
        for account in ["", "   "] {
            let err = derive_key_with("master-pass", account, &FAST).unwrap_err();
            assert!(matches!(err, VaultError::InvalidInput(_)));
        }
    }

    #[test]
    fn zero_iterations_rejected() {
        let err = derive_key_with(
            "master-pass",
            "bob@example.com",
            &KdfParams::Pbkdf2Sha256 { iterations: 0 },
        )
        .unwrap_err();
        assert!(matches!(err, VaultError::InvalidInput(_)));
    }

    #[test]
    fn argon2id_is_deterministic_and_distinct_from_pbkdf2() {
        let a1 = derive_key_with("master-pass", "bob@example.com", &FAST_ARGON).unwrap();
        let a2 = derive_key_with("master-pass", "bob@example.com", &FAST_ARGON).unwrap();
        let p = derive_key_with("master-pass", "bob@example.com", &FAST).unwrap();
        assert_eq!(a1.as_bytes(), a2.as_bytes());
        assert_ne!(a1.as_bytes(), p.as_bytes());
    }

    #[test]
    fn argon2id_rejects_invalid_params() {
        let bad = KdfParams::Argon2id {
            memory_cost: 8192,
            time_cost: 0,
            parallelism: 1,
        };
        let err = derive_key_with("master-pass", "bob@example.com", &bad).unwrap_err();
        assert!(matches!(err, VaultError::InvalidInput(_)));
    }

    #[test]
    fn params_follow_config() {
        let mut config = KdfConfig::default();
        assert_eq!(
            KdfParams::from(&config),
            KdfParams::Pbkdf2Sha256 { iterations: 600_000 }
        );

        config.algorithm = KdfAlgorithm::Argon2id;
        assert_eq!(
            KdfParams::from(&config),
            KdfParams::Argon2id {
                memory_cost: 65536,
                time_cost: 3,
                parallelism: 1
            }
        );
        assert_eq!(KdfParams::default().algorithm_name(), "pbkdf2-sha256");
    }
}
