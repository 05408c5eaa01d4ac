// SPDX-FileCopyrightText: 2026 Vaultkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! The KDF functions accept any non-zero cost; the floors below are where the
//! deployment policy lives.

use crate::diagnostic::ConfigError;
use crate::model::{KdfAlgorithm, VaultkeepConfig};

/// Lowest PBKDF2-HMAC-SHA256 iteration count accepted from configuration.
pub const MIN_PBKDF2_ITERATIONS: u32 = 300_000;

/// Lowest Argon2id memory cost in KiB (OWASP minimum, 19 MiB).
pub const MIN_ARGON2_MEMORY_KIB: u32 = 19_456;

/// Lowest Argon2id pass count.
pub const MIN_ARGON2_TIME_COST: u32 = 2;

/// Longest password the generator will produce.
pub const MAX_GENERATOR_LENGTH: usize = 1024;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration.
///
/// Collects every failure instead of stopping at the first.
pub fn validate_config(config: &VaultkeepConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    if !LOG_LEVELS.contains(&config.client.log_level.as_str()) {
        fail(format!(
            "client.log_level must be one of {}, got `{}`",
            LOG_LEVELS.join(", "),
            config.client.log_level
        ));
    }

    if let Some(account) = &config.client.account
        && account.trim().is_empty()
    {
        fail("client.account must not be blank when set".to_string());
    }

    let kdf = &config.kdf;
    match kdf.algorithm {
        KdfAlgorithm::Pbkdf2Sha256 => {
            if kdf.iterations < MIN_PBKDF2_ITERATIONS {
                fail(format!(
                    "kdf.iterations must be at least {MIN_PBKDF2_ITERATIONS} for pbkdf2-sha256, got {}",
                    kdf.iterations
                ));
            }
        }
        KdfAlgorithm::Argon2id => {
            if kdf.memory_cost < MIN_ARGON2_MEMORY_KIB {
                fail(format!(
                    "kdf.memory_cost must be at least {MIN_ARGON2_MEMORY_KIB} KiB for argon2id, got {}",
                    kdf.memory_cost
                ));
            }
            if kdf.time_cost < MIN_ARGON2_TIME_COST {
                fail(format!(
                    "kdf.time_cost must be at least {MIN_ARGON2_TIME_COST} for argon2id, got {}",
                    kdf.time_cost
                ));
            }
            if kdf.parallelism < 1 {
                fail(format!(
                    "kdf.parallelism must be at least 1, got {}",
                    kdf.parallelism
                ));
            }
        }
    }

    let length = config.generator.length;
    if length == 0 || length > MAX_GENERATOR_LENGTH {
        fail(format!(
            "generator.length must be between 1 and {MAX_GENERATOR_LENGTH}, got {length}"
        ));
    }

    if config.storage.database_path.trim().is_empty() {
        fail("storage.database_path must not be empty".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_message(errors: &[ConfigError], needle: &str) -> bool {
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains(needle)))
    }

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&VaultkeepConfig::default()).is_ok());
    }

    #[test]
    fn legacy_iteration_count_is_rejected() {
        let mut config = VaultkeepConfig::default();
        config.kdf.iterations = 10_000;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "kdf.iterations"));
    }

    #[test]
    fn iteration_floor_is_inclusive() {
        let mut config = VaultkeepConfig::default();
        config.kdf.iterations = MIN_PBKDF2_ITERATIONS;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn argon2_costs_are_checked_only_when_selected() {
        let mut config = VaultkeepConfig::default();
        config.kdf.memory_cost = 1024;
        assert!(validate_config(&config).is_ok());

        config.kdf.algorithm = KdfAlgorithm::Argon2id;
        config.kdf.time_cost = 1;
        config.kdf.parallelism = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "kdf.memory_cost"));
        assert!(has_message(&errors, "kdf.time_cost"));
        assert!(has_message(&errors, "kdf.parallelism"));
    }

    #[test]
    fn generator_length_bounds() {
        let mut config = VaultkeepConfig::default();
        config.generator.length = 0;
        assert!(has_message(
            &validate_config(&config).unwrap_err(),
            "generator.length"
        ));
        config.generator.length = MAX_GENERATOR_LENGTH + 1;
        assert!(has_message(
            &validate_config(&config).unwrap_err(),
            "generator.length"
        ));
    }

    #[test]
    fn collects_all_errors() {
        let mut config = VaultkeepConfig::default();
        config.client.log_level = "loud".to_string();
        config.storage.database_path = "  ".to_string();
        config.kdf.iterations = 1;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn blank_account_is_rejected() {
        let mut config = VaultkeepConfig::default();
        config.client.account = Some(" ".to_string());
        assert!(has_message(
            &validate_config(&config).unwrap_err(),
            "client.account"
        ));
    }
}
