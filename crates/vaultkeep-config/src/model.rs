// SPDX-FileCopyrightText: 2026 Vaultkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key is
//! reported at startup instead of silently falling back to a default.

use serde::{Deserialize, Serialize};

/// Top-level Vaultkeep configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VaultkeepConfig {
    /// Client identity and logging.
    #[serde(default)]
    pub client: ClientConfig,

    /// Master-password key derivation.
    #[serde(default)]
    pub kdf: KdfConfig,

    /// Password generator defaults.
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Local ciphertext store.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Client identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Default account identifier (usually an email address). The CLI
    /// `--account` flag takes precedence.
    #[serde(default)]
    pub account: Option<String>,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            account: None,
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Key derivation function selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum KdfAlgorithm {
    /// PBKDF2 with HMAC-SHA256.
    Pbkdf2Sha256,
    /// Memory-hard Argon2id (v0x13).
    Argon2id,
}

/// Master-password key derivation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct KdfConfig {
    /// Which KDF to run (default: pbkdf2-sha256).
    #[serde(default = "default_kdf_algorithm")]
    pub algorithm: KdfAlgorithm,

    /// PBKDF2 iteration count (default: 600000).
    #[serde(default = "default_pbkdf2_iterations")]
    pub iterations: u32,

    /// Argon2id memory cost in KiB (default: 65536 = 64 MiB).
    #[serde(default = "default_memory_cost")]
    pub memory_cost: u32,

    /// Argon2id pass count (default: 3).
    #[serde(default = "default_time_cost")]
    pub time_cost: u32,

    /// Argon2id parallelism lanes (default: 1).
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl Default for KdfConfig {
    fn default() -> Self {
        Self {
            algorithm: default_kdf_algorithm(),
            iterations: default_pbkdf2_iterations(),
            memory_cost: default_memory_cost(),
            time_cost: default_time_cost(),
            parallelism: default_parallelism(),
        }
    }
}

fn default_kdf_algorithm() -> KdfAlgorithm {
    KdfAlgorithm::Pbkdf2Sha256
}

fn default_pbkdf2_iterations() -> u32 {
    600_000
}

fn default_memory_cost() -> u32 {
    65536
}

fn default_time_cost() -> u32 {
    3
}

fn default_parallelism() -> u32 {
    1
}

/// Password generator defaults, overridable per invocation.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Generated password length in characters (default: 16).
    #[serde(default = "default_generator_length")]
    pub length: usize,

    #[serde(default = "default_true")]
    pub lowercase: bool,

    #[serde(default = "default_true")]
    pub uppercase: bool,

    #[serde(default = "default_true")]
    pub numbers: bool,

    #[serde(default = "default_true")]
    pub symbols: bool,

    /// Drop `i l 1 L o 0 O` from the charset.
    #[serde(default)]
    pub exclude_look_alikes: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: default_generator_length(),
            lowercase: true,
            uppercase: true,
            numbers: true,
            symbols: true,
            exclude_look_alikes: false,
        }
    }
}

fn default_generator_length() -> usize {
    16
}

fn default_true() -> bool {
    true
}

/// Local ciphertext store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable SQLite WAL journal mode.
    #[serde(default = "default_true")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: true,
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|d| d.join("vaultkeep").join("vault.db"))
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "vaultkeep.db".to_string())
}
