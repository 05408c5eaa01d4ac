// SPDX-FileCopyrightText: 2026 Vaultkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `config check` command.

use std::path::Path;

use vaultkeep_config::{KdfAlgorithm, VaultkeepConfig};

/// Summarize the effective configuration. Loading already validated it.
pub(crate) fn summary(config: &VaultkeepConfig, source: Option<&Path>) -> String {
    let kdf = match config.kdf.algorithm {
        KdfAlgorithm::Pbkdf2Sha256 => {
            format!("pbkdf2-sha256 ({} iterations)", config.kdf.iterations)
        }
        KdfAlgorithm::Argon2id => format!(
            "argon2id (memory {} KiB, time cost {}, parallelism {})",
            config.kdf.memory_cost, config.kdf.time_cost, config.kdf.parallelism
        ),
    };
    let source = source
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "standard locations".to_string());

    format!(
        "configuration OK ({source})\n  account:  {}\n  kdf:      {kdf}\n  database: {}\n  wal mode: {}\n  log:      {}",
        config.client.account.as_deref().unwrap_or("(not set)"),
        config.storage.database_path,
        config.storage.wal_mode,
        config.client.log_level,
    )
}

pub fn check(config: &VaultkeepConfig, source: Option<&Path>) {
    println!("{}", summary(config, source));
}
