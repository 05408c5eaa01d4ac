// SPDX-FileCopyrightText: 2026 Vaultkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `./vaultkeep.toml` > `~/.config/vaultkeep/vaultkeep.toml` >
//! `/etc/vaultkeep/vaultkeep.toml`, with `VAULTKEEP_` environment overrides
//! on top of all of them.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::VaultkeepConfig;

/// Config file name looked up in every directory of the hierarchy.
pub const CONFIG_FILE_NAME: &str = "vaultkeep.toml";

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "VAULTKEEP_";

/// Top-level sections that env var keys are split on.
const SECTIONS: &[&str] = &["client", "kdf", "generator", "storage"];

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/vaultkeep/vaultkeep.toml`
/// 3. `~/.config/vaultkeep/vaultkeep.toml`
/// 4. `./vaultkeep.toml`
/// 5. `VAULTKEEP_*` environment variables
pub fn load_config() -> Result<VaultkeepConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<VaultkeepConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VaultkeepConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one explicit file with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<VaultkeepConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VaultkeepConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used by [`load_config`] before extraction.
pub fn build_figment() -> Figment {
    let mut figment = Figment::new().merge(Serialized::defaults(VaultkeepConfig::default()));
    for path in config_file_paths() {
        figment = figment.merge(Toml::file(path));
    }
    figment.merge(env_provider())
}

/// Candidate config files, lowest precedence first.
pub fn config_file_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("/etc/vaultkeep").join(CONFIG_FILE_NAME)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("vaultkeep").join(CONFIG_FILE_NAME));
    }
    paths.push(PathBuf::from(CONFIG_FILE_NAME));
    paths
}

/// Env provider with explicit section mapping.
///
/// `Env::split("_")` would turn `VAULTKEEP_STORAGE_DATABASE_PATH` into
/// `storage.database.path`; only the first segment names a section.
/// Keys outside every section (such as `VAULTKEEP_MASTER_PASSWORD`) are not
/// configuration and are skipped.
fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX)
        .filter(|key| is_section_key(key.as_str()))
        .map(|key| map_env_key(key.as_str()).into())
}

fn is_section_key(key: &str) -> bool {
    map_env_key(key).contains('.')
}

/// Map a lowercased, prefix-stripped env key onto a dotted config path.
pub fn map_env_key(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    for section in SECTIONS {
        if let Some(rest) = key.strip_prefix(section).and_then(|r| r.strip_prefix('_'))
            && !rest.is_empty()
        {
            return format!("{section}.{rest}");
        }
    }
    key
}
