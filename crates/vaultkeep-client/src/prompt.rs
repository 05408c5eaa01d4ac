// SPDX-FileCopyrightText: 2026 Vaultkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Master password acquisition via TTY prompt or VAULTKEEP_MASTER_PASSWORD.

use secrecy::{ExposeSecret, SecretString};
use vaultkeep_core::VaultError;

/// The environment variable name for providing the master password.
pub const MASTER_PASSWORD_ENV_VAR: &str = "VAULTKEEP_MASTER_PASSWORD";

fn from_env() -> Option<SecretString> {
    match std::env::var(MASTER_PASSWORD_ENV_VAR) {
        Ok(password) if !password.is_empty() => Some(SecretString::from(password)),
        _ => None,
    }
}

fn read_hidden(prompt: &str) -> Result<SecretString, VaultError> {
    eprint!("{prompt}");
    rpassword::read_password()
        .map(SecretString::from)
        .map_err(|e| VaultError::Internal(format!("failed to read master password: {e}")))
}

fn no_source() -> VaultError {
    VaultError::InvalidInput(format!(
        "no master password provided. Set {MASTER_PASSWORD_ENV_VAR} or run interactively"
    ))
}

fn reject_empty(password: SecretString) -> Result<SecretString, VaultError> {
    if password.expose_secret().is_empty() {
        return Err(VaultError::InvalidInput(
            "master password cannot be empty".to_string(),
        ));
    }
    Ok(password)
}

/// Get the master password from the environment or an interactive prompt.
///
/// Priority:
/// 1. `VAULTKEEP_MASTER_PASSWORD` (scripts, CI)
/// 2. Interactive TTY prompt via `rpassword`
pub fn get_master_password() -> Result<SecretString, VaultError> {
    if let Some(password) = from_env() {
        return Ok(password);
    }

    if std::io::IsTerminal::is_terminal(&std::io::stdin()) {
        return reject_empty(read_hidden("Master password: ")?);
    }

    Err(no_source())
}

/// Get a new master password, prompting twice on a terminal.
///
/// Used before the first item of an account is stored, when a typo would
/// otherwise lock the user out of everything they save.
pub fn get_master_password_with_confirm() -> Result<SecretString, VaultError> {
    // Env var does not need confirmation.
    if let Some(password) = from_env() {
        return Ok(password);
    }

    if std::io::IsTerminal::is_terminal(&std::io::stdin()) {
        let first = read_hidden("New master password: ")?;
        let second = read_hidden("Confirm master password: ")?;
        if first.expose_secret() != second.expose_secret() {
            return Err(VaultError::InvalidInput(
                "master passwords do not match".to_string(),
            ));
        }
        return reject_empty(first);
    }

    Err(no_source())
}
