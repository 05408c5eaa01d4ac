// SPDX-FileCopyrightText: 2026 Vaultkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Random password generation from selectable character classes.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};
use vaultkeep_config::model::GeneratorConfig;
use vaultkeep_core::VaultError;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Characters that are easy to confuse with one another.
pub const LOOK_ALIKES: &str = "il1Lo0O";

/// Which characters a generated password may contain, and how many.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub exclude_look_alikes: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: 16,
            lowercase: true,
            uppercase: true,
            numbers: true,
            symbols: true,
            exclude_look_alikes: false,
        }
    }
}

impl From<&GeneratorConfig> for GeneratorOptions {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            length: config.length,
            lowercase: config.lowercase,
            uppercase: config.uppercase,
            numbers: config.numbers,
            symbols: config.symbols,
            exclude_look_alikes: config.exclude_look_alikes,
        }
    }
}

impl GeneratorOptions {
    /// The characters passwords are sampled from.
    ///
    /// With no class selected every class is used, so the result is never
    /// empty.
    pub fn charset(&self) -> Vec<char> {
        let any_selected = self.lowercase || self.uppercase || self.numbers || self.symbols;
        let classes = [
            (self.lowercase, LOWERCASE),
            (self.uppercase, UPPERCASE),
            (self.numbers, NUMBERS),
            (self.symbols, SYMBOLS),
        ];

        classes
            .iter()
            .filter(|(selected, _)| *selected || !any_selected)
            .flat_map(|(_, chars)| chars.chars())
            .filter(|c| !(self.exclude_look_alikes && LOOK_ALIKES.contains(*c)))
            .collect()
    }
}

/// Generate a password using the operating system CSPRNG.
pub fn generate_password(options: &GeneratorOptions) -> Result<String, VaultError> {
    generate_with(options, &mut OsRng)
}

/// Generate a password drawing from the supplied cryptographic RNG.
///
/// Each character is sampled independently and uniformly from
/// [`GeneratorOptions::charset`].
pub fn generate_with<R: RngCore + CryptoRng>(
    options: &GeneratorOptions,
    rng: &mut R,
) -> Result<String, VaultError> {
    if options.length == 0 {
        return Err(VaultError::InvalidInput(
            "password length must be at least 1".to_string(),
        ));
    }

    let charset = options.charset();
    Ok((0..options.length)
        .map(|_| charset[rng.gen_range(0..charset.len())])
        .collect())
}
