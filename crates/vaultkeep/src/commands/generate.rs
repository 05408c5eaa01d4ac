// SPDX-FileCopyrightText: 2026 Vaultkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `generate`, `strength` and `gen-secret` commands.

use vaultkeep_config::VaultkeepConfig;
use vaultkeep_core::VaultError;
use vaultkeep_crypto::strength::MAX_SCORE;
use vaultkeep_crypto::{
    GeneratorOptions, PasswordStrength, generate_password, generate_signing_secret,
    score_password,
};

use super::{paint, use_color};
use crate::GenerateArgs;

/// Configured generator defaults with command-line overrides applied.
pub(crate) fn options_from(config: &VaultkeepConfig, args: &GenerateArgs) -> GeneratorOptions {
    let mut options = GeneratorOptions::from(&config.generator);
    if let Some(length) = args.length {
        options.length = length;
    }
    options.lowercase &= !args.no_lowercase;
    options.uppercase &= !args.no_uppercase;
    options.numbers &= !args.no_numbers;
    options.symbols &= !args.no_symbols;
    options.exclude_look_alikes |= args.exclude_look_alikes;
    options
}

pub(crate) fn format_strength(strength: &PasswordStrength, use_color: bool) -> String {
    format!(
        "strength: {}/{MAX_SCORE} {}",
        strength.score,
        paint(&strength.label.to_string(), strength.color, use_color)
    )
}

/// Print a password on stdout and its strength on stderr.
pub fn generate(config: &VaultkeepConfig, args: &GenerateArgs) -> Result<(), VaultError> {
    let password = generate_password(&options_from(config, args))?;
    println!("{password}");
    eprintln!("{}", format_strength(&score_password(&password), use_color()));
    Ok(())
}

pub fn strength(password: &str) {
    println!("{}", format_strength(&score_password(password), use_color()));
}

pub fn gen_secret() -> Result<(), VaultError> {
    let secret = generate_signing_secret()?;
    println!("{}", secret.as_str());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaultkeep_crypto::StrengthLabel;

    #[test]
    fn flags_override_config() {
        let config = VaultkeepConfig::default();
        let args = GenerateArgs {
            length: Some(32),
            no_symbols: true,
            exclude_look_alikes: true,
            ..GenerateArgs::default()
        };
        let options = options_from(&config, &args);
        assert_eq!(options.length, 32);
        assert!(!options.symbols);
        assert!(options.lowercase && options.uppercase && options.numbers);
        assert!(options.exclude_look_alikes);
    }

    #[test]
    fn no_flags_keeps_config() {
        let mut config = VaultkeepConfig::default();
        config.generator.length = 20;
        config.generator.numbers = false;
        let options = options_from(&config, &GenerateArgs::default());
        assert_eq!(options.length, 20);
        assert!(!options.numbers);
    }

    #[test]
    fn strength_line_without_color() {
        let strength = PasswordStrength {
            score: 5,
            label: StrengthLabel::Good,
            color: "yellow",
        };
        assert_eq!(format_strength(&strength, false), "strength: 5/7 Good");
    }
}
