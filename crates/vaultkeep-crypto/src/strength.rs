// SPDX-FileCopyrightText: 2026 Vaultkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Password strength scoring.

use serde::Serialize;
use strum::{Display, EnumString};

/// Highest score [`score_password`] can return.
pub const MAX_SCORE: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
pub enum StrengthLabel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthLabel::Weak,
            3..=4 => StrengthLabel::Fair,
            5 => StrengthLabel::Good,
            _ => StrengthLabel::Strong,
        }
    }

    /// Display color for the label.
    pub fn color(self) -> &'static str {
        match self {
            StrengthLabel::Weak => "red",
            StrengthLabel::Fair => "orange",
            StrengthLabel::Good => "yellow",
            StrengthLabel::Strong => "green",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordStrength {
    pub score: u8,
    pub label: StrengthLabel,
    pub color: &'static str,
}

/// Score a password from 0 to [`MAX_SCORE`].
///
/// One point each for a length of at least 8, 12 and 16 characters, and one
/// each for containing a lowercase letter, an uppercase letter, a digit, and
/// any other character.
pub fn score_password(password: &str) -> PasswordStrength {
    let length = password.chars().count();
    let checks = [
        length >= 8,
        length >= 12,
        length >= 16,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    let score = checks.iter().filter(|passed| **passed).count() as u8;
    let label = StrengthLabel::from_score(score);

    PasswordStrength {
        score,
        label,
        color: label.color(),
    }
}
