// SPDX-FileCopyrightText: 2026 Vaultkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subcommand implementations.

pub mod config;
pub mod generate;
pub mod items;

use std::io::IsTerminal;

use colored::Colorize;

/// Whether stdout should get ANSI colors.
pub(crate) fn use_color() -> bool {
    std::io::stdout().is_terminal()
}

/// Paint `text` with one of the strength colors.
pub(crate) fn paint(text: &str, color: &str, use_color: bool) -> String {
    if !use_color {
        return text.to_string();
    }
    match color {
        "red" => text.red().to_string(),
        "orange" => text.truecolor(255, 165, 0).to_string(),
        "yellow" => text.yellow().to_string(),
        "green" => text.green().to_string(),
        _ => text.to_string(),
    }
}
