// SPDX-FileCopyrightText: 2026 Vaultkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability traits implemented by collaborators outside the crypto core.

pub mod store;

pub use store::{VaultStore, require_encrypted_data};
