// SPDX-FileCopyrightText: 2026 Vaultkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client side of the vault.
//!
//! [`VaultClient`] binds an unlocked [`Session`](vaultkeep_crypto::Session)
//! to a [`VaultStore`](vaultkeep_core::VaultStore): records are encrypted
//! before they reach the store and decrypted after they come back, so the
//! store only ever handles ciphertext blobs.

pub mod client;
pub mod mask;
pub mod prompt;

pub use client::{DecryptedItem, ListedItem, VaultClient};
pub use mask::mask_secret;
