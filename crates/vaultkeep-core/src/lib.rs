// SPDX-FileCopyrightText: 2026 Vaultkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for Vaultkeep.
//!
//! Holds the types shared by every other crate in the workspace: the
//! [`VaultError`] hierarchy, the opaque [`VaultItem`] persisted by storage
//! backends, and the [`VaultStore`] capability that the client encrypts
//! against. Nothing in this crate ever sees plaintext secrets or keys.

pub mod error;
pub mod traits;
pub mod types;

pub use error::VaultError;
pub use traits::VaultStore;
pub use types::{ItemId, OwnerId, VaultItem};
