// SPDX-FileCopyrightText: 2026 Vaultkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client-side cryptography for Vaultkeep.
//!
//! A master password and an account identifier are stretched into a 256-bit
//! [`EncryptionKey`] ([`kdf`]). Secret records are serialized to canonical
//! JSON and sealed with AES-256-GCM under that key ([`cipher`]), producing a
//! self-contained ciphertext string that is the only thing storage and
//! transport ever see. A [`Session`] owns the key for the lifetime of a
//! login and zeroizes it on logout.
//!
//! The password generator and strength scorer live here too because they
//! share the CSPRNG requirements.

pub mod aead;
pub mod cipher;
pub mod generator;
pub mod kdf;
pub mod key;
pub mod record;
pub mod secret;
pub mod session;
pub mod strength;

pub use cipher::{decrypt_record, encrypt_record};
pub use generator::{GeneratorOptions, generate_password};
pub use kdf::{KdfParams, derive_key, derive_key_with};
pub use key::EncryptionKey;
pub use record::SecretRecord;
pub use secret::generate_signing_secret;
pub use session::Session;
pub use strength::{PasswordStrength, StrengthLabel, score_password};
