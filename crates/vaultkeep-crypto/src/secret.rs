// SPDX-FileCopyrightText: 2026 Vaultkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! High-entropy secret for signing session tokens.

use vaultkeep_core::VaultError;
use zeroize::Zeroizing;

use crate::aead::random_bytes;

/// Random bytes in a signing secret.
pub const SIGNING_SECRET_LEN: usize = 32;

/// 32 CSPRNG bytes, hex-encoded (64 characters).
pub fn generate_signing_secret() -> Result<Zeroizing<String>, VaultError> {
    let bytes = Zeroizing::new(random_bytes::<SIGNING_SECRET_LEN>()?);
    Ok(Zeroizing::new(hex::encode(bytes.as_slice())))
}
