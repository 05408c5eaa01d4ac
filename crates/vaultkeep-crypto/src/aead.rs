// SPDX-FileCopyrightText: 2026 Vaultkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Low-level AES-256-GCM seal/open operations.
//!
//! Every call to [`seal`] draws a fresh 96-bit nonce from the system CSPRNG.
//! Nonce reuse under one key breaks GCM, so nonces are never accepted from
//! callers.

use ring::aead::{AES_256_GCM, Aad, LessSafeKey, Nonce, UnboundKey};
use ring::rand::{SecureRandom, SystemRandom};
use vaultkeep_core::VaultError;
use zeroize::Zeroizing;

use crate::key::EncryptionKey;

/// Length of the GCM authentication tag appended to every ciphertext.
pub const TAG_LEN: usize = 16;

/// Length of the random GCM nonce.
pub use ring::aead::NONCE_LEN;

fn less_safe_key(key: &EncryptionKey) -> Result<LessSafeKey, VaultError> {
    let unbound = UnboundKey::new(&AES_256_GCM, key.as_bytes())
        .map_err(|_| VaultError::Crypto("failed to create AES-256-GCM key".to_string()))?;
    Ok(LessSafeKey::new(unbound))
}

/// Encrypt `plaintext` with a random nonce, authenticating `aad` alongside.
///
/// Returns `(ciphertext_with_tag, nonce)`.
pub fn seal(
    key: &EncryptionKey,
    aad: &[u8],
    plaintext: &[u8],
) -> Result<(Vec<u8>, [u8; NONCE_LEN]), VaultError> {
    let sealing_key = less_safe_key(key)?;
    let nonce_bytes = random_bytes::<NONCE_LEN>()?;

    // Sealed in place: the buffer ends up as ciphertext followed by the tag.
    let mut in_out = plaintext.to_vec();
    sealing_key
        .seal_in_place_append_tag(
            Nonce::assume_unique_for_key(nonce_bytes),
            Aad::from(aad),
            &mut in_out,
        )
        .map_err(|_| VaultError::Crypto("AES-256-GCM encryption failed".to_string()))?;

    Ok((in_out, nonce_bytes))
}

/// Decrypt and authenticate `ciphertext` (which must end with the tag).
///
/// Any authentication failure, including a wrong key, is reported as
/// [`VaultError::DecryptionFailed`]. The returned plaintext is zeroized on
/// drop.
pub fn open(
    key: &EncryptionKey,
    nonce: &[u8; NONCE_LEN],
    aad: &[u8],
    ciphertext: &[u8],
) -> Result<Zeroizing<Vec<u8>>, VaultError> {
    if ciphertext.len() < TAG_LEN {
        return Err(VaultError::DecryptionFailed);
    }
    let opening_key = less_safe_key(key)?;

    let mut in_out = Zeroizing::new(ciphertext.to_vec());
    let plaintext_len = opening_key
        .open_in_place(
            Nonce::assume_unique_for_key(*nonce),
            Aad::from(aad),
            in_out.as_mut_slice(),
        )
        .map_err(|_| VaultError::DecryptionFailed)?
        .len();
    in_out.truncate(plaintext_len);
    Ok(in_out)
}

/// Fill a fixed-size buffer from the system CSPRNG.
pub fn random_bytes<const N: usize>() -> Result<[u8; N], VaultError> {
    let mut buf = [0u8; N];
    SystemRandom::new()
        .fill(&mut buf)
        .map_err(|_| VaultError::Crypto("system random generator failed".to_string()))?;
    Ok(buf)
}
