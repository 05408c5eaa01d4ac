// SPDX-FileCopyrightText: 2026 Vaultkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record encryption and the ciphertext blob format.
//!
//! ```text
//! v1.<base64url-no-pad(nonce)>.<base64url-no-pad(ciphertext+tag)>
//! ```
//!
//! The version label is also the AEAD associated data, so a blob cannot be
//! relabelled without failing authentication. Storage and transport treat
//! the whole string as opaque.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use tracing::debug;
use vaultkeep_core::VaultError;

use crate::aead::{self, NONCE_LEN, TAG_LEN};
use crate::key::EncryptionKey;
use crate::record::SecretRecord;

/// Current blob format label.
pub const BLOB_VERSION: &str = "v1";

const SEPARATOR: char = '.';

/// Encrypt a record under `key`, returning a self-contained blob.
///
/// Each call uses a fresh nonce, so encrypting the same record twice yields
/// different blobs.
pub fn encrypt_record(record: &SecretRecord, key: &EncryptionKey) -> Result<String, VaultError> {
    let plaintext = record.to_canonical_bytes()?;
    let blob = encrypt_bytes(&plaintext, key)?;
    debug!(blob_len = blob.len(), "record encrypted");
    Ok(blob)
}

/// Decrypt a blob produced by [`encrypt_record`].
///
/// Malformed, truncated, tampered blobs and blobs sealed under another key
/// all fail with [`VaultError::DecryptionFailed`]. Authentic bytes that are
/// not a record fail with [`VaultError::MalformedRecord`].
pub fn decrypt_record(blob: &str, key: &EncryptionKey) -> Result<SecretRecord, VaultError> {
    let plaintext = decrypt_bytes(blob, key)?;
    let record = SecretRecord::from_canonical_bytes(&plaintext)?;
    debug!(blob_len = blob.len(), "record decrypted");
    Ok(record)
}

pub(crate) fn encrypt_bytes(plaintext: &[u8], key: &EncryptionKey) -> Result<String, VaultError> {
    let (ciphertext, nonce) = aead::seal(key, BLOB_VERSION.as_bytes(), plaintext)?;
    Ok(format!(
        "{BLOB_VERSION}{SEPARATOR}{}{SEPARATOR}{}",
        URL_SAFE_NO_PAD.encode(nonce),
        URL_SAFE_NO_PAD.encode(ciphertext)
    ))
}

fn decrypt_bytes(
    blob: &str,
    key: &EncryptionKey,
) -> Result<zeroize::Zeroizing<Vec<u8>>, VaultError> {
    let (nonce, ciphertext) = parse_blob(blob)?;
    aead::open(key, &nonce, BLOB_VERSION.as_bytes(), &ciphertext)
}

/// Split and decode a blob. Every structural problem is `DecryptionFailed`.
fn parse_blob(blob: &str) -> Result<([u8; NONCE_LEN], Vec<u8>), VaultError> {
    let mut parts = blob.split(SEPARATOR);
    let (Some(version), Some(nonce_b64), Some(body_b64), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(VaultError::DecryptionFailed);
    };

    if version != BLOB_VERSION {
        debug!("unsupported ciphertext blob version");
        return Err(VaultError::DecryptionFailed);
    }

    let nonce: [u8; NONCE_LEN] = URL_SAFE_NO_PAD
        .decode(nonce_b64)
        .ok()
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(VaultError::DecryptionFailed)?;

    let body = URL_SAFE_NO_PAD
        .decode(body_b64)
        .map_err(|_| VaultError::DecryptionFailed)?;
    if body.len() < TAG_LEN {
        return Err(VaultError::DecryptionFailed);
    }

    Ok((nonce, body))
}
