//! Password-based AES-256-GCM authenticated encryption.
//!
//! Each call to `encrypt` derives a fresh key from the password with a
//! newly generated salt, encrypts under a fresh random 12-byte nonce,
//! and packs everything into a single self-contained blob.  `decrypt`
//! splits the blob back apart and re-derives the key from the embedded
//! salt.
//!
//! Layout of the returned byte buffer:
//!   [ 32-byte salt | 12-byte nonce | ciphertext + 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use zeroize::Zeroize;

use crate::crypto::kdf::{self, SALT_LEN};
use crate::errors::{Result, WalletError};

/// Size of the AES-256-GCM nonce in bytes.
const NONCE_LEN: usize = 12;

/// Encrypt `plaintext` with a key derived from `password`.
///
/// Returns salt || nonce || ciphertext so the caller only needs to
/// store one blob.  Every call produces a fresh salt and nonce.
pub fn encrypt(plaintext: &[u8], password: &str) -> Result<Vec<u8>> {
    let salt = kdf::generate_salt();
    let mut key = kdf::derive_key(password.as_bytes(), &salt);

    // Build the cipher from the derived key bytes.
    let cipher = Aes256Gcm::new_from_slice(&key)
        .map_err(|e| WalletError::EncryptionFailed(format!("invalid key length: {e}")));

    // Zeroize the derived key immediately; the cipher holds its own copy.
    key.zeroize();
    let cipher = cipher?;

    // Generate a random 12-byte nonce.
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    // Encrypt and authenticate the plaintext.
    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| WalletError::EncryptionFailed(format!("encryption error: {e}")))?;

    let mut output = Vec::with_capacity(SALT_LEN + NONCE_LEN + ciphertext.len());
    output.extend_from_slice(&salt);
    output.extend_from_slice(&nonce);
    output.extend_from_slice(&ciphertext);
    Ok(output)
}

/// Decrypt a blob that was produced by `encrypt`.
///
/// A blob too short to contain a salt and nonce is `MalformedData`.
/// A wrong password and a corrupted or tampered ciphertext both
/// surface as the same undifferentiated `DecryptionFailed`.
pub fn decrypt(blob: &[u8], password: &str) -> Result<Vec<u8>> {
    if blob.len() < SALT_LEN + NONCE_LEN {
        return Err(WalletError::MalformedData(
            "encrypted blob too short".into(),
        ));
    }

    // Split salt and nonce from the ciphertext.
    let (salt, rest) = blob.split_at(SALT_LEN);
    let (nonce_bytes, ciphertext) = rest.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    // Re-derive the key from the embedded salt and the supplied password.
    let mut key = kdf::derive_key(password.as_bytes(), salt);

    let cipher = Aes256Gcm::new_from_slice(&key).map_err(|_| WalletError::DecryptionFailed);
    key.zeroize();
    let cipher = cipher?;

    // Decrypt and verify the auth tag.
    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| WalletError::DecryptionFailed)
}

/// Encrypt `plaintext` and return the blob as a base64 string.
pub fn encrypt_to_base64(plaintext: &[u8], password: &str) -> Result<String> {
    let blob = encrypt(plaintext, password)?;
    Ok(BASE64.encode(blob))
}

/// Decrypt a base64-encoded blob produced by `encrypt_to_base64`.
pub fn decrypt_from_base64(encoded: &str, password: &str) -> Result<Vec<u8>> {
    let blob = BASE64
        .decode(encoded)
        .map_err(|e| WalletError::MalformedData(format!("invalid base64: {e}")))?;
    decrypt(&blob, password)
}
