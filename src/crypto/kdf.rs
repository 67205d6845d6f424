//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The iteration count is deliberately high so that brute-forcing a
//! stolen wallet file stays expensive.  It is a fixed constant: the
//! wallet blob stores only the salt, so every file ever written must be
//! derivable with the same parameters.

use pbkdf2::pbkdf2_hmac;
use rand::TryRngCore;
use sha2::Sha256;

/// Length of the salt in bytes (256 bits).
pub const SALT_LEN: usize = 32;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// PBKDF2 iteration count.
pub const ITERATIONS: u32 = 100_000;

/// Derive a 32-byte encryption key from a password and salt.
///
/// The same password + salt will always produce the same key.
pub fn derive_key(password: &[u8], salt: &[u8]) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password, salt, ITERATIONS, &mut key);
    key
}

/// Generate a cryptographically random 32-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rngs::OsRng.try_fill_bytes(&mut salt).expect("OS RNG failure");
    salt
}
