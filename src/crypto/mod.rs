//! Cryptographic primitives for PassWallet.
//!
//! This module provides:
//! - Password-based AES-256-GCM encryption and decryption (`cipher`)
//! - PBKDF2-HMAC-SHA256 key derivation (`kdf`)

pub mod cipher;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, ...};
pub use cipher::{decrypt, decrypt_from_base64, encrypt, encrypt_to_base64};
pub use kdf::{derive_key, generate_salt};
