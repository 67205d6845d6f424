use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in PassWallet.
#[derive(Debug, Error)]
pub enum WalletError {
    // --- Service errors ---
    #[error("wallet not loaded")]
    NotLoaded,

    #[error("group not found")]
    GroupNotFound,

    #[error("entry not found")]
    EntryNotFound,

    #[error("invalid path: {0}")]
    InvalidPath(&'static str),

    // --- Uniqueness violations ---
    #[error("ID '{0}' already exists")]
    DuplicateId(String),

    #[error("group name '{0}' already exists")]
    DuplicateName(String),

    #[error("entry title '{0}' already exists")]
    DuplicateTitle(String),

    // --- Crypto errors ---
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: wrong password or corrupted data")]
    DecryptionFailed,

    // --- Storage errors ---
    #[error("malformed wallet data: {0}")]
    MalformedData(String),

    #[error("wallet file not found at {0}")]
    WalletNotFound(PathBuf),

    #[error("serialization error: {0}")]
    SerializationError(String),

    // --- Config errors ---
    #[error("config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for PassWallet results.
pub type Result<T> = std::result::Result<T, WalletError>;
