//! Encrypted wallet file persistence.
//!
//! A wallet file is a single opaque blob: the JSON tree payload run
//! through `crypto::cipher`.  Saving rewrites the whole file; there is
//! no partial or incremental persistence, and a successful save is the
//! only durability boundary.

use std::fs;
use std::path::Path;

use crate::crypto::cipher;
use crate::errors::{Result, WalletError};
use crate::wallet::model::Wallet;

/// Current schema tag written into new wallets.
pub const CURRENT_VERSION: u32 = 1;

/// Encrypt and write the wallet to `path`.
///
/// The plaintext payload is pretty-printed JSON with stable field
/// order.  The file is written atomically: a temp file in the same
/// directory is renamed over the target, so readers never see a
/// half-written wallet.  Permissions are restricted to owner-only
/// read/write on Unix.
pub fn save_wallet(wallet: &Wallet, path: &Path, password: &str) -> Result<()> {
    let json = serde_json::to_vec_pretty(wallet)
        .map_err(|e| WalletError::SerializationError(format!("wallet: {e}")))?;

    let blob = cipher::encrypt(&json, password)?;

    // The temp file sits in the same directory so the rename is atomic
    // on the same filesystem.
    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    fs::write(&tmp_path, &blob)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&tmp_path, fs::Permissions::from_mode(0o600))?;
    }

    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Read, decrypt, and parse a wallet from `path`.
///
/// A missing file is `WalletNotFound`.  A parse failure after
/// successful decryption means the payload itself is corrupt and is
/// surfaced as `MalformedData`, distinct from `DecryptionFailed`.
pub fn load_wallet(path: &Path, password: &str) -> Result<Wallet> {
    if !path.exists() {
        return Err(WalletError::WalletNotFound(path.to_path_buf()));
    }

    let blob = fs::read(path)?;
    let json = cipher::decrypt(&blob, password)?;

    serde_json::from_slice(&json)
        .map_err(|e| WalletError::MalformedData(format!("wallet JSON: {e}")))
}

/// Whether a wallet file exists at `path`.
///
/// Existence probe only; the content is not validated.  Presentation
/// layers use this to choose between create-vault and unlock-vault
/// flows.
pub fn wallet_exists(path: &Path) -> bool {
    path.exists()
}

/// A fresh empty wallet with the current schema version.
pub fn create_new_wallet() -> Wallet {
    Wallet {
        version: CURRENT_VERSION,
        groups: Vec::new(),
    }
}
