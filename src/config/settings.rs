use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, WalletError};

/// Project-level configuration, loaded from `.passwallet.toml`.
///
/// Every field has a sensible default so PassWallet works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Name of the wallet file inside the base directory.
    #[serde(default = "default_wallet_file")]
    pub wallet_file: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_wallet_file() -> String {
    "wallet.dat".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            wallet_file: default_wallet_file(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the base directory.
    const FILE_NAME: &'static str = ".passwallet.toml";

    /// Load settings from `<base_dir>/.passwallet.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(base_dir: &Path) -> Result<Self> {
        let config_path = base_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            WalletError::ConfigError(format!("failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Build the full path to the wallet file.
    ///
    /// Example: `base_dir/wallet.dat`
    pub fn wallet_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.wallet_file)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
