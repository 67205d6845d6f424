//! Random ID generation and wallet-wide uniqueness probes.
//!
//! IDs are short prefixed hex tokens drawn from the OS random source.
//! Collision-avoidance and unpredictability both matter, so the same
//! CSPRNG that backs salt generation is used here.  All probes ride the
//! traversal short-circuit: they stop at the first hit.

use rand::TryRngCore;

use crate::wallet::model::{TreeItem, Wallet};
use crate::wallet::traverse::traverse_forward;

/// Generate a group ID that does not collide with any existing group.
pub(crate) fn generate_group_id(wallet: &Wallet) -> String {
    loop {
        let id = random_token("grp");
        if !group_id_exists(wallet, &id) {
            return id;
        }
    }
}

/// Generate an entry ID that does not collide with any existing entry.
pub(crate) fn generate_entry_id(wallet: &Wallet) -> String {
    loop {
        let id = random_token("ent");
        if !entry_id_exists(wallet, &id) {
            return id;
        }
    }
}

/// A prefixed token over 8 cryptographically random bytes.
fn random_token(prefix: &str) -> String {
    let mut bytes = [0u8; 8];
    rand::rngs::OsRng.try_fill_bytes(&mut bytes).expect("OS RNG failure");
    format!("{prefix}-{:016x}", u64::from_be_bytes(bytes))
}

/// Whether any group in the wallet has this ID.
pub(crate) fn group_id_exists(wallet: &Wallet, group_id: &str) -> bool {
    let mut exists = false;
    traverse_forward(wallet, |info| {
        if let TreeItem::Group(group) = info.item {
            if group.id == group_id {
                exists = true;
                return false;
            }
        }
        true
    });
    exists
}

/// Whether any entry in the wallet has this ID.
pub(crate) fn entry_id_exists(wallet: &Wallet, entry_id: &str) -> bool {
    let mut exists = false;
    traverse_forward(wallet, |info| {
        if let TreeItem::Entry(entry) = info.item {
            if entry.id == entry_id {
                exists = true;
                return false;
            }
        }
        true
    });
    exists
}

/// Whether any group in the wallet has this name.
///
/// `exclude_id` skips one group (the one being renamed) so updates can
/// keep their own name.
pub(crate) fn group_name_exists(wallet: &Wallet, name: &str, exclude_id: Option<&str>) -> bool {
    let mut exists = false;
    traverse_forward(wallet, |info| {
        if let TreeItem::Group(group) = info.item {
            if group.name == name && exclude_id != Some(group.id.as_str()) {
                exists = true;
                return false;
            }
        }
        true
    });
    exists
}

/// Whether any entry in the wallet has this title.
pub(crate) fn entry_title_exists(wallet: &Wallet, title: &str, exclude_id: Option<&str>) -> bool {
    let mut exists = false;
    traverse_forward(wallet, |info| {
        if let TreeItem::Entry(entry) = info.item {
            if entry.title == title && exclude_id != Some(entry.id.as_str()) {
                exists = true;
                return false;
            }
        }
        true
    });
    exists
}
