//! High-level wallet operations used by presentation shells.
//!
//! `WalletService` owns one in-memory `Wallet` plus the bound file path
//! and password, so that callers can work with simple method calls like
//! `service.add_group(&path, Group::new("Personal"))`.
//!
//! Every mutation enforces the wallet-wide uniqueness invariants before
//! touching the tree: a failed check leaves the wallet exactly as it
//! was.  Nothing is persisted until `save`.

use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

use crate::errors::{Result, WalletError};
use crate::wallet::idgen;
use crate::wallet::model::{Entry, Group, PathInfo, Wallet, WalletPath};
use crate::wallet::storage;
use crate::wallet::traverse;

/// The main wallet handle.
///
/// Starts unloaded; `load` or `create_new` transitions it to loaded,
/// after which mutation and query methods may be freely interleaved
/// with `save`.  There is no explicit unload: presentation layers drop
/// the service to "lock" the vault.
pub struct WalletService {
    /// The in-memory tree.  `None` until `load` or `create_new`.
    wallet: Option<Wallet>,

    /// Path to the wallet file on disk.
    path: PathBuf,

    /// The master password (zeroized on drop).
    password: Zeroizing<String>,
}

impl WalletService {
    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Create a service bound to a wallet file and password.
    ///
    /// Does not touch the filesystem; call `load` or `create_new` next.
    pub fn new(path: impl Into<PathBuf>, password: impl Into<String>) -> Self {
        Self {
            wallet: None,
            path: path.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Load the wallet from the bound file, replacing any loaded state.
    pub fn load(&mut self) -> Result<()> {
        let wallet = storage::load_wallet(&self.path, &self.password)?;
        self.wallet = Some(wallet);
        Ok(())
    }

    /// Create a fresh empty wallet and persist it immediately.
    pub fn create_new(&mut self) -> Result<()> {
        self.wallet = Some(storage::create_new_wallet());
        self.save()
    }

    /// Encrypt and write the wallet to the bound file.
    pub fn save(&self) -> Result<()> {
        let wallet = self.wallet.as_ref().ok_or(WalletError::NotLoaded)?;
        storage::save_wallet(wallet, &self.path, &self.password)
    }

    /// The current in-memory tree, if loaded.
    pub fn wallet(&self) -> Option<&Wallet> {
        self.wallet.as_ref()
    }

    /// Whether `load` or `create_new` has succeeded.
    pub fn is_loaded(&self) -> bool {
        self.wallet.is_some()
    }

    /// The path to the bound wallet file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Add a group under the group addressed by `path`, or at the root
    /// when the path is empty.  Returns the group's ID.
    ///
    /// An empty `group.id` gets a freshly generated unique ID; a
    /// non-empty one must not collide with any existing group.  The
    /// name must be unique among all groups in the wallet.
    pub fn add_group(&mut self, path: &WalletPath, mut group: Group) -> Result<String> {
        let wallet = self.wallet.as_mut().ok_or(WalletError::NotLoaded)?;

        if group.id.is_empty() {
            group.id = idgen::generate_group_id(wallet);
        } else if idgen::group_id_exists(wallet, &group.id) {
            return Err(WalletError::DuplicateId(group.id));
        }

        if idgen::group_name_exists(wallet, &group.name, None) {
            return Err(WalletError::DuplicateName(group.name));
        }

        let id = group.id.clone();
        if path.is_root() {
            wallet.groups.push(group);
        } else {
            let parent = traverse::find_group_by_path_mut(wallet, path)?;
            parent.groups.push(group);
        }
        Ok(id)
    }

    /// Add an entry to the group addressed by `path`.  Returns the
    /// entry's ID.
    ///
    /// The path must target a group, not an entry.  ID handling mirrors
    /// `add_group`; the title must be unique among all entries in the
    /// wallet.
    pub fn add_entry(&mut self, path: &WalletPath, mut entry: Entry) -> Result<String> {
        let wallet = self.wallet.as_mut().ok_or(WalletError::NotLoaded)?;

        if path.entry_id.is_some() {
            return Err(WalletError::InvalidPath(
                "path must target a group, not an entry",
            ));
        }

        if entry.id.is_empty() {
            entry.id = idgen::generate_entry_id(wallet);
        } else if idgen::entry_id_exists(wallet, &entry.id) {
            return Err(WalletError::DuplicateId(entry.id));
        }

        if idgen::entry_title_exists(wallet, &entry.title, None) {
            return Err(WalletError::DuplicateTitle(entry.title));
        }

        let id = entry.id.clone();
        let group = traverse::find_group_by_path_mut(wallet, path)?;
        group.entries.push(entry);
        Ok(id)
    }

    /// Rename the group addressed by `path`.
    ///
    /// Only the name is taken from `updated`; the target keeps its ID,
    /// child groups, and entries.  The new name is checked against all
    /// other groups, the target itself excluded by ID.
    pub fn update_group(&mut self, path: &WalletPath, updated: Group) -> Result<()> {
        let wallet = self.wallet.as_mut().ok_or(WalletError::NotLoaded)?;

        let target_id = path
            .group_ids
            .last()
            .ok_or(WalletError::InvalidPath("cannot update the wallet root"))?;

        if idgen::group_name_exists(wallet, &updated.name, Some(target_id.as_str())) {
            return Err(WalletError::DuplicateName(updated.name));
        }

        let target = traverse::find_group_by_path_mut(wallet, path)?;
        target.name = updated.name;
        Ok(())
    }

    /// Replace the title and fields of the entry addressed by `path`.
    ///
    /// The path must include an entry ID; the target keeps its own ID.
    /// The new title is checked against all other entries.
    pub fn update_entry(&mut self, path: &WalletPath, updated: Entry) -> Result<()> {
        let wallet = self.wallet.as_mut().ok_or(WalletError::NotLoaded)?;

        let entry_id = path
            .entry_id
            .as_deref()
            .ok_or(WalletError::InvalidPath("path has no entry ID"))?;

        // Resolve first so a dangling path fails before the title check.
        traverse::find_entry_by_path(wallet, path)?;

        if idgen::entry_title_exists(wallet, &updated.title, Some(entry_id)) {
            return Err(WalletError::DuplicateTitle(updated.title));
        }

        let entry = traverse::find_entry_by_path_mut(wallet, path)?;
        entry.title = updated.title;
        entry.fields = updated.fields;
        Ok(())
    }

    /// Remove the group addressed by `path` together with everything it
    /// owns.
    ///
    /// Ownership is structural, so removing the subtree reference is
    /// the cascade.  Removal is stable: sibling order is preserved.
    pub fn delete_group(&mut self, path: &WalletPath) -> Result<()> {
        let wallet = self.wallet.as_mut().ok_or(WalletError::NotLoaded)?;

        let target_id = path
            .group_ids
            .last()
            .ok_or(WalletError::InvalidPath("cannot delete the wallet root"))?
            .clone();

        let parent_path = path.parent();
        let siblings = if parent_path.is_root() {
            &mut wallet.groups
        } else {
            &mut traverse::find_group_by_path_mut(wallet, &parent_path)?.groups
        };

        let index = siblings
            .iter()
            .position(|g| g.id == target_id)
            .ok_or(WalletError::GroupNotFound)?;
        siblings.remove(index);
        Ok(())
    }

    /// Remove the entry addressed by `path` from its owning group.
    pub fn delete_entry(&mut self, path: &WalletPath) -> Result<()> {
        let wallet = self.wallet.as_mut().ok_or(WalletError::NotLoaded)?;

        let entry_id = path
            .entry_id
            .as_deref()
            .ok_or(WalletError::InvalidPath("path has no entry ID"))?
            .to_string();

        let group = traverse::find_group_by_path_mut(wallet, path)?;
        let index = group
            .entries
            .iter()
            .position(|e| e.id == entry_id)
            .ok_or(WalletError::EntryNotFound)?;
        group.entries.remove(index);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Find a group by its ID, returning its path and a reference.
    pub fn find_group_by_id(&self, group_id: &str) -> Result<(WalletPath, &Group)> {
        let wallet = self.wallet.as_ref().ok_or(WalletError::NotLoaded)?;

        let path = traverse::get_path_to_group(wallet, group_id)?;
        let group = traverse::find_group_by_path(wallet, &path)?;
        Ok((path, group))
    }

    /// Find an entry by its ID, returning its path and a reference.
    pub fn find_entry_by_id(&self, entry_id: &str) -> Result<(WalletPath, &Entry)> {
        let wallet = self.wallet.as_ref().ok_or(WalletError::NotLoaded)?;

        let path = traverse::get_path_to_entry(wallet, entry_id)?;
        let entry = traverse::find_entry_by_path(wallet, &path)?;
        Ok((path, entry))
    }

    /// Forward traversal over the loaded wallet; no-op when unloaded.
    pub fn traverse_forward<'s, F>(&'s self, visit: F)
    where
        F: FnMut(&PathInfo<'s>) -> bool,
    {
        if let Some(wallet) = &self.wallet {
            traverse::traverse_forward(wallet, visit);
        }
    }

    /// Backward traversal over the loaded wallet; no-op when unloaded.
    pub fn traverse_backward<'s, F>(&'s self, visit: F)
    where
        F: FnMut(&PathInfo<'s>) -> bool,
    {
        if let Some(wallet) = &self.wallet {
            traverse::traverse_backward(wallet, visit);
        }
    }
}
