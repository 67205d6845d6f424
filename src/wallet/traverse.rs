//! Depth-first traversal and path resolution over the wallet tree.
//!
//! The traversal visits each group before its contents, each group's
//! entries before its subgroups, and honors a short-circuit contract:
//! a visit callback returning `false` halts the entire walk immediately.
//! Existence checks and single-result searches are built on that
//! contract.

use crate::errors::{Result, WalletError};
use crate::wallet::model::{Entry, Group, PathInfo, TreeItem, Wallet, WalletPath};

/// Pre-order depth-first walk over every group and entry in the wallet.
///
/// For each group, `visit` is invoked with the group itself, then with
/// each of its entries, then the walk descends into its subgroups.
/// Returning `false` from `visit` stops the whole traversal; no further
/// callbacks are made on any frame.
pub fn traverse_forward<'w, F>(wallet: &'w Wallet, mut visit: F)
where
    F: FnMut(&PathInfo<'w>) -> bool,
{
    walk(&wallet.groups, &[], 0, &mut visit);
}

/// Walk the full forward sequence in reverse order.
///
/// This is a sequence reversal of the forward enumeration, not a
/// structurally different walk; the short-circuit contract is the same.
pub fn traverse_backward<'w, F>(wallet: &'w Wallet, mut visit: F)
where
    F: FnMut(&PathInfo<'w>) -> bool,
{
    let mut items: Vec<PathInfo<'w>> = Vec::new();
    traverse_forward(wallet, |info| {
        items.push(info.clone());
        true
    });

    for info in items.iter().rev() {
        if !visit(info) {
            break;
        }
    }
}

/// Returns `false` as soon as a callback asks to stop.
fn walk<'w, F>(groups: &'w [Group], prefix: &[String], depth: usize, visit: &mut F) -> bool
where
    F: FnMut(&PathInfo<'w>) -> bool,
{
    for group in groups {
        let mut group_ids = prefix.to_vec();
        group_ids.push(group.id.clone());

        let info = PathInfo {
            path: WalletPath::to_group(group_ids.clone()),
            item: TreeItem::Group(group),
            depth,
        };
        if !visit(&info) {
            return false;
        }

        for entry in &group.entries {
            let info = PathInfo {
                path: WalletPath::to_entry(group_ids.clone(), entry.id.clone()),
                item: TreeItem::Entry(entry),
                depth,
            };
            if !visit(&info) {
                return false;
            }
        }

        if !walk(&group.groups, &group_ids, depth + 1, visit) {
            return false;
        }
    }
    true
}

/// Resolve a path to the group it addresses.
///
/// Each link of `path.group_ids` is looked up among the current
/// candidate groups, descending one level per link.  An empty path or a
/// broken link fails.
pub fn find_group_by_path<'w>(wallet: &'w Wallet, path: &WalletPath) -> Result<&'w Group> {
    if path.group_ids.is_empty() {
        return Err(WalletError::InvalidPath("path is empty"));
    }
    descend(&wallet.groups, &path.group_ids)
}

/// Mutable variant of [`find_group_by_path`].
pub fn find_group_by_path_mut<'w>(
    wallet: &'w mut Wallet,
    path: &WalletPath,
) -> Result<&'w mut Group> {
    if path.group_ids.is_empty() {
        return Err(WalletError::InvalidPath("path is empty"));
    }
    descend_mut(&mut wallet.groups, &path.group_ids)
}

fn descend<'w>(groups: &'w [Group], ids: &[String]) -> Result<&'w Group> {
    let group = groups
        .iter()
        .find(|g| g.id == ids[0])
        .ok_or(WalletError::GroupNotFound)?;

    match ids.len() {
        1 => Ok(group),
        _ => descend(&group.groups, &ids[1..]),
    }
}

fn descend_mut<'w>(groups: &'w mut [Group], ids: &[String]) -> Result<&'w mut Group> {
    let index = groups
        .iter()
        .position(|g| g.id == ids[0])
        .ok_or(WalletError::GroupNotFound)?;

    match ids.len() {
        1 => Ok(&mut groups[index]),
        _ => descend_mut(&mut groups[index].groups, &ids[1..]),
    }
}

/// Resolve a path to the entry it addresses.
///
/// The group chain is resolved first, then the group's entries are
/// searched linearly.  A path without an entry ID fails.
pub fn find_entry_by_path<'w>(wallet: &'w Wallet, path: &WalletPath) -> Result<&'w Entry> {
    let entry_id = path
        .entry_id
        .as_deref()
        .ok_or(WalletError::InvalidPath("path has no entry ID"))?;

    let group = find_group_by_path(wallet, path)?;
    group
        .entries
        .iter()
        .find(|e| e.id == entry_id)
        .ok_or(WalletError::EntryNotFound)
}

/// Mutable variant of [`find_entry_by_path`].
pub fn find_entry_by_path_mut<'w>(
    wallet: &'w mut Wallet,
    path: &WalletPath,
) -> Result<&'w mut Entry> {
    let entry_id = path
        .entry_id
        .as_deref()
        .ok_or(WalletError::InvalidPath("path has no entry ID"))?
        .to_string();

    let group = find_group_by_path_mut(wallet, path)?;
    group
        .entries
        .iter_mut()
        .find(|e| e.id == entry_id)
        .ok_or(WalletError::EntryNotFound)
}

/// Full-tree search for the path addressing the group with this ID.
///
/// IDs are unique, so the first match is the only match.
pub fn get_path_to_group(wallet: &Wallet, group_id: &str) -> Result<WalletPath> {
    let mut found = None;
    traverse_forward(wallet, |info| {
        if let TreeItem::Group(group) = info.item {
            if group.id == group_id {
                found = Some(info.path.clone());
                return false;
            }
        }
        true
    });
    found.ok_or(WalletError::GroupNotFound)
}

/// Full-tree search for the path addressing the entry with this ID.
pub fn get_path_to_entry(wallet: &Wallet, entry_id: &str) -> Result<WalletPath> {
    let mut found = None;
    traverse_forward(wallet, |info| {
        if let TreeItem::Entry(entry) = info.item {
            if entry.id == entry_id {
                found = Some(info.path.clone());
                return false;
            }
        }
        true
    });
    found.ok_or(WalletError::EntryNotFound)
}
