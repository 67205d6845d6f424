//! Wallet module: the encrypted password store.
//!
//! This module provides:
//! - The tree data model: `Wallet`, `Group`, `Entry` and friends (`model`)
//! - Encrypted file persistence (`storage`)
//! - Depth-first traversal and path resolution (`traverse`)
//! - The high-level `WalletService` mutation API (`service`)

mod idgen;
pub mod model;
pub mod service;
pub mod storage;
pub mod traverse;

// Re-export the most commonly used items.
pub use model::{Entry, EntryField, FieldType, Group, PathInfo, TreeItem, Wallet, WalletPath};
pub use service::WalletService;
pub use storage::{create_new_wallet, load_wallet, save_wallet, wallet_exists};
pub use traverse::{
    find_entry_by_path, find_group_by_path, get_path_to_entry, get_path_to_group,
    traverse_backward, traverse_forward,
};
