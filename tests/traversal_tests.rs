//! Integration tests for wallet traversal and path resolution.

use passwallet::errors::WalletError;
use passwallet::wallet::{
    find_entry_by_path, find_group_by_path, get_path_to_entry, get_path_to_group,
    traverse_backward, traverse_forward, Entry, Group, TreeItem, Wallet, WalletPath,
};

/// A small but representative tree:
///
/// ```text
/// Personal            (grp-personal)
///   * Bank            (ent-bank)
///   * Mail            (ent-mail)
///   Web               (grp-web)
///     * GitHub        (ent-github)
///   Dev               (grp-dev)
/// Work                (grp-work)
///   * VPN             (ent-vpn)
/// ```
fn sample_wallet() -> Wallet {
    let entry = |id: &str, title: &str| Entry {
        id: id.into(),
        title: title.into(),
        fields: vec![],
    };
    let group = |id: &str, name: &str, groups: Vec<Group>, entries: Vec<Entry>| Group {
        id: id.into(),
        name: name.into(),
        groups,
        entries,
    };

    Wallet {
        version: 1,
        groups: vec![
            group(
                "grp-personal",
                "Personal",
                vec![
                    group(
                        "grp-web",
                        "Web",
                        vec![],
                        vec![entry("ent-github", "GitHub")],
                    ),
                    group("grp-dev", "Dev", vec![], vec![]),
                ],
                vec![entry("ent-bank", "Bank"), entry("ent-mail", "Mail")],
            ),
            group("grp-work", "Work", vec![], vec![entry("ent-vpn", "VPN")]),
        ],
    }
}

fn visited_ids(wallet: &Wallet) -> Vec<String> {
    let mut ids = Vec::new();
    traverse_forward(wallet, |info| {
        let id = match info.item {
            TreeItem::Group(group) => &group.id,
            TreeItem::Entry(entry) => &entry.id,
        };
        ids.push(id.clone());
        true
    });
    ids
}

// ---------------------------------------------------------------------------
// Forward traversal order and depth
// ---------------------------------------------------------------------------

#[test]
fn forward_visits_group_then_entries_then_subgroups() {
    let wallet = sample_wallet();

    assert_eq!(
        visited_ids(&wallet),
        [
            "grp-personal",
            "ent-bank",
            "ent-mail",
            "grp-web",
            "ent-github",
            "grp-dev",
            "grp-work",
            "ent-vpn",
        ]
    );
}

#[test]
fn depth_counts_from_root_children() {
    let wallet = sample_wallet();
    let mut depths = Vec::new();
    traverse_forward(&wallet, |info| {
        depths.push(info.depth);
        true
    });

    // Entries share their group's depth; subgroups are one deeper.
    assert_eq!(depths, [0, 0, 0, 1, 1, 1, 0, 0]);
}

#[test]
fn path_info_addresses_the_visited_node() {
    let wallet = sample_wallet();
    traverse_forward(&wallet, |info| {
        match info.item {
            TreeItem::Group(group) => {
                assert_eq!(info.path.group_ids.last(), Some(&group.id));
                assert_eq!(info.path.entry_id, None);
            }
            TreeItem::Entry(entry) => {
                assert_eq!(info.path.entry_id.as_ref(), Some(&entry.id));
                // The path must resolve back to this very entry.
                let found = find_entry_by_path(&wallet, &info.path).expect("path resolves");
                assert_eq!(found.id, entry.id);
            }
        }
        true
    });
}

// ---------------------------------------------------------------------------
// Short-circuit contract
// ---------------------------------------------------------------------------

#[test]
fn returning_false_halts_after_exactly_n_visits() {
    let wallet = sample_wallet();

    for n in 1..=8 {
        let mut calls = 0;
        traverse_forward(&wallet, |_| {
            calls += 1;
            calls < n
        });
        assert_eq!(calls, n, "callback must be invoked exactly {n} times");
    }
}

#[test]
fn backward_is_the_reversed_forward_sequence() {
    let wallet = sample_wallet();

    let mut backward = Vec::new();
    traverse_backward(&wallet, |info| {
        let id = match info.item {
            TreeItem::Group(group) => &group.id,
            TreeItem::Entry(entry) => &entry.id,
        };
        backward.push(id.clone());
        true
    });

    let mut forward = visited_ids(&wallet);
    forward.reverse();
    assert_eq!(backward, forward);
}

#[test]
fn backward_short_circuits_too() {
    let wallet = sample_wallet();

    let mut calls = 0;
    traverse_backward(&wallet, |_| {
        calls += 1;
        false
    });
    assert_eq!(calls, 1);
}

// ---------------------------------------------------------------------------
// Path resolution
// ---------------------------------------------------------------------------

#[test]
fn find_group_by_path_resolves_nested_chains() {
    let wallet = sample_wallet();

    let path = WalletPath::to_group(vec!["grp-personal".into(), "grp-web".into()]);
    let group = find_group_by_path(&wallet, &path).expect("resolve");
    assert_eq!(group.name, "Web");
}

#[test]
fn find_group_by_path_rejects_empty_and_broken_paths() {
    let wallet = sample_wallet();

    let result = find_group_by_path(&wallet, &WalletPath::root());
    assert!(matches!(result, Err(WalletError::InvalidPath(_))));

    // "grp-web" is not a root-level group, so the chain breaks.
    let bad = WalletPath::to_group(vec!["grp-web".into()]);
    assert!(matches!(
        find_group_by_path(&wallet, &bad),
        Err(WalletError::GroupNotFound)
    ));
}

#[test]
fn find_entry_by_path_requires_an_entry_id() {
    let wallet = sample_wallet();

    let no_entry = WalletPath::to_group(vec!["grp-work".into()]);
    assert!(matches!(
        find_entry_by_path(&wallet, &no_entry),
        Err(WalletError::InvalidPath(_))
    ));

    let missing = WalletPath::to_entry(vec!["grp-work".into()], "ent-nope");
    assert!(matches!(
        find_entry_by_path(&wallet, &missing),
        Err(WalletError::EntryNotFound)
    ));

    let path = WalletPath::to_entry(vec!["grp-work".into()], "ent-vpn");
    assert_eq!(find_entry_by_path(&wallet, &path).unwrap().title, "VPN");
}

// ---------------------------------------------------------------------------
// ID-to-path lookup and symmetry
// ---------------------------------------------------------------------------

#[test]
fn get_path_to_group_returns_the_full_chain() {
    let wallet = sample_wallet();

    let path = get_path_to_group(&wallet, "grp-web").expect("path");
    assert_eq!(path.group_ids, ["grp-personal", "grp-web"]);
    assert_eq!(path.entry_id, None);

    assert!(matches!(
        get_path_to_group(&wallet, "grp-missing"),
        Err(WalletError::GroupNotFound)
    ));
}

#[test]
fn get_path_to_entry_includes_the_owning_chain() {
    let wallet = sample_wallet();

    let path = get_path_to_entry(&wallet, "ent-github").expect("path");
    assert_eq!(path.group_ids, ["grp-personal", "grp-web"]);
    assert_eq!(path.entry_id.as_deref(), Some("ent-github"));

    assert!(matches!(
        get_path_to_entry(&wallet, "ent-missing"),
        Err(WalletError::EntryNotFound)
    ));
}

#[test]
fn path_lookup_and_resolution_are_symmetric() {
    let wallet = sample_wallet();

    // For every group in the tree: find(path_to(id)) is the same group.
    for id in ["grp-personal", "grp-web", "grp-dev", "grp-work"] {
        let path = get_path_to_group(&wallet, id).expect("path");
        let group = find_group_by_path(&wallet, &path).expect("resolve");
        assert_eq!(group.id, id);
    }

    for id in ["ent-bank", "ent-mail", "ent-github", "ent-vpn"] {
        let path = get_path_to_entry(&wallet, id).expect("path");
        let entry = find_entry_by_path(&wallet, &path).expect("resolve");
        assert_eq!(entry.id, id);
    }
}
