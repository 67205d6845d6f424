//! The wallet tree data model.
//!
//! A `Wallet` owns an ordered sequence of root `Group`s; each group owns
//! its child groups and its `Entry` records, so the containment graph is
//! a tree by construction and deleting a subtree drops everything in it.
//!
//! These types serialize to the persisted JSON payload:
//!
//! ```text
//! {"version": 1, "groups": [{"id", "name", "groups": [...], "entries":
//!   [{"id", "title", "fields": [{"name", "value", "type"}]}]}]}
//! ```

use serde::{Deserialize, Serialize};

/// Root aggregate of the password store.
///
/// Exists only in memory between `load` and `save`; the persisted form
/// is the encrypted JSON document described in the module docs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    /// Schema tag of the persisted payload.
    pub version: u32,

    /// Root-level groups, in insertion order.
    pub groups: Vec<Group>,
}

impl Wallet {
    /// Root-level groups, in insertion order.
    pub fn root_groups(&self) -> &[Group] {
        &self.groups
    }
}

/// A named node that owns child groups and entries.
///
/// Group names are unique across the whole wallet, not just among
/// siblings; the invariant is enforced by `WalletService` at mutation
/// time, never at parse time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// Globally unique ID token.  Empty means "not yet assigned":
    /// `WalletService::add_group` generates one on insert.
    pub id: String,

    /// Display name, unique among all groups in the wallet.
    pub name: String,

    /// Child groups, exclusively owned.
    #[serde(default)]
    pub groups: Vec<Group>,

    /// Entries stored directly in this group, exclusively owned.
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Group {
    /// Create an empty group with the given name and no ID assigned.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            groups: Vec::new(),
            entries: Vec::new(),
        }
    }
}

/// A credential record owned by exactly one group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Globally unique ID token.  Empty means "not yet assigned".
    pub id: String,

    /// Display title, unique among all entries in the wallet.
    pub title: String,

    /// Ordered fields; order is display-significant.
    #[serde(default)]
    pub fields: Vec<EntryField>,
}

impl Entry {
    /// Create an entry with the given title and no fields.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_fields(title, Vec::new())
    }

    /// Create an entry with the given title and fields.
    pub fn with_fields(title: impl Into<String>, fields: Vec<EntryField>) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            fields,
        }
    }
}

/// A single named value inside an entry.
///
/// Field names need not be unique within an entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryField {
    pub name: String,
    pub value: String,

    #[serde(rename = "type")]
    pub field_type: FieldType,
}

/// Behavior tag for an entry field.
///
/// The tag tells presentation layers how to treat the value (masking,
/// numeric input); it is not a separate type hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// General purpose fields like username or notes.
    General,
    /// Password fields that should be masked.
    Password,
    /// PIN fields that should be masked and only accept digits.
    Pin,
}

impl FieldType {
    /// Whether a field of this type should be masked when displayed.
    pub fn is_concealed(self) -> bool {
        matches!(self, Self::Password | Self::Pin)
    }

    /// Whether a field of this type should only accept numeric input.
    pub fn is_numeric_only(self) -> bool {
        self == Self::Pin
    }
}

/// An address into the wallet tree.
///
/// The group-ID sequence leads from the root to a target group; an empty
/// sequence addresses the wallet root itself (which is not a `Group`).
/// When `entry_id` is set the path addresses an entry within the group
/// named by the sequence.
///
/// Paths are transient: they are recomputed from the tree on demand and
/// must be re-derived after structural mutations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletPath {
    /// Group IDs from root to the target group.
    pub group_ids: Vec<String>,

    /// Entry ID if the path targets an entry.
    pub entry_id: Option<String>,
}

impl WalletPath {
    /// The path addressing the wallet root.
    pub fn root() -> Self {
        Self::default()
    }

    /// A path addressing the group at the end of `group_ids`.
    pub fn to_group(group_ids: Vec<String>) -> Self {
        Self {
            group_ids,
            entry_id: None,
        }
    }

    /// A path addressing an entry inside the group at the end of
    /// `group_ids`.
    pub fn to_entry(group_ids: Vec<String>, entry_id: impl Into<String>) -> Self {
        Self {
            group_ids,
            entry_id: Some(entry_id.into()),
        }
    }

    /// Whether this path addresses the wallet root.
    pub fn is_root(&self) -> bool {
        self.group_ids.is_empty()
    }

    /// The path to the parent group.
    ///
    /// Drops the last group ID and any entry ID; the root's parent is
    /// the root, so this is idempotent at the top.
    pub fn parent(&self) -> WalletPath {
        let mut group_ids = self.group_ids.clone();
        group_ids.pop();
        WalletPath {
            group_ids,
            entry_id: None,
        }
    }
}

/// The item a traversal callback is looking at: a group or an entry.
#[derive(Debug, Clone, Copy)]
pub enum TreeItem<'a> {
    Group(&'a Group),
    Entry(&'a Entry),
}

impl<'a> TreeItem<'a> {
    /// The group, if this item is a group.
    pub fn group(self) -> Option<&'a Group> {
        match self {
            Self::Group(group) => Some(group),
            Self::Entry(_) => None,
        }
    }

    /// The entry, if this item is an entry.
    pub fn entry(self) -> Option<&'a Entry> {
        match self {
            Self::Group(_) => None,
            Self::Entry(entry) => Some(entry),
        }
    }
}

/// Callback payload describing one traversed node.
#[derive(Debug, Clone)]
pub struct PathInfo<'a> {
    /// The path addressing this node: a group's path ends in its own ID,
    /// an entry's path names the owning group chain plus the entry ID.
    pub path: WalletPath,

    /// The node itself.
    pub item: TreeItem<'a>,

    /// Nesting depth.  Root-level groups are depth 0; a group's entries
    /// share the group's depth.
    pub depth: usize,
}

impl PathInfo<'_> {
    /// Whether this node is an entry rather than a group.
    pub fn is_entry(&self) -> bool {
        matches!(self.item, TreeItem::Entry(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_type_serializes_lowercase() {
        // The persisted payload uses "general" / "password" / "pin".
        let field = EntryField {
            name: "PIN".to_string(),
            value: "1234".to_string(),
            field_type: FieldType::Pin,
        };
        let json = serde_json::to_string(&field).unwrap();
        assert!(json.contains("\"type\":\"pin\""));

        let back: EntryField = serde_json::from_str(&json).unwrap();
        assert_eq!(back.field_type, FieldType::Pin);
    }

    #[test]
    fn group_parses_without_children_arrays() {
        // Older writers may omit empty sequences entirely.
        let group: Group = serde_json::from_str(r#"{"id":"grp-1","name":"Mail"}"#).unwrap();
        assert!(group.groups.is_empty());
        assert!(group.entries.is_empty());
    }

    #[test]
    fn parent_path_is_idempotent_at_root() {
        let root = WalletPath::root();
        assert_eq!(root.parent(), root);

        let nested = WalletPath::to_entry(vec!["a".into(), "b".into()], "e");
        let parent = nested.parent();
        assert_eq!(parent.group_ids, vec!["a".to_string()]);
        assert_eq!(parent.entry_id, None);
    }
}
