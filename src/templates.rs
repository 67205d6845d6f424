//! Preset entry templates.
//!
//! The catalog is a process-wide read-only table: presentation layers
//! list it in entry-creation wizards and call [`EntryTemplate::new_entry`]
//! to pre-populate the fields.  Templates are never persisted.

use crate::wallet::model::{Entry, EntryField, FieldType};

/// One field slot of a template: a name and its behavior tag.
#[derive(Debug, Clone, Copy)]
pub struct TemplateField {
    pub name: &'static str,
    pub field_type: FieldType,
}

/// A named, ordered set of field slots for creating new entries.
#[derive(Debug, Clone, Copy)]
pub struct EntryTemplate {
    pub name: &'static str,
    pub fields: &'static [TemplateField],
}

/// The preset templates for creating new entries.
pub const ENTRY_TEMPLATES: &[EntryTemplate] = &[
    EntryTemplate {
        name: "Credit Card",
        fields: &[
            TemplateField {
                name: "Cardholder Name",
                field_type: FieldType::General,
            },
            TemplateField {
                name: "Card Number",
                field_type: FieldType::General,
            },
            TemplateField {
                name: "Expiration Date",
                field_type: FieldType::General,
            },
            TemplateField {
                name: "CVV",
                field_type: FieldType::Pin,
            },
            TemplateField {
                name: "PIN",
                field_type: FieldType::Pin,
            },
        ],
    },
    EntryTemplate {
        name: "Password",
        fields: &[
            TemplateField {
                name: "Username",
                field_type: FieldType::General,
            },
            TemplateField {
                name: "Password",
                field_type: FieldType::Password,
            },
            TemplateField {
                name: "URL",
                field_type: FieldType::General,
            },
            TemplateField {
                name: "Notes",
                field_type: FieldType::General,
            },
        ],
    },
    EntryTemplate {
        name: "Note",
        fields: &[TemplateField {
            name: "Note",
            field_type: FieldType::General,
        }],
    },
    EntryTemplate {
        name: "Bank Account",
        fields: &[
            TemplateField {
                name: "Bank Name",
                field_type: FieldType::General,
            },
            TemplateField {
                name: "Account Type",
                field_type: FieldType::General,
            },
            TemplateField {
                name: "Account Holder Name",
                field_type: FieldType::General,
            },
            TemplateField {
                name: "Account Number",
                field_type: FieldType::General,
            },
            TemplateField {
                name: "Password",
                field_type: FieldType::Password,
            },
            TemplateField {
                name: "PIN",
                field_type: FieldType::Pin,
            },
        ],
    },
];

impl EntryTemplate {
    /// Look up a template by name.
    pub fn find(name: &str) -> Option<&'static EntryTemplate> {
        ENTRY_TEMPLATES.iter().find(|t| t.name == name)
    }

    /// Build an entry with this template's fields, values left empty.
    ///
    /// The entry has no ID assigned; `WalletService::add_entry`
    /// generates one on insert.
    pub fn new_entry(&self, title: impl Into<String>) -> Entry {
        let fields = self
            .fields
            .iter()
            .map(|f| EntryField {
                name: f.name.to_string(),
                value: String::new(),
                field_type: f.field_type,
            })
            .collect();
        Entry::with_fields(title, fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_the_preset_templates() {
        let names: Vec<&str> = ENTRY_TEMPLATES.iter().map(|t| t.name).collect();
        assert_eq!(names, ["Credit Card", "Password", "Note", "Bank Account"]);
    }

    #[test]
    fn find_is_case_sensitive() {
        assert!(EntryTemplate::find("Password").is_some());
        assert!(EntryTemplate::find("password").is_none());
    }

    #[test]
    fn new_entry_prefills_fields_with_empty_values() {
        let template = EntryTemplate::find("Password").unwrap();
        let entry = template.new_entry("GitHub");

        assert_eq!(entry.title, "GitHub");
        assert!(entry.id.is_empty());
        assert_eq!(entry.fields.len(), 4);
        assert_eq!(entry.fields[1].name, "Password");
        assert_eq!(entry.fields[1].field_type, FieldType::Password);
        assert!(entry.fields.iter().all(|f| f.value.is_empty()));
    }
}
