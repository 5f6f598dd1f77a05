//! Section and Entry Entities
//!
//! A section groups related guide entries. Both are immutable once the
//! content file is loaded.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Category tag of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Shell command
    Code,
    /// Keyboard shortcut
    Shortcut,
    /// Slash command
    Command,
    /// Free-form tip
    #[default]
    #[serde(other)]
    Tip,
    /// Model selection or AI-related entry
    Model,
}

/// One guide item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub title: String,
    /// Command text for macOS
    pub mac: String,
    /// Command text for Windows/Linux
    pub win: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(title: &str, mac: &str, win: &str, kind: EntryKind) -> Self {
        Self {
            title: title.to_string(),
            mac: mac.to_string(),
            win: win.to_string(),
            note: None,
            kind,
        }
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }

    /// Both platform variants are the same text
    pub fn has_single_variant(&self) -> bool {
        self.mac == self.win
    }

    /// Case-insensitive substring match over title, both variants and note.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        [
            self.title.as_str(),
            self.mac.as_str(),
            self.win.as_str(),
            self.note.as_deref().unwrap_or(""),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

/// A named group of entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Stable key, used for navigation and as the comment partition
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub items: Vec<Entry>,
}

impl Section {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            icon: String::new(),
            color: String::new(),
            items: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: Vec<Entry>) -> Self {
        self.items = items;
        self
    }
}

impl Entity for Section {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_matches_any_field() {
        let entry = Entry::new("Save file", "⌘S", "Ctrl+S", EntryKind::Shortcut)
            .with_note("Works in every panel");

        assert!(entry.matches("save"));
        assert!(entry.matches("ctrl+s"));
        assert!(entry.matches("⌘s"));
        assert!(entry.matches("panel"));
        assert!(!entry.matches("delete"));
    }

    #[test]
    fn test_single_variant() {
        let same = Entry::new("Help", "/help", "/help", EntryKind::Command);
        let different = Entry::new("Save", "⌘S", "Ctrl+S", EntryKind::Shortcut);
        assert!(same.has_single_variant());
        assert!(!different.has_single_variant());
    }

    #[test]
    fn test_entry_deserializes_content_shape() {
        let json = r#"{"title":"Clear","mac":"/clear","win":"/clear","type":"command"}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.kind, EntryKind::Command);
        assert!(entry.note.is_none());
    }

    #[test]
    fn test_unknown_kind_falls_back_to_tip() {
        let json = r#"{"title":"Odd","mac":"x","win":"x","type":"mystery"}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.kind, EntryKind::Tip);
    }
}
