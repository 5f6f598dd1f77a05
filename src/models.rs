//! Frontend Models
//!
//! Data structures matching backend entities, plus the small state
//! machines the components drive.

use serde::{Deserialize, Serialize};

/// Category tag of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Code,
    Shortcut,
    Command,
    Model,
    #[default]
    #[serde(other)]
    Tip,
}

impl EntryKind {
    /// Badge text
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Code => "CMD",
            EntryKind::Shortcut => "KEY",
            EntryKind::Command => "/",
            EntryKind::Tip => "TIP",
            EntryKind::Model => "AI",
        }
    }

    /// Badge background
    pub fn color(&self) -> &'static str {
        match self {
            EntryKind::Code => "#c45f33",
            EntryKind::Shortcut => "#d97548",
            EntryKind::Command => "#e87c4e",
            EntryKind::Tip => "#f59c76",
            EntryKind::Model => "#a84d26",
        }
    }
}

/// Entry data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub title: String,
    pub mac: String,
    pub win: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: EntryKind,
}

/// Section data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub items: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GuideInfo {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(rename = "repoUrl", default)]
    pub repo_url: Option<String>,
}

/// Result of `search_sections`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GuideView {
    pub query: Option<String>,
    pub sections: Vec<Section>,
    #[serde(rename = "noResults")]
    pub no_results: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    #[serde(rename = "sectionId")]
    pub section_id: String,
    pub author: String,
    pub text: String,
    pub votes: i64,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Payload of the `comments-updated` event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentsUpdate {
    #[serde(rename = "subscriptionId")]
    pub subscription_id: u64,
    #[serde(rename = "sectionId")]
    pub section_id: String,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentsStatus {
    Disabled,
    Enabled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionIssue {
    pub id: u64,
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
    pub author: String,
    pub url: String,
}

// ========================
// Entry card state
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    #[default]
    Mac,
    Win,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Mac, Platform::Win];

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Mac => "⌘ macOS",
            Platform::Win => "⊞ Win/Linux",
        }
    }
}

/// Shown instead of the selector when both variants are identical
pub const COMBINED_PLATFORM_LABEL: &str = "⌘ macOS · ⊞ Win/Linux";

/// Collapsed/expanded plus the selected platform tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardState {
    pub expanded: bool,
    pub platform: Platform,
}

impl CardState {
    /// Collapsing drops the platform choice; every expand starts on Mac
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
        if !self.expanded {
            self.platform = Platform::default();
        }
    }

    pub fn select(&mut self, platform: Platform) {
        self.platform = platform;
    }

    pub fn shows_selector(entry: &Entry) -> bool {
        entry.mac != entry.win
    }

    /// Command text for the selected platform
    pub fn visible_command<'a>(&self, entry: &'a Entry) -> &'a str {
        match self.platform {
            Platform::Mac => &entry.mac,
            Platform::Win => &entry.win,
        }
    }
}

// ========================
// Comments panel state
// ========================

#[derive(Debug, Clone, PartialEq)]
pub enum CommentState {
    Disabled,
    Loading,
    Ready(Vec<Comment>),
    Failed(String),
}

impl CommentState {
    /// Combine the app-wide status, a subscribe failure and the latest push.
    pub fn resolve(
        status: Option<CommentsStatus>,
        failure: Option<String>,
        feed: Option<Vec<Comment>>,
    ) -> Self {
        match (status, failure, feed) {
            (None, _, _) => CommentState::Loading,
            (Some(CommentsStatus::Disabled), _, _) => CommentState::Disabled,
            (_, Some(reason), _) => CommentState::Failed(reason),
            (_, None, Some(comments)) => CommentState::Ready(comments),
            (_, None, None) => CommentState::Loading,
        }
    }

    pub fn count(&self) -> usize {
        match self {
            CommentState::Ready(comments) => comments.len(),
            _ => 0,
        }
    }
}

// ========================
// Admin view state
// ========================

#[derive(Debug, Clone, PartialEq)]
pub enum AdminState {
    Loading,
    Failed(String),
    Loaded(Vec<ContributionIssue>),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(mac: &str, win: &str) -> Entry {
        Entry {
            title: "Save file".to_string(),
            mac: mac.to_string(),
            win: win.to_string(),
            note: None,
            kind: EntryKind::Shortcut,
        }
    }

    fn comment(id: &str) -> Comment {
        Comment {
            id: id.to_string(),
            section_id: "git".to_string(),
            author: "Anonymous".to_string(),
            text: "hi".to_string(),
            votes: 0,
            created_at: "2024-05-01T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_toggle_twice_restores_card() {
        let mut card = CardState::default();
        assert!(!card.expanded);
        card.toggle();
        assert!(card.expanded);
        card.toggle();
        assert_eq!(card, CardState::default());
    }

    #[test]
    fn test_reexpand_resets_platform() {
        let save = entry("⌘S", "Ctrl+S");
        let mut card = CardState::default();
        card.toggle();
        card.select(Platform::Win);
        assert_eq!(card.visible_command(&save), "Ctrl+S");

        card.toggle();
        card.toggle();
        assert!(card.expanded);
        assert_eq!(card.platform, Platform::Mac);
        assert_eq!(card.visible_command(&save), "⌘S");
    }

    #[test]
    fn test_platform_defaults_to_mac() {
        let card = CardState::default();
        assert_eq!(card.visible_command(&entry("⌘S", "Ctrl+S")), "⌘S");
    }

    #[test]
    fn test_selecting_platform_switches_text() {
        let mut card = CardState::default();
        card.select(Platform::Win);
        assert_eq!(card.visible_command(&entry("⌘S", "Ctrl+S")), "Ctrl+S");
    }

    #[test]
    fn test_identical_variants_hide_selector() {
        let same = entry("git status", "git status");
        assert!(!CardState::shows_selector(&same));
        for platform in Platform::ALL {
            let card = CardState { expanded: true, platform };
            assert_eq!(card.visible_command(&same), "git status");
        }
        assert!(CardState::shows_selector(&entry("⌘S", "Ctrl+S")));
    }

    #[test]
    fn test_unknown_kind_is_tip() {
        let json = r#"{"title": "t", "mac": "a", "win": "b", "type": "mystery"}"#;
        let parsed: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.kind, EntryKind::Tip);
        assert_eq!(parsed.kind.label(), "TIP");
    }

    #[test]
    fn test_comment_state_resolution() {
        assert_eq!(CommentState::resolve(None, None, None), CommentState::Loading);
        assert_eq!(
            CommentState::resolve(Some(CommentsStatus::Disabled), None, Some(vec![comment("a")])),
            CommentState::Disabled
        );
        assert_eq!(
            CommentState::resolve(Some(CommentsStatus::Enabled), Some("boom".into()), None),
            CommentState::Failed("boom".into())
        );
        assert_eq!(
            CommentState::resolve(Some(CommentsStatus::Enabled), None, None),
            CommentState::Loading
        );
        let ready = CommentState::resolve(Some(CommentsStatus::Enabled), None, Some(vec![comment("a")]));
        assert_eq!(ready.count(), 1);
    }

    #[test]
    fn test_update_payload_decodes() {
        let json = r#"{
            "subscriptionId": 4,
            "sectionId": "git",
            "comments": [{"id": "x", "sectionId": "git", "author": "Ann",
                          "text": "t", "votes": -2, "createdAt": "2024-05-01T10:00:00Z"}]
        }"#;
        let update: CommentsUpdate = serde_json::from_str(json).unwrap();
        assert_eq!(update.subscription_id, 4);
        assert_eq!(update.comments[0].votes, -2);
    }
}
