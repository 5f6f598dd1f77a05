//! Comment Entity
//!
//! Community comments attached to a section. Created by a submission and
//! afterwards only touched through the vote counter.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::entity::Entity;

pub const ANONYMOUS: &str = "Anonymous";

/// A comment as stored in the document database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Document id assigned by the store
    pub id: String,
    pub section_id: String,
    pub author: String,
    pub text: String,
    pub votes: i64,
    pub created_at: DateTime<Utc>,
}

impl Entity for Comment {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

/// A validated submission, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub section_id: String,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl NewComment {
    /// Normalize raw form input.
    ///
    /// Returns `None` when the text is blank after trimming. A blank author
    /// becomes [`ANONYMOUS`].
    pub fn from_input(section_id: &str, author: &str, text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let author = match author.trim() {
            "" => ANONYMOUS,
            name => name,
        };
        Some(Self {
            section_id: section_id.to_string(),
            author: author.to_string(),
            text: text.to_string(),
            created_at: Utc::now(),
        })
    }

    /// Materialize the stored comment once the store assigned an id
    pub fn into_comment(self, id: String) -> Comment {
        Comment {
            id,
            section_id: self.section_id,
            author: self.author,
            text: self.text,
            votes: 0,
            created_at: self.created_at,
        }
    }
}

/// Direction of a vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Up,
    Down,
}

impl Vote {
    pub fn delta(&self) -> i64 {
        match self {
            Vote::Up => 1,
            Vote::Down => -1,
        }
    }

    /// Parse a raw `+1` / `-1` delta
    pub fn from_delta(delta: i64) -> Option<Self> {
        match delta {
            1 => Some(Vote::Up),
            -1 => Some(Vote::Down),
            _ => None,
        }
    }
}

/// Display order: votes descending, then oldest first, then id.
pub fn display_order(a: &Comment, b: &Comment) -> Ordering {
    b.votes
        .cmp(&a.votes)
        .then_with(|| a.created_at.cmp(&b.created_at))
        .then_with(|| a.id.cmp(&b.id))
}

pub fn sort_for_display(comments: &mut [Comment]) {
    comments.sort_by(display_order);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn comment(id: &str, votes: i64, minute: u32) -> Comment {
        Comment {
            id: id.to_string(),
            section_id: "shortcuts".to_string(),
            author: ANONYMOUS.to_string(),
            text: format!("comment {}", id),
            votes,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, minute, 0).unwrap(),
        }
    }

    #[test]
    fn test_blank_text_is_rejected() {
        assert!(NewComment::from_input("s", "Ann", "").is_none());
        assert!(NewComment::from_input("s", "Ann", "   \n\t ").is_none());
    }

    #[test]
    fn test_input_is_trimmed_and_author_defaults() {
        let new = NewComment::from_input("s", "   ", "  great tip \n").unwrap();
        assert_eq!(new.author, ANONYMOUS);
        assert_eq!(new.text, "great tip");

        let named = NewComment::from_input("s", " Ann ", "hi").unwrap();
        assert_eq!(named.author, "Ann");
    }

    #[test]
    fn test_new_comment_starts_at_zero_votes() {
        let new = NewComment::from_input("s", "", "hello").unwrap();
        let stored = new.into_comment("abc".to_string());
        assert_eq!(stored.votes, 0);
        assert_eq!(stored.id(), "abc");
    }

    #[test]
    fn test_vote_delta_round_trip() {
        assert_eq!(Vote::from_delta(1), Some(Vote::Up));
        assert_eq!(Vote::from_delta(-1), Some(Vote::Down));
        assert_eq!(Vote::from_delta(2), None);
        assert_eq!(Vote::Up.delta() + Vote::Down.delta(), 0);
    }

    #[test]
    fn test_display_order_votes_then_age_then_id() {
        let mut comments = vec![
            comment("c", 1, 5),
            comment("a", 3, 9),
            comment("d", 1, 2),
            comment("b", 1, 2),
            comment("e", -2, 0),
        ];
        sort_for_display(&mut comments);

        let ids: Vec<&str> = comments.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "d", "c", "e"]);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(comment("x", 0, 0)).unwrap();
        assert_eq!(json["sectionId"], "shortcuts");
        assert!(json.get("createdAt").is_some());
    }
}
