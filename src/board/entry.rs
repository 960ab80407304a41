//! Entry types and the form input boundary

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One player's recorded score for one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Opaque unique identifier, stable across edits
    pub id: String,
    /// Player display name
    pub name: String,
    /// Avatar photo URL
    pub photo: String,
    /// Recorded score
    pub score: i64,
}

impl Entry {
    /// Build a fresh entry with a newly generated id
    pub fn new(draft: EntryDraft) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), draft)
    }

    /// Build an entry under an existing id (full field replacement on edit)
    pub fn with_id(id: String, draft: EntryDraft) -> Self {
        Self {
            id,
            name: draft.name,
            photo: draft.photo,
            score: draft.score,
        }
    }
}

/// Validated form input awaiting an engine operation.
///
/// The engine trusts drafts; required-field checks happen here, once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub name: String,
    pub photo: String,
    pub score: i64,
}

impl EntryDraft {
    /// Validate raw form fields. Name and photo are required; returns None
    /// when either is empty so the form refuses submission.
    pub fn from_form(name: &str, photo: &str, raw_score: &str) -> Option<Self> {
        let name = name.trim();
        let photo = photo.trim();
        if name.is_empty() || photo.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            photo: photo.to_string(),
            score: parse_score(raw_score),
        })
    }
}

/// Parse a score typed into the form. Empty or non-numeric input is 0.
pub fn parse_score(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}
