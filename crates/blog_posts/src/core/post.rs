// Post is the canonical domain record plus the pure logic that shapes it.
//
// Purpose
// - Hold the entity and the inputs for create (PostDraft) and update (PostPatch).
// - Validate drafts and compose partial updates without any input or output.
//
// Boundaries
// - No locking and no id generation here; that belongs to the store adapter.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const PUBLICATION_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub post_id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub publication_date: String,
    pub tags: Vec<String>,
}

/// Create input. The store assigns the id on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: String,
    pub publication_date: String,
    pub tags: Vec<String>,
}

/// Update input. An empty string means "field not supplied", so a patch
/// cannot clear a field to empty. The publication date is absent on
/// purpose: it is fixed at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: String,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} field is required")]
    MissingField(&'static str),

    #[error("publication_date must be in YYYY-MM-DD format")]
    MalformedPublicationDate,
}

pub fn validate_draft(draft: &PostDraft) -> Result<(), ValidationError> {
    if draft.title.is_empty() {
        return Err(ValidationError::MissingField("title"));
    }
    if draft.content.is_empty() {
        return Err(ValidationError::MissingField("content"));
    }
    if draft.author.is_empty() {
        return Err(ValidationError::MissingField("author"));
    }
    if draft.publication_date.is_empty() {
        return Err(ValidationError::MissingField("publication_date"));
    }
    if NaiveDate::parse_from_str(&draft.publication_date, PUBLICATION_DATE_FORMAT).is_err() {
        return Err(ValidationError::MalformedPublicationDate);
    }
    Ok(())
}

impl Post {
    /// Compose the replacement record for an update. Patch tags come first,
    /// stored tags are retained behind them, duplicates and all.
    pub fn apply_patch(&self, patch: PostPatch) -> Post {
        let PostPatch {
            title,
            content,
            author,
            mut tags,
        } = patch;
        tags.extend(self.tags.iter().cloned());
        Post {
            post_id: self.post_id.clone(),
            title: if title.is_empty() {
                self.title.clone()
            } else {
                title
            },
            content: if content.is_empty() {
                self.content.clone()
            } else {
                content
            },
            author: if author.is_empty() {
                self.author.clone()
            } else {
                author
            },
            publication_date: self.publication_date.clone(),
            tags,
        }
    }
}
