// Ports define what the rest of the system needs from the post collection,
// without implementing it.
//
// Purpose
// - Describe the store contract as a trait so the transport codes against
//   an abstraction and tests can swap in a fresh instance per case.
//
// Boundaries
// - No concrete storage here. Adapters implement this trait in the
//   adapters layer.

use crate::core::post::{Post, PostDraft, PostPatch, ValidationError};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostStoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("couldn't find post for the given post id {0}")]
    NotFound(String),

    #[error("a post with the same title by this author already exists")]
    AlreadyExists,
}

/// The authoritative collection of live posts. Every operation is atomic
/// with respect to the others; failing calls leave the collection unchanged.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Validate the draft, assign a fresh id and insert the post.
    async fn create(&self, draft: PostDraft) -> Result<Post, PostStoreError>;

    /// Return a copy of the live post with this id.
    async fn read(&self, post_id: &str) -> Result<Post, PostStoreError>;

    /// Merge the patch into the stored post and replace it under the same id.
    async fn update(&self, post_id: &str, patch: PostPatch) -> Result<Post, PostStoreError>;

    /// Remove the post with this id.
    async fn delete(&self, post_id: &str) -> Result<(), PostStoreError>;
}
