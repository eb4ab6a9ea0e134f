// In memory implementation of the PostStore port.
//
// Purpose
// - Back the API with a process-lifetime collection, no database required.
//
// Responsibilities
// - Hold the map of live posts keyed by post id behind one reader-writer lock.
// - Keep each mutation atomic: a single write guard spans the whole
//   check-then-mutate sequence, so a racing delete cannot be resurrected by
//   an update and two identical drafts cannot both pass the uniqueness scan.

use crate::core::ports::{PostStore, PostStoreError};
use crate::core::post::{Post, PostDraft, PostPatch, validate_draft};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryPostStore {
    posts: RwLock<HashMap<String, Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl PostStore for InMemoryPostStore {
    async fn create(&self, draft: PostDraft) -> Result<Post, PostStoreError> {
        validate_draft(&draft)?;

        let mut posts = self.posts.write().await;
        if posts
            .values()
            .any(|post| post.author == draft.author && post.title == draft.title)
        {
            return Err(PostStoreError::AlreadyExists);
        }

        let post = Post {
            post_id: Uuid::now_v7().to_string(),
            title: draft.title,
            content: draft.content,
            author: draft.author,
            publication_date: draft.publication_date,
            tags: draft.tags,
        };
        posts.insert(post.post_id.clone(), post.clone());
        tracing::info!(post_id = %post.post_id, author = %post.author, "post created");
        Ok(post)
    }

    async fn read(&self, post_id: &str) -> Result<Post, PostStoreError> {
        let posts = self.posts.read().await;
        posts
            .get(post_id)
            .cloned()
            .ok_or_else(|| PostStoreError::NotFound(post_id.to_string()))
    }

    async fn update(&self, post_id: &str, patch: PostPatch) -> Result<Post, PostStoreError> {
        let mut posts = self.posts.write().await;
        let existing = posts
            .get(post_id)
            .ok_or_else(|| PostStoreError::NotFound(post_id.to_string()))?;
        let updated = existing.apply_patch(patch);
        posts.insert(post_id.to_string(), updated.clone());
        tracing::info!(post_id = %post_id, "post updated");
        Ok(updated)
    }

    async fn delete(&self, post_id: &str) -> Result<(), PostStoreError> {
        let mut posts = self.posts.write().await;
        if posts.remove(post_id).is_none() {
            tracing::warn!(post_id = %post_id, "delete requested for unknown post");
            return Err(PostStoreError::NotFound(post_id.to_string()));
        }
        tracing::info!(post_id = %post_id, "post deleted");
        Ok(())
    }
}
