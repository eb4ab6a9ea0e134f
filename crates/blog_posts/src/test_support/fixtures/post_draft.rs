// Shared test fixtures for building post drafts and patches.
// Canonical values match a valid create request; override per test.

use crate::core::post::{PostDraft, PostPatch};

pub struct PostDraftBuilder {
    inner: PostDraft,
}

impl Default for PostDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl PostDraftBuilder {
    pub fn new() -> Self {
        Self {
            inner: PostDraft {
                title: "Test Title".to_string(),
                content: "Test Content".to_string(),
                author: "Author1".to_string(),
                publication_date: "2025-06-26".to_string(),
                tags: vec!["tag1".to_string(), "tag2".to_string()],
            },
        }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn content(mut self, v: impl Into<String>) -> Self {
        self.inner.content = v.into();
        self
    }

    pub fn author(mut self, v: impl Into<String>) -> Self {
        self.inner.author = v.into();
        self
    }

    pub fn publication_date(mut self, v: impl Into<String>) -> Self {
        self.inner.publication_date = v.into();
        self
    }

    pub fn tags(mut self, v: Vec<String>) -> Self {
        self.inner.tags = v;
        self
    }

    pub fn build(self) -> PostDraft {
        self.inner
    }
}

pub struct PostPatchBuilder {
    inner: PostPatch,
}

impl Default for PostPatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl PostPatchBuilder {
    /// Starts from the all-empty patch, i.e. "nothing supplied".
    pub fn new() -> Self {
        Self {
            inner: PostPatch::default(),
        }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn content(mut self, v: impl Into<String>) -> Self {
        self.inner.content = v.into();
        self
    }

    pub fn author(mut self, v: impl Into<String>) -> Self {
        self.inner.author = v.into();
        self
    }

    pub fn tags(mut self, v: Vec<String>) -> Self {
        self.inner.tags = v;
        self
    }

    pub fn build(self) -> PostPatch {
        self.inner
    }
}
