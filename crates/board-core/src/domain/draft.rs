use serde::{Deserialize, Serialize};

use super::post::{Post, PostPatch, estimate_read_time};
use crate::error::DomainError;

/// Form input for creating or editing a post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub author: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl PostDraft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
            ..Self::default()
        }
    }

    /// Split a comma-separated tag field, trimming each tag and dropping blanks.
    pub fn parse_tags(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(String::from)
            .collect()
    }

    /// Check the fields a post can't exist without.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::Validation("title must not be empty".into()));
        }
        if self.content.trim().is_empty() {
            return Err(DomainError::Validation("content must not be empty".into()));
        }
        Ok(())
    }

    /// Build a brand-new post from this draft.
    pub fn into_post(self) -> Result<Post, DomainError> {
        self.validate()?;

        let mut post = Post::new(self.title, self.content, self.author);
        post.summary = non_blank(self.summary);
        post.category = non_blank(self.category);
        post.tags = self.tags;
        post.image_url = non_blank(self.image_url);
        Ok(post)
    }

    /// Build the update applied when an existing post is edited.
    ///
    /// The category is only touched when the draft names one.
    pub fn into_patch(self) -> Result<PostPatch, DomainError> {
        self.validate()?;

        let read_time = estimate_read_time(&self.content);
        let mut patch = PostPatch::new()
            .title(self.title)
            .content(self.content)
            .summary(non_blank(self.summary))
            .author(self.author)
            .tags(self.tags)
            .image_url(non_blank(self.image_url))
            .read_time(Some(read_time));
        if let Some(category) = non_blank(self.category) {
            patch = patch.category(Some(category));
        }
        Ok(patch)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
