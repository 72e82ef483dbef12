use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Characters of content counted as one minute of reading.
const CHARS_PER_MINUTE: usize = 1000;

/// Post entity - a blog post.
///
/// Posts are never physically removed; `is_deleted` hides them from every view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<u32>,
}

impl Post {
    /// Create a new post with a generated ID and fresh timestamps.
    pub fn new(title: String, content: String, author: String) -> Self {
        let now = Utc::now();
        let read_time = Some(estimate_read_time(&content));
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            content,
            summary: None,
            author,
            category: None,
            tags: Vec::new(),
            image_url: None,
            created_at: now,
            updated_at: now,
            is_deleted: false,
            read_time,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }

    /// Merge `patch` over this post and refresh `updated_at`.
    pub fn apply(&mut self, patch: PostPatch) {
        let PostPatch {
            title,
            content,
            summary,
            author,
            category,
            tags,
            image_url,
            is_deleted,
            read_time,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(summary) = summary {
            self.summary = summary;
        }
        if let Some(author) = author {
            self.author = author;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(tags) = tags {
            self.tags = tags;
        }
        if let Some(image_url) = image_url {
            self.image_url = image_url;
        }
        if let Some(is_deleted) = is_deleted {
            self.is_deleted = is_deleted;
        }
        if let Some(read_time) = read_time {
            self.read_time = read_time;
        }

        self.touch();
    }

    /// Refresh `updated_at`, keeping it strictly increasing even when the
    /// clock has not advanced since the last write.
    pub fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::nanoseconds(1)
        };
    }

    /// Lower-cased text that search matches against.
    pub(crate) fn searchable_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.content,
            self.summary.as_deref().unwrap_or(""),
            self.tags.join(" ")
        )
        .to_lowercase()
    }
}

/// Estimated reading time in minutes: one minute per started thousand characters.
pub fn estimate_read_time(content: &str) -> u32 {
    let chars = content.chars().count();
    chars.div_ceil(CHARS_PER_MINUTE) as u32
}

/// Partial update for a [`Post`].
///
/// There is no field for `id`, `created_at` or `updated_at`, so an update can
/// never overwrite them. Nested options clear a field with `Some(None)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<Option<String>>,
    pub author: Option<String>,
    pub category: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    pub image_url: Option<Option<String>>,
    pub is_deleted: Option<bool>,
    pub read_time: Option<Option<u32>>,
}

impl PostPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn summary(mut self, summary: Option<String>) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn category(mut self, category: Option<String>) -> Self {
        self.category = Some(category);
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = Some(image_url);
        self
    }

    pub fn read_time(mut self, read_time: Option<u32>) -> Self {
        self.read_time = Some(read_time);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
