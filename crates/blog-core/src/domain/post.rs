use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author of a post, stored as a first/last name pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Name as rendered to API clients: "First Last".
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Post entity - a stored blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub author: Author,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl BlogPost {
    /// Apply a partial update. Fields absent from the patch are left untouched.
    pub fn apply(&mut self, patch: BlogPostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
    }
}

/// A post that has not been stored yet. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    pub author: Author,
    pub title: String,
    pub content: String,
    pub created: Option<DateTime<Utc>>,
}

impl NewBlogPost {
    pub fn new(author: Author, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author,
            title: title.into(),
            content: content.into(),
            created: None,
        }
    }

    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Materialize the stored record, generating an id and defaulting
    /// `created` to the insertion time.
    pub fn into_post(self) -> BlogPost {
        BlogPost {
            id: Uuid::new_v4(),
            author: self.author,
            title: self.title,
            content: self.content,
            created: self.created.unwrap_or_else(Utc::now),
        }
    }
}

/// Partial update - only `title` and `content` are mutable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl BlogPostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}
