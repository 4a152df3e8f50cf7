//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use blog_core::domain::{Author, BlogPost, BlogPostPatch, NewBlogPost};

/// Author name pair as sent by clients.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRequest {
    #[validate(custom(function = "not_blank"))]
    pub first_name: String,
    #[validate(custom(function = "not_blank"))]
    pub last_name: String,
}

/// Request to create a post. `created` defaults to the insertion time.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(nested)]
    pub author: AuthorRequest,
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl From<CreatePostRequest> for NewBlogPost {
    fn from(req: CreatePostRequest) -> Self {
        Self {
            author: Author::new(req.author.first_name, req.author.last_name),
            title: req.title,
            content: req.content,
            created: req.created,
        }
    }
}

/// Request to update a post. Only fields present are changed.
///
/// `id`, when sent, must match the id in the request path.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "not_blank"))]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "not_blank"))]
    pub content: Option<String>,
}

impl UpdatePostRequest {
    pub fn into_patch(self) -> BlogPostPatch {
        BlogPostPatch {
            title: self.title,
            content: self.content,
        }
    }
}

/// Public representation of a post. `author` is the rendered display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub author: String,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl From<BlogPost> for PostResponse {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id,
            author: post.author.display_name(),
            title: post.title,
            content: post.content,
            created: post.created,
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Flatten validation errors into sorted `path: message` strings.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();
    collect_messages(errors, None, &mut messages);
    messages.sort();
    messages
}

fn collect_messages(errors: &ValidationErrors, prefix: Option<&str>, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{field}"),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(errs) => {
                for err in errs {
                    let message = err.message.as_deref().unwrap_or(err.code.as_ref());
                    out.push(format!("{path}: {message}"));
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_messages(inner, Some(&path), out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_messages(inner, Some(&format!("{path}[{index}]")), out);
                }
            }
        }
    }
}
