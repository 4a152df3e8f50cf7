use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use crate::error::RepoError;

/// Storage operations for blog posts.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All stored posts, oldest `created` first.
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Find a post by its unique ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError>;

    /// Store a new post and return it with its generated id.
    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError>;

    /// Apply a partial update. Returns `RepoError::NotFound` if no post has this id.
    async fn update(&self, id: Uuid, patch: BlogPostPatch) -> Result<BlogPost, RepoError>;

    /// Remove every post. Used for test teardown.
    async fn delete_all(&self) -> Result<u64, RepoError>;
}
