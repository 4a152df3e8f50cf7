//! In-memory post store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

/// In-memory post store using a HashMap behind an async RwLock.
///
/// Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, BlogPost>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let store = self.store.read().await;

        let mut posts: Vec<BlogPost> = store.values().cloned().collect();
        // Same ordering as the SQL store.
        posts.sort_by(|a, b| a.created.cmp(&b.created).then(a.id.cmp(&b.id)));

        Ok(posts)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError> {
        let post = post.into_post();

        let mut store = self.store.write().await;
        if store.contains_key(&post.id) {
            return Err(RepoError::Constraint("Post already exists".to_string()));
        }
        store.insert(post.id, post.clone());

        tracing::debug!(post_id = %post.id, "Inserted post");
        Ok(post)
    }

    async fn update(&self, id: Uuid, patch: BlogPostPatch) -> Result<BlogPost, RepoError> {
        let mut store = self.store.write().await;
        let post = store.get_mut(&id).ok_or(RepoError::NotFound)?;
        post.apply(patch);

        tracing::debug!(post_id = %id, "Updated post");
        Ok(post.clone())
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        let removed = store.len() as u64;
        store.clear();
        Ok(removed)
    }
}
