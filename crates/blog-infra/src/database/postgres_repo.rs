//! PostgreSQL post repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, QueryOrder, Set};
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        _ => {
            let err_str = err.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint("Post already exists".to_string())
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Created)
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(count = result.len(), "Loaded all posts");
        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        tracing::debug!(post_id = %id, "Finding post by id");

        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError> {
        let active_model: post::ActiveModel = post.into_post().into();
        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;

        tracing::debug!(post_id = %model.id, "Inserted post");
        Ok(model.into())
    }

    async fn update(&self, id: Uuid, patch: BlogPostPatch) -> Result<BlogPost, RepoError> {
        let existing = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)?;

        if patch.is_empty() {
            return Ok(existing.into());
        }

        let mut active_model = existing.into_active_model();
        if let Some(title) = patch.title {
            active_model.title = Set(title);
        }
        if let Some(content) = patch.content {
            active_model.content = Set(content);
        }

        let model = active_model.update(&self.db).await.map_err(map_db_err)?;

        tracing::debug!(post_id = %id, "Updated post");
        Ok(model.into())
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let result = PostEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(rows = result.rows_affected, "Deleted all posts");
        Ok(result.rows_affected)
    }
}
