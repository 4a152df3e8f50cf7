//! Blog post handlers.

use actix_web::{HttpResponse, http::header, web};
use uuid::Uuid;
use validator::Validate;

use blog_core::error::{DomainError, RepoError};
use blog_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

const ENTITY: &str = "BlogPost";

fn not_found(id: Uuid) -> AppError {
    DomainError::NotFound {
        entity_type: ENTITY,
        id,
    }
    .into()
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts: Vec<PostResponse> = state
        .posts
        .find_all()
        .await?
        .into_iter()
        .map(PostResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let post = state.posts.insert(req.into()).await?;
    tracing::info!(post_id = %post.id, request_id = %request_id.as_str(), "Created post");

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/posts/{}", post.id)))
        .json(PostResponse::from(post)))
}

/// PUT /posts/{id}
///
/// Responds 201 on success, matching the established client contract.
pub async fn update_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    if let Some(body_id) = req.id {
        if body_id != id {
            return Err(DomainError::Validation(format!(
                "Request path id ({}) and request body id ({}) must match",
                id, body_id
            ))
            .into());
        }
    }
    req.validate()?;

    let post = state
        .posts
        .update(id, req.into_patch())
        .await
        .map_err(|e| match e {
            RepoError::NotFound => not_found(id),
            other => other.into(),
        })?;
    tracing::info!(post_id = %id, request_id = %request_id.as_str(), "Updated post");

    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}
