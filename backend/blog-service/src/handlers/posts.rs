/// Post mutation handlers - create and edit
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::user_repo;
use crate::error::{AppError, Result};
use crate::forms::PostForm;
use crate::handlers::{post_detail_path, profile_path, see_other};
use crate::middleware::permissions::{load_post_for_author, AuthorGate};
use crate::middleware::UserId;
use crate::services::PostService;

/// Create a new post; lands on the author's profile feed
pub async fn create_post(
    pool: web::Data<PgPool>,
    user: UserId,
    form: web::Json<PostForm>,
) -> Result<HttpResponse> {
    let author = user_repo::find_user_by_id(&pool, user.0)
        .await?
        .ok_or_else(|| AppError::Unauthorized("token subject is not a known user".to_string()))?;

    PostService::new((**pool).clone())
        .create_post(author.id, &form)
        .await?;

    Ok(see_other(profile_path(&author.username)))
}

/// Edit a post. Non-authors are not shown an error: they are redirected to
/// the post's read-only detail view.
pub async fn edit_post(
    pool: web::Data<PgPool>,
    user: UserId,
    post_id: web::Path<Uuid>,
    form: web::Json<PostForm>,
) -> Result<HttpResponse> {
    let post = match load_post_for_author(&pool, *post_id, user.0).await? {
        AuthorGate::NotAuthor(post) => return Ok(see_other(post_detail_path(post.id))),
        AuthorGate::Author(post) => post,
    };

    let updated = PostService::new((**pool).clone())
        .edit_post(&post, &form)
        .await?;

    Ok(see_other(post_detail_path(updated.id)))
}
