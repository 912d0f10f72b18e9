/// Comment handlers
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::forms::CommentForm;
use crate::handlers::{post_detail_path, see_other};
use crate::middleware::UserId;
use crate::services::CommentService;

/// Add a comment to a post; lands back on the post's detail view
pub async fn add_comment(
    pool: web::Data<PgPool>,
    user: UserId,
    post_id: web::Path<Uuid>,
    form: web::Json<CommentForm>,
) -> Result<HttpResponse> {
    let comment = CommentService::new((**pool).clone())
        .add_comment(user.0, *post_id, &form)
        .await?;

    Ok(see_other(post_detail_path(comment.post_id)))
}
