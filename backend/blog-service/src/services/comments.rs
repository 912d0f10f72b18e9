/// Comment mutation service
///
/// Comments are immutable once created; the only operation is adding one
/// to an existing post. An invalid submission is surfaced as a validation
/// failure instead of being silently dropped.
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::db::{comment_repo, post_repo};
use crate::error::{AppError, Result};
use crate::forms::CommentForm;
use crate::models::Comment;

pub struct CommentService {
    pool: PgPool,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Add a comment by the acting user to a post
    pub async fn add_comment(
        &self,
        author_id: Uuid,
        post_id: Uuid,
        form: &CommentForm,
    ) -> Result<Comment> {
        let post = post_repo::find_post_by_id(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post {} does not exist", post_id)))?;

        form.validate()?;

        let comment = comment_repo::create_comment(&self.pool, post.id, author_id, &form.text).await?;

        tracing::info!(
            comment_id = %comment.id,
            post_id = %post.id,
            author_id = %author_id,
            "comment added"
        );

        Ok(comment)
    }
}
