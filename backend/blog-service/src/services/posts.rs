/// Post mutation service - create and edit
use sqlx::PgPool;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::db::{group_repo, post_repo};
use crate::error::{AppError, Result};
use crate::forms::PostForm;
use crate::models::Post;

pub struct PostService {
    pool: PgPool,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Validate the form, including that a submitted group id resolves to a
    /// real group. An unknown group is a field-level failure, the same as
    /// an invalid choice in a select box.
    async fn check_form(&self, form: &PostForm) -> Result<()> {
        let mut errors = form.validate().err().unwrap_or_else(ValidationErrors::new);

        if let Some(group_id) = form.group_id {
            if group_repo::find_group_by_id(&self.pool, group_id).await?.is_none() {
                let mut unknown = ValidationError::new("unknown_group");
                unknown.message = Some("Group does not exist".into());
                errors.add("group_id", unknown);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::ValidationFailed(errors))
        }
    }

    /// Create a post authored by the acting user
    pub async fn create_post(&self, author_id: Uuid, form: &PostForm) -> Result<Post> {
        self.check_form(form).await?;

        let post = post_repo::create_post(
            &self.pool,
            author_id,
            &form.text,
            form.group_id,
            form.image_key.as_deref(),
        )
        .await?;

        tracing::info!(post_id = %post.id, author_id = %author_id, "post created");

        Ok(post)
    }

    /// Apply an edit to a post already cleared by the authorization guard.
    /// The author is immutable; only text, group, and image change.
    pub async fn edit_post(&self, post: &Post, form: &PostForm) -> Result<Post> {
        self.check_form(form).await?;

        let updated = post_repo::update_post(
            &self.pool,
            post.id,
            &form.text,
            form.group_id,
            form.image_key.as_deref(),
        )
        .await?;

        tracing::info!(post_id = %updated.id, "post edited");

        Ok(updated)
    }
}
