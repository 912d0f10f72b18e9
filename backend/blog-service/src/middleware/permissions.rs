/// Authorization guard for post-mutating operations
///
/// Only a post's author may mutate it. A non-author is not an error case:
/// the caller short-circuits into a redirect to the post's read-only detail
/// view. Authentication itself is handled upstream by the `UserId`
/// extractor; the two checks compose independently.
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::post_repo;
use crate::error::{AppError, Result};
use crate::models::Post;

/// Outcome of the author check for a loaded post
#[derive(Debug)]
pub enum AuthorGate {
    /// The acting user is the author; the mutation may proceed.
    Author(Post),
    /// The acting user is not the author; redirect to the detail view.
    NotAuthor(Post),
}

/// Decide whether `user_id` may mutate `post`
pub fn author_gate(post: Post, user_id: Uuid) -> AuthorGate {
    if post.author_id == user_id {
        AuthorGate::Author(post)
    } else {
        AuthorGate::NotAuthor(post)
    }
}

/// Load a post and gate it on authorship. Fails with `NotFound` when the
/// post does not exist.
pub async fn load_post_for_author(
    pool: &PgPool,
    post_id: Uuid,
    user_id: Uuid,
) -> Result<AuthorGate> {
    let post = post_repo::find_post_by_id(pool, post_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {} does not exist", post_id)))?;

    Ok(author_gate(post, user_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn post_by(author_id: Uuid) -> Post {
        Post {
            id: Uuid::new_v4(),
            author_id,
            text: "guarded post".to_string(),
            group_id: None,
            image_key: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_author_passes_the_gate() {
        let author = Uuid::new_v4();
        match author_gate(post_by(author), author) {
            AuthorGate::Author(post) => assert_eq!(post.author_id, author),
            AuthorGate::NotAuthor(_) => panic!("author must pass the gate"),
        }
    }

    #[test]
    fn test_non_author_is_short_circuited() {
        let author = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        assert!(matches!(
            author_gate(post_by(author), stranger),
            AuthorGate::NotAuthor(_)
        ));
    }
}
