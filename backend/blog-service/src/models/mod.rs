/// Data models for the blog service
///
/// Entities:
/// - User: author identity (lifecycle owned by the identity system)
/// - Group: administratively created topic a post may belong to
/// - Post: authored text with an optional group and image attachment
/// - Comment: authored text attached to a post
/// - Follow: directed follower -> author edge
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Number of characters of post text shown as its preview.
pub const PREVIEW_CHARS: usize = 15;

/// User entity - identity with a unique username
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Group entity - a named, sluggable topic with a description
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Group {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Post entity - authored text, optionally in a group, optionally with an
/// externally stored image
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub text: String,
    pub group_id: Option<Uuid>,
    pub image_key: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Short preview of the post text (first [`PREVIEW_CHARS`] characters).
    pub fn preview(&self) -> String {
        self.text.chars().take(PREVIEW_CHARS).collect()
    }
}

/// Comment entity - a comment on a post; immutable once created
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Follow edge - follower receives the author's posts in their feed
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Follow {
    pub follower_id: Uuid,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_with_text(text: &str) -> Post {
        Post {
            id: Uuid::new_v4(),
            author_id: Uuid::new_v4(),
            text: text.to_string(),
            group_id: None,
            image_key: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let post = post_with_text("a post that is clearly longer than fifteen characters");
        assert_eq!(post.preview().chars().count(), PREVIEW_CHARS);
    }

    #[test]
    fn test_preview_keeps_short_text_intact() {
        let post = post_with_text("short");
        assert_eq!(post.preview(), "short");
    }

    #[test]
    fn test_preview_is_character_safe() {
        let post = post_with_text("Тестовый пост для проверки");
        assert_eq!(post.preview(), "Тестовый пост д");
    }
}
