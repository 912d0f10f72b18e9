/// Submission forms and their validation rules
///
/// Mirrors the entity constraints at the HTTP boundary: post and comment
/// text must be non-blank after trimming. Group membership is submitted by
/// id and checked against the database by the mutation services.
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// validator-compatible check rejecting empty and whitespace-only text
pub fn not_blank(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        Err(ValidationError::new("blank"))
    } else {
        Ok(())
    }
}

/// Create/edit submission for a post
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct PostForm {
    #[validate(custom(function = "not_blank", message = "Text is required"))]
    pub text: String,
    pub group_id: Option<Uuid>,
    pub image_key: Option<String>,
}

/// Submission for a comment on a post
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CommentForm {
    #[validate(custom(function = "not_blank", message = "Text is required"))]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_form_rejects_empty_text() {
        let form = PostForm {
            text: String::new(),
            group_id: None,
            image_key: None,
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("text"));
    }

    #[test]
    fn test_post_form_rejects_whitespace_only_text() {
        let form = PostForm {
            text: "   \n\t".to_string(),
            group_id: None,
            image_key: None,
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_post_form_accepts_text_without_group() {
        let form = PostForm {
            text: "A perfectly ordinary post".to_string(),
            group_id: None,
            image_key: None,
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_post_form_accepts_group_and_image() {
        let form = PostForm {
            text: "Post with attachments".to_string(),
            group_id: Some(Uuid::new_v4()),
            image_key: Some("posts/small.gif".to_string()),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_comment_form_rejects_blank_text() {
        let form = CommentForm {
            text: "  ".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("text"));
    }

    #[test]
    fn test_comment_form_accepts_text() {
        let form = CommentForm {
            text: "Nice post".to_string(),
        };
        assert!(form.validate().is_ok());
    }
}
