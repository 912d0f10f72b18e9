/// Follow/unfollow handlers
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::error::Result;
use crate::handlers::{profile_path, see_other, HOME_PATH};
use crate::middleware::UserId;
use crate::services::{FollowOutcome, FollowService};

/// A changed edge lands on the author's profile; a no-op lands on the home
/// feed. Both outcomes are ordinary redirects, never errors.
fn redirect_for(outcome: FollowOutcome) -> HttpResponse {
    match outcome {
        FollowOutcome::Changed { author_username } => see_other(profile_path(&author_username)),
        FollowOutcome::NoOp => see_other(HOME_PATH.to_string()),
    }
}

/// Follow an author by username
pub async fn profile_follow(
    pool: web::Data<PgPool>,
    user: UserId,
    username: web::Path<String>,
) -> Result<HttpResponse> {
    let outcome = FollowService::new((**pool).clone())
        .follow(user.0, &username)
        .await?;

    Ok(redirect_for(outcome))
}

/// Unfollow an author by username
pub async fn profile_unfollow(
    pool: web::Data<PgPool>,
    user: UserId,
    username: web::Path<String>,
) -> Result<HttpResponse> {
    let outcome = FollowService::new((**pool).clone())
        .unfollow(user.0, &username)
        .await?;

    Ok(redirect_for(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header;

    #[test]
    fn test_changed_outcome_redirects_to_profile() {
        let response = redirect_for(FollowOutcome::Changed {
            author_username: "leo".to_string(),
        });
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/api/v1/profiles/leo"
        );
    }

    #[test]
    fn test_noop_outcome_redirects_home() {
        let response = redirect_for(FollowOutcome::NoOp);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), HOME_PATH);
    }
}
