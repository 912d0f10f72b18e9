/// Follow service - idempotent follow/unfollow toggle
///
/// Self-follow attempts, duplicate follows, and unfollows of a missing edge
/// are explicit no-ops. Idempotence does not rely on a check-then-act read:
/// the insert is conflict-tolerant and the storage layer enforces edge
/// uniqueness and the no-self-follow rule.
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{follow_repo, user_repo};
use crate::error::{AppError, Result};
use crate::models::User;

#[derive(Clone)]
pub struct FollowService {
    pool: PgPool,
}

/// Outcome of a follow or unfollow call
#[derive(Debug, PartialEq, Eq)]
pub enum FollowOutcome {
    /// The edge was created or removed; callers land on the author's profile.
    Changed { author_username: String },
    /// Nothing to do (self-target, duplicate follow, or absent edge);
    /// callers land on the home feed.
    NoOp,
}

impl FollowService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn target_author(&self, username: &str) -> Result<User> {
        user_repo::find_user_by_username(&self.pool, username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user '{}' does not exist", username)))
    }

    /// Follow the author with the given username
    pub async fn follow(&self, follower_id: Uuid, username: &str) -> Result<FollowOutcome> {
        let author = self.target_author(username).await?;

        if author.id == follower_id {
            return Ok(FollowOutcome::NoOp);
        }

        let inserted = follow_repo::insert_follow(&self.pool, follower_id, author.id).await?;
        if inserted {
            tracing::info!(follower_id = %follower_id, author_id = %author.id, "follow created");
            Ok(FollowOutcome::Changed {
                author_username: author.username,
            })
        } else {
            Ok(FollowOutcome::NoOp)
        }
    }

    /// Unfollow the author with the given username
    pub async fn unfollow(&self, follower_id: Uuid, username: &str) -> Result<FollowOutcome> {
        let author = self.target_author(username).await?;

        if author.id == follower_id {
            return Ok(FollowOutcome::NoOp);
        }

        let removed = follow_repo::delete_follow(&self.pool, follower_id, author.id).await?;
        if removed {
            tracing::info!(follower_id = %follower_id, author_id = %author.id, "follow removed");
            Ok(FollowOutcome::Changed {
                author_username: author.username,
            })
        } else {
            Ok(FollowOutcome::NoOp)
        }
    }
}
