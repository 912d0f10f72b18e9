use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Conflict-tolerant follow insert; returns true if a new edge was created.
/// The composite primary key on (follower_id, author_id) makes concurrent
/// duplicate requests collapse into a single row.
pub async fn insert_follow(
    pool: &PgPool,
    follower_id: Uuid,
    author_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let inserted = sqlx::query(
        r#"
        INSERT INTO follows (follower_id, author_id, created_at)
        VALUES ($1, $2, NOW())
        ON CONFLICT (follower_id, author_id) DO NOTHING
        RETURNING follower_id
        "#,
    )
    .bind(follower_id)
    .bind(author_id)
    .fetch_optional(pool)
    .await?;

    Ok(inserted.is_some())
}

/// Idempotent delete; returns true if an edge was removed.
pub async fn delete_follow(
    pool: &PgPool,
    follower_id: Uuid,
    author_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let affected = sqlx::query(
        r#"
        DELETE FROM follows
        WHERE follower_id = $1 AND author_id = $2
        "#,
    )
    .bind(follower_id)
    .bind(author_id)
    .execute(pool)
    .await?
    .rows_affected();

    Ok(affected > 0)
}

/// Check whether a follow edge exists
pub async fn follow_exists(
    pool: &PgPool,
    follower_id: Uuid,
    author_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM follows WHERE follower_id = $1 AND author_id = $2
        ) as found
        "#,
    )
    .bind(follower_id)
    .bind(author_id)
    .fetch_one(pool)
    .await?;

    Ok(row.get::<bool, _>("found"))
}
