/// Database access layer
///
/// Flat repository functions over a shared `PgPool`; the services layer
/// converts `sqlx::Error` into application errors.
pub mod comment_repo;
pub mod follow_repo;
pub mod group_repo;
pub mod post_repo;
pub mod user_repo;
