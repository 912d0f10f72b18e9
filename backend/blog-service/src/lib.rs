/// Blog Service Library
///
/// A blog platform service: users write posts optionally assigned to a
/// group, comment on posts, and follow other authors for a personalized
/// feed. Listings are paginated and the home feed is served through a
/// TTL page cache.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: Data structures for users, groups, posts, comments, follows
/// - `services`: Business logic layer
/// - `db`: Database access layer and repositories
/// - `cache`: Rendered-page caching
/// - `middleware`: Authentication extractors and the authorization guard
/// - `pagination`: Page windowing over ordered result sets
/// - `forms`: Submission types and validation rules
/// - `auth`: JWT issuing and validation
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod auth;
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod pagination;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
