/// Business logic layer
pub mod comments;
pub mod feeds;
pub mod follow;
pub mod posts;

pub use comments::CommentService;
pub use feeds::FeedService;
pub use follow::{FollowOutcome, FollowService};
pub use posts::PostService;
