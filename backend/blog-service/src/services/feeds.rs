/// Feed and listing service - read-only post collections
///
/// Every listing is paginated with the configured page size and ordered
/// newest-first at the query level, so pages are stable for a stable
/// backing order.
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{comment_repo, follow_repo, group_repo, post_repo, user_repo};
use crate::error::{AppError, Result};
use crate::models::{Comment, Group, Post, User};
use crate::pagination::{page_window, Page};

pub struct FeedService {
    pool: PgPool,
    posts_per_page: u32,
}

/// Profile feed plus the profile header data
#[derive(Debug, serde::Serialize)]
pub struct ProfilePage {
    pub user: User,
    pub post_count: i64,
    /// Whether the viewer follows this author; None for anonymous viewers
    /// and for a user looking at their own profile.
    pub following: Option<bool>,
    pub posts: Page<Post>,
}

/// Group feed plus the group header data
#[derive(Debug, serde::Serialize)]
pub struct GroupPage {
    pub group: Group,
    pub posts: Page<Post>,
}

/// Post detail view data
#[derive(Debug, serde::Serialize)]
pub struct PostDetail {
    pub post: Post,
    pub preview: String,
    pub author_post_count: i64,
    pub is_author: bool,
    pub comments: Vec<Comment>,
}

impl FeedService {
    pub fn new(pool: PgPool, posts_per_page: u32) -> Self {
        Self {
            pool,
            posts_per_page,
        }
    }

    /// Home feed: all posts, most recent first
    pub async fn home_page(&self, page: Option<u32>) -> Result<Page<Post>> {
        let total = post_repo::count_posts(&self.pool).await?;
        let window = page_window(total, self.posts_per_page, page);
        let posts = post_repo::list_posts(&self.pool, window.limit, window.offset).await?;

        Ok(Page::new(posts, window))
    }

    /// Group feed: posts belonging to the group with the given slug
    pub async fn group_page(&self, slug: &str, page: Option<u32>) -> Result<GroupPage> {
        let group = group_repo::find_group_by_slug(&self.pool, slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("group '{}' does not exist", slug)))?;

        let total = post_repo::count_posts_by_group(&self.pool, group.id).await?;
        let window = page_window(total, self.posts_per_page, page);
        let posts =
            post_repo::list_posts_by_group(&self.pool, group.id, window.limit, window.offset)
                .await?;

        Ok(GroupPage {
            group,
            posts: Page::new(posts, window),
        })
    }

    /// Profile feed: posts by the user with the given username
    pub async fn profile_page(
        &self,
        username: &str,
        viewer: Option<Uuid>,
        page: Option<u32>,
    ) -> Result<ProfilePage> {
        let user = user_repo::find_user_by_username(&self.pool, username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user '{}' does not exist", username)))?;

        let post_count = post_repo::count_posts_by_author(&self.pool, user.id).await?;
        let window = page_window(post_count, self.posts_per_page, page);
        let posts =
            post_repo::list_posts_by_author(&self.pool, user.id, window.limit, window.offset)
                .await?;

        let following = match viewer {
            Some(viewer_id) if viewer_id != user.id => {
                Some(follow_repo::follow_exists(&self.pool, viewer_id, user.id).await?)
            }
            _ => None,
        };

        Ok(ProfilePage {
            user,
            post_count,
            following,
            posts: Page::new(posts, window),
        })
    }

    /// Following feed: posts authored by anyone the viewer follows
    pub async fn following_page(&self, viewer: Uuid, page: Option<u32>) -> Result<Page<Post>> {
        let total = post_repo::count_followed_posts(&self.pool, viewer).await?;
        let window = page_window(total, self.posts_per_page, page);
        let posts =
            post_repo::list_followed_posts(&self.pool, viewer, window.limit, window.offset).await?;

        Ok(Page::new(posts, window))
    }

    /// Post detail: the post, its comments, and the author's post count
    pub async fn post_detail(&self, post_id: Uuid, viewer: Option<Uuid>) -> Result<PostDetail> {
        let post = post_repo::find_post_by_id(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post {} does not exist", post_id)))?;

        let author_post_count = post_repo::count_posts_by_author(&self.pool, post.author_id).await?;
        let comments = comment_repo::list_comments_for_post(&self.pool, post_id).await?;
        let is_author = viewer.map(|v| v == post.author_id).unwrap_or(false);
        let preview = post.preview();

        Ok(PostDetail {
            post,
            preview,
            author_post_count,
            is_author,
            comments,
        })
    }
}
