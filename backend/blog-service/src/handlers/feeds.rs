/// Feed handlers - the read-only listing endpoints
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::cache::PageCache;
use crate::config::FeedConfig;
use crate::error::Result;
use crate::handlers::{FeedQuery, HOME_PATH};
use crate::middleware::{MaybeUser, UserId};
use crate::services::FeedService;

fn feed_service(pool: &web::Data<PgPool>, feed: &web::Data<FeedConfig>) -> FeedService {
    FeedService::new(pool.get_ref().clone(), feed.posts_per_page)
}

/// Home feed. One shared cache entry serves every viewer and page during
/// the TTL window; cache failures degrade to a live render.
pub async fn index(
    pool: web::Data<PgPool>,
    feed: web::Data<FeedConfig>,
    cache: web::Data<Arc<PageCache>>,
    query: web::Query<FeedQuery>,
) -> Result<HttpResponse> {
    match cache.get(HOME_PATH).await {
        Ok(Some(body)) => {
            return Ok(HttpResponse::Ok()
                .content_type("application/json")
                .body(body));
        }
        Ok(None) => {}
        Err(e) => warn!("page cache read failed, rendering live: {}", e),
    }

    let page = feed_service(&pool, &feed).home_page(query.page()).await?;
    let body = serde_json::to_string(&page)?;

    if let Err(e) = cache.put(HOME_PATH, &body).await {
        warn!("page cache write failed: {}", e);
    }

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}

/// Group feed, looked up by slug
pub async fn group_posts(
    pool: web::Data<PgPool>,
    feed: web::Data<FeedConfig>,
    slug: web::Path<String>,
    query: web::Query<FeedQuery>,
) -> Result<HttpResponse> {
    let page = feed_service(&pool, &feed)
        .group_page(&slug, query.page())
        .await?;

    Ok(HttpResponse::Ok().json(page))
}

/// Profile feed, looked up by username; reports whether the viewer already
/// follows the author
pub async fn profile(
    pool: web::Data<PgPool>,
    feed: web::Data<FeedConfig>,
    username: web::Path<String>,
    viewer: MaybeUser,
    query: web::Query<FeedQuery>,
) -> Result<HttpResponse> {
    let page = feed_service(&pool, &feed)
        .profile_page(&username, viewer.0, query.page())
        .await?;

    Ok(HttpResponse::Ok().json(page))
}

/// Post detail with comments
pub async fn post_detail(
    pool: web::Data<PgPool>,
    feed: web::Data<FeedConfig>,
    post_id: web::Path<Uuid>,
    viewer: MaybeUser,
) -> Result<HttpResponse> {
    let detail = feed_service(&pool, &feed)
        .post_detail(*post_id, viewer.0)
        .await?;

    Ok(HttpResponse::Ok().json(detail))
}

/// Following feed for the authenticated viewer
pub async fn follow_index(
    pool: web::Data<PgPool>,
    feed: web::Data<FeedConfig>,
    user: UserId,
    query: web::Query<FeedQuery>,
) -> Result<HttpResponse> {
    let page = feed_service(&pool, &feed)
        .following_page(user.0, query.page())
        .await?;

    Ok(HttpResponse::Ok().json(page))
}
