/// OpenAPI documentation for the blog service
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::forms::{CommentForm, PostForm};
use crate::models::{Comment, Follow, Group, Post, User};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog Service API",
        version = "1.0.0",
        description = "Blog platform service for posts, groups, comments, and follows. Provides public feeds (home, group, profile) with pagination and a TTL page cache, plus authenticated post/comment creation, post editing, and follow management.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development server"),
    ),
    tags(
        (name = "health", description = "Service health checks"),
        (name = "feeds", description = "Home, group, profile, and following feeds"),
        (name = "posts", description = "Post creation and editing"),
        (name = "comments", description = "Comments on posts"),
        (name = "follows", description = "Follow and unfollow authors"),
    ),
    components(schemas(User, Group, Post, Comment, Follow, PostForm, CommentForm)),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
