/// HTTP request handlers
///
/// Handlers stay thin: construct the service for the request, translate its
/// outcome into JSON or a `303 See Other` redirect.
pub mod comments;
pub mod feeds;
pub mod follow;
pub mod posts;

pub use comments::*;
pub use feeds::*;
pub use follow::*;
pub use posts::*;

use actix_web::{http::header, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

/// Home feed route; also the page-cache key for it.
pub const HOME_PATH: &str = "/api/v1/posts";

pub(crate) fn profile_path(username: &str) -> String {
    format!("/api/v1/profiles/{}", username)
}

pub(crate) fn post_detail_path(post_id: Uuid) -> String {
    format!("/api/v1/posts/{}", post_id)
}

/// Redirect outcome shared by every mutation handler
pub(crate) fn see_other(location: String) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Query parameters accepted by every listing route. The raw string is
/// parsed leniently; an unparsable page never turns into a client error.
#[derive(Debug, Default, Deserialize)]
pub struct FeedQuery {
    pub page: Option<String>,
}

impl FeedQuery {
    pub(crate) fn page(&self) -> Option<u32> {
        crate::pagination::parse_page(self.page.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_helpers() {
        assert_eq!(profile_path("leo"), "/api/v1/profiles/leo");

        let id = Uuid::new_v4();
        assert_eq!(post_detail_path(id), format!("/api/v1/posts/{}", id));
    }

    #[test]
    fn test_see_other_sets_location() {
        let response = see_other(profile_path("leo"));
        assert_eq!(response.status(), actix_web::http::StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/api/v1/profiles/leo"
        );
    }

    #[test]
    fn test_feed_query_page_parsing() {
        let query = FeedQuery {
            page: Some("2".to_string()),
        };
        assert_eq!(query.page(), Some(2));

        let garbage = FeedQuery {
            page: Some("two".to_string()),
        };
        assert_eq!(garbage.page(), None);
    }
}
