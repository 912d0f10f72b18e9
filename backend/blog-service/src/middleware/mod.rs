/// HTTP middleware utilities for the blog service
///
/// Authentication is expressed as two extractors so that the "is
/// authenticated" gate composes per-route with the resource-owner guard in
/// [`permissions`]: `UserId` rejects the request with 401, `MaybeUser`
/// yields `None` for anonymous viewers on public pages.
pub mod permissions;

use actix_web::{error::ErrorUnauthorized, Error, FromRequest, HttpRequest};
use std::future::{ready, Ready};
use uuid::Uuid;

use crate::auth;

/// Authenticated user identifier; extraction fails with 401 when the
/// request carries no valid Bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub Uuid);

/// Optional viewer identity for public pages. An absent or invalid token is
/// an anonymous viewer, never an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaybeUser(pub Option<Uuid>);

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

impl FromRequest for UserId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = match bearer_token(req) {
            None => Err(ErrorUnauthorized("Missing Authorization header")),
            Some(token) => auth::user_id_from_token(token)
                .map(UserId)
                .ok_or_else(|| ErrorUnauthorized("Invalid or expired token")),
        };

        ready(result)
    }
}

impl FromRequest for MaybeUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let viewer = bearer_token(req).and_then(auth::user_id_from_token);
        ready(Ok(MaybeUser(viewer)))
    }
}
