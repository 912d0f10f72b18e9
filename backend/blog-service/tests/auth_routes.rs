//! Route-level tests for the authentication extractors.
//!
//! These run against an in-memory actix app with plain handlers, so they
//! exercise the Bearer-token gate end-to-end without a database.

use actix_web::{http::StatusCode, test, web, App, HttpResponse};
use uuid::Uuid;

use blog_service::auth;
use blog_service::middleware::{MaybeUser, UserId};

async fn whoami(user: UserId) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "user_id": user.0 }))
}

async fn viewer(viewer: MaybeUser) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "anonymous": viewer.0.is_none() }))
}

fn init_keys() {
    auth::initialize("route-test-secret");
}

#[actix_web::test]
async fn required_auth_rejects_missing_header() {
    init_keys();
    let app = test::init_service(App::new().route("/whoami", web::get().to(whoami))).await;

    let req = test::TestRequest::get().uri("/whoami").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn required_auth_rejects_garbage_token() {
    init_keys();
    let app = test::init_service(App::new().route("/whoami", web::get().to(whoami))).await;

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header(("Authorization", "Bearer not-a-jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn required_auth_rejects_wrong_scheme() {
    init_keys();
    let app = test::init_service(App::new().route("/whoami", web::get().to(whoami))).await;

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn required_auth_accepts_valid_token() {
    init_keys();
    let user_id = Uuid::new_v4();
    let token = auth::issue_token(user_id, 3600).unwrap();

    let app = test::init_service(App::new().route("/whoami", web::get().to(whoami))).await;

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["user_id"], serde_json::json!(user_id));
}

#[actix_web::test]
async fn optional_auth_tolerates_anonymous_viewers() {
    init_keys();
    let app = test::init_service(App::new().route("/viewer", web::get().to(viewer))).await;

    let req = test::TestRequest::get().uri("/viewer").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["anonymous"], serde_json::json!(true));
}

#[actix_web::test]
async fn optional_auth_recognizes_a_valid_token() {
    init_keys();
    let token = auth::issue_token(Uuid::new_v4(), 3600).unwrap();

    let app = test::init_service(App::new().route("/viewer", web::get().to(viewer))).await;

    let req = test::TestRequest::get()
        .uri("/viewer")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["anonymous"], serde_json::json!(false));
}
