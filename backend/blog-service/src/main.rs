use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use redis::aio::ConnectionManager;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

use blog_service::cache::PageCache;
use blog_service::openapi::ApiDoc;
use blog_service::{auth, handlers, Config};

async fn health_summary(pool: web::Data<PgPool>) -> HttpResponse {
    match sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "blog-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("PostgreSQL connection failed: {}", e),
            "service": "blog-service"
        })),
    }
}

async fn openapi_json(doc: web::Data<utoipa::openapi::OpenApi>) -> actix_web::Result<HttpResponse> {
    let body = serde_json::to_string(&*doc).map_err(|e| {
        tracing::error!("OpenAPI serialization failed: {}", e);
        actix_web::error::ErrorInternalServerError("OpenAPI serialization error")
    })?;

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug,sqlx=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting blog-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    auth::initialize(&config.auth.jwt_secret);

    // Initialize database connection pool
    let db_pool = match PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database pool creation failed: {}", e);
            eprintln!("ERROR: Failed to create database pool: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Connected to database");

    // Apply embedded migrations
    if let Err(e) = sqlx::migrate!("./migrations").run(&db_pool).await {
        tracing::error!("Migration failed: {}", e);
        return Err(io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to run migrations: {}", e),
        ));
    }

    // Initialize the Redis-backed page cache
    let redis_client = redis::Client::open(config.cache.url.as_str()).map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to parse Redis URL: {}", e),
        )
    })?;
    let redis_manager = ConnectionManager::new(redis_client).await.map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to initialize Redis connection: {}", e),
        )
    })?;

    let page_cache = Arc::new(PageCache::new(redis_manager, config.cache.page_ttl_secs));

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    let feed_config = config.feed.clone();
    let cors_origins = config.cors.allowed_origins.clone();

    HttpServer::new(move || {
        // Build CORS configuration
        let mut cors = Cors::default();
        for origin in cors_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        let openapi_doc = ApiDoc::openapi();

        App::new()
            .app_data(web::Data::new(openapi_doc))
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(web::Data::new(feed_config.clone()))
            .app_data(web::Data::new(page_cache.clone()))
            .wrap(cors)
            .wrap(tracing_actix_web::TracingLogger::default())
            .service(
                web::scope("/api/v1")
                    .route("/health", web::get().to(health_summary))
                    .route("/openapi.json", web::get().to(openapi_json))
                    .service(
                        web::resource("/posts")
                            .route(web::get().to(handlers::index))
                            .route(web::post().to(handlers::create_post)),
                    )
                    .service(
                        web::resource("/posts/{post_id}")
                            .route(web::get().to(handlers::post_detail)),
                    )
                    .route("/posts/{post_id}/edit", web::post().to(handlers::edit_post))
                    .route(
                        "/posts/{post_id}/comments",
                        web::post().to(handlers::add_comment),
                    )
                    .route("/groups/{slug}", web::get().to(handlers::group_posts))
                    .route("/profiles/{username}", web::get().to(handlers::profile))
                    .route(
                        "/profiles/{username}/follow",
                        web::post().to(handlers::profile_follow),
                    )
                    .route(
                        "/profiles/{username}/unfollow",
                        web::post().to(handlers::profile_unfollow),
                    )
                    .route("/feed/following", web::get().to(handlers::follow_index)),
            )
    })
    .bind(&bind_address)?
    .workers(4)
    .run()
    .await
}
