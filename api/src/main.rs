//! Portfolio API Server
//!
//! Backend for a personal portfolio site: a keyset-paginated post feed,
//! a blog CMS, showcase content, a contact inbox, and admin auth.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    PostgresAdminUserRepository, PostgresArticleRepository, PostgresCertificationRepository,
    PostgresContactMessageRepository, PostgresPostRepository, PostgresShowcaseProjectRepository,
};
use app::{ArticleService, AuthService, ContactService, FeedService, KeysetMode, ShowcaseService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub feed_service: Arc<FeedService<PostgresPostRepository>>,
    pub article_service: Arc<ArticleService<PostgresArticleRepository>>,
    pub showcase_service:
        Arc<ShowcaseService<PostgresShowcaseProjectRepository, PostgresCertificationRepository>>,
    pub contact_service: Arc<ContactService<PostgresContactMessageRepository>>,
    pub auth_service: Arc<AuthService<PostgresAdminUserRepository>>,
    pub config: Config,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,portfolio_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Portfolio API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connected");

    // Create adapters
    let post_repo = Arc::new(PostgresPostRepository::new(db.clone()));
    let article_repo = Arc::new(PostgresArticleRepository::new(db.clone()));
    let project_repo = Arc::new(PostgresShowcaseProjectRepository::new(db.clone()));
    let certification_repo = Arc::new(PostgresCertificationRepository::new(db.clone()));
    let contact_repo = Arc::new(PostgresContactMessageRepository::new(db.clone()));
    let admin_repo = Arc::new(PostgresAdminUserRepository::new(db.clone()));

    // Resolve the feed's keyset capability once, up front
    let keyset_mode = KeysetMode::detect(post_repo.as_ref()).await;
    tracing::info!(mode = %keyset_mode, "feed pagination mode resolved");

    // Create application services
    let feed_service = Arc::new(FeedService::new(
        post_repo.clone(),
        keyset_mode,
        config.feed_default_page_size,
    ));
    let article_service = Arc::new(ArticleService::new(article_repo.clone()));
    let showcase_service = Arc::new(ShowcaseService::new(
        project_repo.clone(),
        certification_repo.clone(),
    ));
    let contact_service = Arc::new(ContactService::new(contact_repo.clone()));
    let auth_service = Arc::new(AuthService::new(
        admin_repo.clone(),
        config.jwt_secret.clone(),
    ));

    // Create app state
    let state = AppState {
        feed_service,
        article_service,
        showcase_service,
        contact_service,
        auth_service,
        config: config.clone(),
    };

    // Rate limiting config: 2 req/sec sustained, burst of 5
    // Uses PeerIpKeyExtractor to get client IP from socket connection
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .expect("Failed to build governor config"),
    );

    // Rate-limited routes (login, contact form)
    let rate_limited_routes = Router::new()
        .route("/auth/login", post(handlers::login))
        .route("/contact", post(handlers::submit_contact))
        .layer(GovernorLayer {
            config: governor_config,
        });

    // Build router
    let app = Router::new()
        // Health check (no auth)
        .route("/health", get(health))
        // Public feed
        .route("/posts", get(handlers::get_posts))
        // Public blog reads
        .route("/blog", get(handlers::list_articles))
        .route("/blog/categories", get(handlers::list_categories))
        .route("/blog/tags", get(handlers::list_tags))
        .route("/blog/:slug", get(handlers::get_article))
        // Public showcase reads
        .route("/projects", get(handlers::list_projects))
        .route("/projects/:id", get(handlers::get_project))
        .route("/certifications", get(handlers::list_certifications))
        // Merge rate-limited routes
        .merge(rate_limited_routes)
        // Admin-protected routes
        .nest(
            "/",
            Router::new()
                // Feed write path
                .route("/posts", post(handlers::create_post))
                // Blog CMS
                .route("/blog", post(handlers::create_article))
                .route("/blog/:slug", put(handlers::update_article))
                .route("/blog/:slug", delete(handlers::delete_article))
                // Showcase management
                .route("/projects", post(handlers::create_project))
                .route("/projects/:id", put(handlers::update_project))
                .route("/projects/:id", delete(handlers::delete_project))
                .route("/certifications", post(handlers::create_certification))
                // Contact inbox
                .route(
                    "/admin/contact-messages",
                    get(handlers::list_contact_messages),
                )
                .route(
                    "/admin/contact-messages/:id",
                    patch(handlers::update_contact_status),
                )
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth::require_admin,
                )),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Server error");
}
