mod handlers;
mod routes;

use crate::config::Config;
use crate::db::Database;
use crate::storage::MediaStore;
use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Shared state handed to every handler.
pub struct AppState {
    pub db: Database,
    pub store: MediaStore,
    pub max_file_size: usize,
}

/// Start the API server
pub async fn start_api_server(config: &Config, db: Database) -> Result<()> {
    let state = Arc::new(AppState {
        db,
        store: MediaStore::new(config.media.storage_root.clone()),
        max_file_size: config.media.max_file_size,
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // The request body cap sits above the media size limit so oversize
    // uploads reach the service and fail with the FileError the clients
    // expect, not a bare 413.
    let body_limit = config.media.max_file_size + 1024 * 1024;

    let app = Router::new()
        .route("/health", get(handlers::health::health_check))
        // Tweet routes
        .route(
            "/api/tweets",
            get(handlers::tweets::list_tweets).post(handlers::tweets::add_tweet),
        )
        .route("/api/tweets/:tweet_id", delete(handlers::tweets::delete_tweet))
        .route(
            "/api/tweets/:tweet_id/likes",
            post(handlers::likes::like_tweet).delete(handlers::likes::dislike_tweet),
        )
        // Media routes
        .route("/api/medias", post(handlers::medias::add_media))
        // User and follow routes
        .route("/api/users/me", get(handlers::users::get_profile_my))
        .route("/api/users/:user_id", get(handlers::users::get_profile_by_id))
        .route(
            "/api/users/:user_id/follow",
            post(handlers::follows::follow_user).delete(handlers::follows::unfollow_user),
        )
        // Add state and middleware
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = format!("{}:{}", config.server.host, config.server.port).parse::<SocketAddr>()?;

    info!("Starting API server on {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }
}
