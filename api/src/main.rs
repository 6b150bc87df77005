//! Users API Server
//!
//! A small CRUD service over a single user resource.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{ensure_schema, InMemoryUserRepository, PostgresUserRepository};
use app::UserService;
use config::Config;
use domain::ports::UserRepository;

/// Application state shared across all handlers
pub struct AppState<R: UserRepository> {
    pub user_service: Arc<UserService<R>>,
}

impl<R: UserRepository> AppState<R> {
    pub fn new(users: Arc<R>) -> Self {
        Self {
            user_service: Arc::new(UserService::new(users)),
        }
    }
}

// Derived Clone would require `R: Clone`
impl<R: UserRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            user_service: self.user_service.clone(),
        }
    }
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

/// Build the router over any user repository
pub fn router<R: UserRepository + 'static>(state: AppState<R>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // User resource
        .route(
            "/users",
            get(handlers::list_users::<R>).post(handlers::create_user::<R>),
        )
        .route(
            "/users/:id",
            get(handlers::get_user::<R>).delete(handlers::delete_user::<R>),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,users_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Users API...");

    // Load configuration
    let config = Config::from_env();

    // Pick the storage adapter
    let app = match &config.database_url {
        Some(url) => {
            tracing::info!("Connecting to database...");
            let db = Database::connect(url)
                .await
                .context("Failed to connect to database")?;
            ensure_schema(&db)
                .await
                .context("Failed to create users table")?;
            tracing::info!("Database connected");

            router(AppState::new(Arc::new(PostgresUserRepository::new(db))))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, users will be kept in memory");
            router(AppState::new(Arc::new(InMemoryUserRepository::new())))
        }
    };

    // Start server
    let addr = config.socket_addr();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
