//! Terramod HTTP API Server
//!
//! Terraform-registry-protocol read endpoints for module search, listing,
//! version enumeration, and latest-version resolution.

use axum::{Router, response::Json, routing::get};
use serde_json::{Value, json};
use std::{net::SocketAddr, sync::Arc};
use terramod_registry::{MemoryStore, ModuleStore};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod config;
mod error;
mod models;
mod pagelink;
mod routes;

use config::ServerConfig;
use error::Result;

/// Main application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ModuleStore>,
    pub config: ServerConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "terramod_server=debug,tower_http=debug".to_string()),
        )
        .init();

    // Load configuration
    let config = ServerConfig::from_env()?;
    info!(
        "Starting terramod server on {}:{}",
        config.host, config.port
    );

    // Module records live in memory until a persistent backend lands
    // behind the same trait.
    let store: Arc<dyn ModuleStore> = Arc::new(MemoryStore::new());

    // Create application state
    let state = AppState { store, config: config.clone() };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the main application router
fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Registry protocol routes.
        // Mounted with the trailing slash so the protocol's `GET /v1/modules/`
        // list endpoint matches the nested root route under axum 0.8's nesting
        // semantics.
        .nest("/v1/modules/", routes::modules::router())
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> Result<Json<Value>> {
    Ok(Json(json!({
        "status": "healthy",
        "service": "terramod-server",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": time::OffsetDateTime::now_utc()
    })))
}
