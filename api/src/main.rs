//! Catalog API Server
//!
//! Vehicle catalog service: validates and stores vehicle records and keeps the
//! showcase (listing) service informed of changes.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post, put},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;



use adapters::{ensure_schema, PostgresVehicleRepository, ShowcaseClientImpl};
use app::VehicleService;
use config::Config;
use domain::ports::{ShowcaseClient, VehicleRepository};

/// Application state shared across all handlers
///
/// Generic over the adapters so the router can be exercised with in-memory fakes.
pub struct AppState<VR, SC>
where
    VR: VehicleRepository,
    SC: ShowcaseClient,
{
    pub vehicle_service: Arc<VehicleService<VR, SC>>,
}

impl<VR, SC> Clone for AppState<VR, SC>
where
    VR: VehicleRepository,
    SC: ShowcaseClient,
{
    fn clone(&self) -> Self {
        Self {
            vehicle_service: self.vehicle_service.clone(),
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

/// Build the HTTP router for the given state
pub fn build_router<VR, SC>(state: AppState<VR, SC>) -> Router
where
    VR: VehicleRepository + 'static,
    SC: ShowcaseClient + 'static,
{
    Router::new()
        // Health check
        .route("/health", get(health))
        // Vehicle catalog
        .route("/vehicles/add", post(handlers::create_vehicle::<VR, SC>))
        .route("/vehicles/:id", put(handlers::update_vehicle::<VR, SC>))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,catalog_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting catalog API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    ensure_schema(&db)
        .await
        .context("Failed to prepare database schema")?;
    tracing::info!("Database connected");

    // Create adapters
    let vehicle_repo = Arc::new(PostgresVehicleRepository::new(db));
    let showcase_client = Arc::new(ShowcaseClientImpl::new(config.showcase_url.clone()));
    tracing::info!(showcase_url = %config.showcase_url, "Showcase notifications enabled");

    // Create application services
    let vehicle_service = Arc::new(VehicleService::new(vehicle_repo, showcase_client));

    let app = build_router(AppState { vehicle_service });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
