use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod datasets;
mod db;
mod error;
mod images;
mod middleware;
mod models;
mod uploads;

use config::Settings;
use db::Database;

#[derive(Clone)]
pub struct AppState {
    settings: Settings,
    db: Database,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "dataset_explorer_api=debug,tower_http=debug,axum=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;
    info!("Configuration loaded, serving API under {}", settings.api_prefix);

    // Provisioned for parity with deployments; the mock never writes into it
    std::fs::create_dir_all(&settings.upload_dir)?;

    if !settings.kaggle_username.is_empty() && !settings.kaggle_key.is_empty() {
        info!(
            "Kaggle credentials present for {} (unused by mock endpoints)",
            settings.kaggle_username
        );
    }

    let db = db::init_db(&settings.database_url).await?;
    info!("Database initialized");

    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port).parse()?;
    let app = router(AppState { settings, db });

    info!("listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/datasets", datasets::routes())
        .nest("/images", images::routes())
        .nest("/upload", uploads::routes());

    Router::new()
        .route("/health", get(health))
        .nest(&state.settings.api_prefix, api)
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(&state.settings.cors_origins))
        .with_state(state)
}

/// GET /health
/// Liveness plus a database connectivity probe
async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, StatusCode> {
    if let Err(e) = sqlx::query("SELECT 1").fetch_one(state.db.inner()).await {
        tracing::error!("Database health check failed: {}", e);
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    timestamp: String,
}
