//! URL Risk Scanner - HTTP Server
//!
//! Exposes the scoring pipeline to the web UI and other clients.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    URL RISK SERVER                       │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌──────────────────────────────────┐   │
//! │  │  API      │   │  RiskScorer (urlrisk-core)       │   │
//! │  │  (Axum)   │──▶│  simple · advanced · classifier  │   │
//! │  └───────────┘   └────────────────┬─────────────────┘   │
//! │                                   ▼                      │
//! │                          ┌────────────────┐              │
//! │                          │ model artifact │              │
//! │                          └────────────────┘              │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;
mod models;

#[cfg(test)]
mod tests;

use std::net::SocketAddr;

use anyhow::Context;
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use urlrisk_core::{load_model, ClassifierAdapter, RiskScorer};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "urlrisk_server=debug,urlrisk_core=info,tower_http=debug".into());
    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("URL Risk Server starting ({})", config.environment);

    // Model is loaded once; scoring continues without it
    let model = match load_model(&config.model_path) {
        Ok(model) => {
            tracing::info!("Loaded model {} from {}", model.metadata().name, config.model_path.display());
            Some(model)
        }
        Err(e) => {
            tracing::warn!("Model unavailable ({}), classifier results will be degraded", e);
            None
        }
    };

    let state = AppState {
        scorer: RiskScorer::new(ClassifierAdapter::new(model)),
        config: config.clone(),
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub scorer: RiskScorer,
    pub config: config::Config,
}

fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    match HeaderValue::from_str(origin) {
        Ok(origin) => layer.allow_origin(origin),
        Err(_) => {
            tracing::warn!("Invalid CORS origin {:?}, allowing any", origin);
            layer.allow_origin(Any)
        }
    }
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origin);

    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::check))
        // Web client posts to the trailing-slash form
        .route("/scan/url", post(handlers::scan::scan_url))
        .route("/scan/url/", post(handlers::scan::scan_url))
        .route("/scan/url/batch", post(handlers::scan::scan_url_batch))
        .route("/scan/email", post(handlers::scan::scan_email))
        .route("/scan/email/", post(handlers::scan::scan_email))
        .route("/scan/file", post(handlers::scan::scan_file))
        .route("/scan/file/", post(handlers::scan::scan_file))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
