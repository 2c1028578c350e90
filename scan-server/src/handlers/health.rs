//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};

use urlrisk_core::constants::APP_NAME;
use urlrisk_core::logic::model::ModelMetadata;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp: i64,
    model_loaded: bool,
    model: Option<ModelMetadata>,
}

pub async fn root() -> Json<Value> {
    Json(json!({ "message": format!("Welcome to the {} API", APP_NAME) }))
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    let model = state
        .scorer
        .classifier()
        .model()
        .map(|m| m.metadata().clone());

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().timestamp(),
        model_loaded: model.is_some(),
        model,
    })
}
