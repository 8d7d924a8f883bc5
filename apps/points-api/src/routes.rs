//! Route configuration for the Points API.
//!
//! This module defines all HTTP routes and maps them to handlers.
//!
//! # Routes
//!
//! | Method | Path | Handler | Description |
//! |--------|------|---------|-------------|
//! | POST | /receipts/process | `process_receipt` | Submit a receipt, get an id |
//! | GET | /receipts/{id}/points | `get_points` | Get the points for a receipt |
//! | GET | /health | `health_check` | Health check endpoint |

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::handlers::receipts::{get_points, process_receipt};
use crate::state::AppState;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Service status ("healthy")
    pub status: String,
    /// Service version
    pub version: String,
    /// Number of receipts currently stored
    pub receipts_stored: usize,
}

/// GET /health - Health check endpoint.
///
/// Reports service liveness and how many receipts the in-memory store
/// currently holds.
#[allow(clippy::unused_async)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        receipts_stored: state.store.len(),
    };
    (StatusCode::OK, Json(response))
}

/// Creates the axum router with all API routes.
///
/// The router carries the shared [`AppState`] and a `tower-http` trace
/// layer so every request is logged with method, path, and latency.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(get_points))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
