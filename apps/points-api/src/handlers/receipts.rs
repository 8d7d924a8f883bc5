//! Receipt submission and scoring handlers.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  POST /receipts/process                                                 │
//! │    body JSON ──► Receipt ──► store.insert ──► {"id": "<uuid>"}         │
//! │    bad JSON  ──────────────────────────────► 400 InvalidPayload        │
//! │                                                                         │
//! │  GET /receipts/{id}/points                                              │
//! │    id ──► store.lookup ──► rules::score ──► {"points": N}              │
//! │    unknown or garbled id ──────────────────► 404 ReceiptNotFound       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Scoring happens at query time, but it is a pure function of the stored
//! payload, so repeated queries always return the same number.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use tally_core::{rules, Receipt};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for a successful submission.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    /// The freshly generated receipt identifier
    pub id: Uuid,
}

/// Response body for a successful points query.
#[derive(Debug, Serialize)]
pub struct PointsResponse {
    /// Total points awarded to the receipt
    pub points: u64,
}

/// POST /receipts/process - Submit a receipt for scoring.
///
/// Stores the payload as submitted and returns its identifier. No field
/// content is validated here: a receipt with a garbled total or date is
/// accepted, and the affected rules contribute zero at query time.
///
/// # Response
///
/// - `200 OK` - `{"id": "<uuid>"}`
/// - `400 Bad Request` - body was not valid JSON for the receipt shape
pub async fn process_receipt(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let Json(receipt) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "Rejected malformed receipt submission");
        ApiError::InvalidPayload
    })?;

    let id = state.store.insert(receipt);
    tracing::info!(%id, "Receipt stored");

    Ok(Json(SubmitResponse { id }))
}

/// GET /receipts/{id}/points - Get the points awarded to a receipt.
///
/// An identifier that was never issued — including text that is not a
/// UUID at all — is simply an unknown receipt.
///
/// # Response
///
/// - `200 OK` - `{"points": N}`
/// - `404 Not Found` - no receipt stored under this identifier
pub async fn get_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::ReceiptNotFound)?;
    let receipt = state.store.lookup(&id).ok_or(ApiError::ReceiptNotFound)?;

    let breakdown = rules::breakdown(&receipt);
    let points = breakdown.total();
    tracing::info!(%id, points, ?breakdown, "Receipt scored");

    Ok(Json(PointsResponse { points }))
}
