//! Error types for the Points API.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         API Error Mapping                               │
//! │                                                                         │
//! │  Malformed submission body  → 400 InvalidPayload (nothing stored)      │
//! │  Unknown/garbled identifier → 404 ReceiptNotFound (no score computed)  │
//! │                                                                         │
//! │  Malformed SUB-FIELDS inside a valid receipt are NOT errors here:      │
//! │  the rule engine absorbs them as zero contributions.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error becomes a JSON body `{"error": "<message>"}` with the
//! matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Points API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The submission body was not valid JSON matching the receipt shape.
    #[error("Request payload must be in JSON format")]
    InvalidPayload,

    /// No receipt is stored under the requested identifier.
    #[error("Receipt not found")]
    ReceiptNotFound,
}

/// Wire shape of an error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidPayload => StatusCode::BAD_REQUEST,
            ApiError::ReceiptNotFound => StatusCode::NOT_FOUND,
        };

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
