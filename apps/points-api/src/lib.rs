//! # Tally Points API
//!
//! HTTP service for receipt submission and points scoring.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Points API                                     │
//! │                                                                         │
//! │  ┌────────────────────────┐   ┌────────────────────────────────────┐   │
//! │  │  POST /receipts/process│   │  GET /receipts/{id}/points         │   │
//! │  │                        │   │                                    │   │
//! │  │ • parse JSON body      │   │ • parse id from path               │   │
//! │  │ • store payload        │   │ • look up stored payload           │   │
//! │  │ • return fresh id      │   │ • score via tally-core rules       │   │
//! │  └───────────┬────────────┘   └───────────────┬────────────────────┘   │
//! │              │                                 │                        │
//! │  ┌───────────▼─────────────────────────────────▼────────────────────┐  │
//! │  │                        AppState                                   │  │
//! │  │                                                                   │  │
//! │  │  ReceiptStore: RwLock<HashMap<Uuid, Receipt>>                    │  │
//! │  │  (in-memory only; restart discards all receipts by design)      │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `POINTS_API_HOST` - bind interface (default: 0.0.0.0)
//! - `POINTS_API_PORT` - HTTP port (default: 8080)

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
