//! # Application State
//!
//! Shared state handed to every request handler via axum's `State`
//! extractor. Constructed once at startup; there is deliberately no
//! ambient global state anywhere in the service.

pub mod receipts;

use std::sync::Arc;

use crate::config::ApiConfig;
use receipts::ReceiptStore;

/// Shared application state.
#[derive(Debug)]
pub struct AppState {
    /// In-memory receipt store
    pub store: ReceiptStore,

    /// Service configuration
    pub config: ApiConfig,
}

impl AppState {
    /// Creates fresh application state with an empty store.
    pub fn new(config: ApiConfig) -> Arc<Self> {
        Arc::new(AppState {
            store: ReceiptStore::new(),
            config,
        })
    }
}
