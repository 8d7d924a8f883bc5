//! HTTP request handlers.
//!
//! One module per resource. Handlers stay thin: extract, delegate to the
//! store and the rule engine, shape the response.

pub mod receipts;
