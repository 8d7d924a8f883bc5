//! # tally-core: Pure Business Logic for Tally
//!
//! This crate is the **heart** of Tally. It contains all scoring logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Tally Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      HTTP Clients                               │   │
//! │  │    POST /receipts/process ──► GET /receipts/{id}/points        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ axum                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  points-api (handlers + store)                  │   │
//! │  │    submit → store receipt, return id                            │   │
//! │  │    query  → look up receipt, score it, return points            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐      ┌───────────┐      ┌───────────┐          │   │
//! │  │   │   types   │      │  amount   │      │   rules   │          │   │
//! │  │   │  Receipt  │      │  Amount   │      │  score()  │          │   │
//! │  │   │   Item    │      │ (exact)   │      │ breakdown │          │   │
//! │  │   └───────────┘      └───────────┘      └───────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Receipt and Item payload types
//! - [`amount`] - Exact decimal amounts (no floating point!)
//! - [`rules`] - The seven scoring rules and the score function
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: scoring is deterministic - same payload = same score
//! 2. **No I/O**: network, file system, and shared state are FORBIDDEN here
//! 3. **Exact Decimals**: totals and prices never touch binary floats
//! 4. **Graceful Degradation**: a malformed field zeroes its rule, never errors
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::rules::score;
//! use tally_core::types::{Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: "2022-03-20".to_string(),
//!     purchase_time: "14:33".to_string(),
//!     items: vec![
//!         Item { short_description: "Gatorade".to_string(), price: "2.25".to_string() };
//!         4
//!     ],
//!     total: "9.00".to_string(),
//! };
//!
//! assert_eq!(score(&receipt), 109);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod amount;
pub mod rules;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Receipt` instead of
// `use tally_core::types::Receipt`

pub use amount::Amount;
pub use rules::{breakdown, score, Breakdown};
pub use types::{Item, Receipt};
