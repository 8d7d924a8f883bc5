//! # Receipt Store
//!
//! In-memory mapping from generated identifier to submitted receipt.
//!
//! ## Thread Safety
//! The map is wrapped in `RwLock` because:
//! 1. Submissions and lookups run on concurrent request tasks
//! 2. A lookup must observe a fully-inserted record or nothing
//! 3. Lookups dominate, and readers can proceed in parallel
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Store Operations                            │
//! │                                                                         │
//! │  HTTP Request              Handler                 Store Change         │
//! │  ────────────              ───────                 ────────────         │
//! │                                                                         │
//! │  POST /receipts/process ─► insert(receipt) ─────►  map[new_id] = r     │
//! │                                                                         │
//! │  GET /receipts/{id}/points ─► lookup(&id) ──────►  (read only)          │
//! │                                                                         │
//! │  No update. No delete. Records live for the process lifetime;          │
//! │  restart discards everything by design.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use tally_core::Receipt;
use uuid::Uuid;

/// The in-memory receipt store.
///
/// ## Invariants
/// - Identifiers are unique for the life of the process (UUID v4)
/// - A stored payload is never mutated after insertion
/// - No entry is ever removed
#[derive(Debug, Default)]
pub struct ReceiptStore {
    receipts: RwLock<HashMap<Uuid, Receipt>>,
}

impl ReceiptStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        ReceiptStore {
            receipts: RwLock::new(HashMap::new()),
        }
    }

    /// Stores a receipt under a freshly generated identifier.
    ///
    /// ## Why UUID v4?
    /// Unique without coordination and safe to embed in a URL path
    /// segment, which is exactly how clients send it back.
    pub fn insert(&self, receipt: Receipt) -> Uuid {
        let id = Uuid::new_v4();
        let mut receipts = self.receipts.write().expect("receipt store lock poisoned");
        receipts.insert(id, receipt);
        id
    }

    /// Looks up a stored receipt by identifier.
    ///
    /// Returns a clone of the payload so the lock is held only for the
    /// duration of the map access, never across scoring.
    pub fn lookup(&self, id: &Uuid) -> Option<Receipt> {
        let receipts = self.receipts.read().expect("receipt store lock poisoned");
        receipts.get(id).cloned()
    }

    /// Number of stored receipts (reported by the health endpoint).
    pub fn len(&self) -> usize {
        let receipts = self.receipts.read().expect("receipt store lock poisoned");
        receipts.len()
    }

    /// Checks whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
