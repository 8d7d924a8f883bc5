//! # Domain Types
//!
//! Receipt and Item payloads as submitted by clients.
//!
//! ## Permissive Intake
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      What "valid receipt" means                         │
//! │                                                                         │
//! │  Layer 1: JSON shape (serde)                                           │
//! │  ├── Body must be a JSON object with string/array fields               │
//! │  └── Missing fields default (empty string / empty array)               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Rule engine                                                  │
//! │  ├── Field CONTENT is never validated up front                         │
//! │  └── A rule that cannot read its field contributes zero                │
//! │                                                                         │
//! │  There is deliberately no layer that rejects "9.x" as a total or       │
//! │  "13:99" as a time — those degrade inside the rules instead.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All monetary fields stay as text here; only the rule engine converts
//! them (exactly) via [`crate::amount::Amount`].

use serde::{Deserialize, Serialize};

// =============================================================================
// Receipt
// =============================================================================

/// A submitted purchase receipt.
///
/// ## Design Notes
/// - Wire names are camelCase (`purchaseDate`, `shortDescription`)
/// - The stored payload is immutable after submission; scoring is a pure
///   function of these fields, so identical payloads always score the same
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Retailer name; only alphanumeric characters earn points
    #[serde(default)]
    pub retailer: String,

    /// Purchase date, expected as `YYYY-MM-DD`
    #[serde(default)]
    pub purchase_date: String,

    /// Purchase time, expected as 24-hour `HH:MM`
    #[serde(default)]
    pub purchase_time: String,

    /// Line items on the receipt
    #[serde(default)]
    pub items: Vec<Item>,

    /// Receipt total as decimal-formatted text (e.g. `"18.74"`)
    #[serde(default)]
    pub total: String,
}

/// A single line item on a receipt.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Item description; trimmed before its length is measured
    #[serde(default)]
    pub short_description: String,

    /// Item price as decimal-formatted text (e.g. `"6.49"`)
    #[serde(default)]
    pub price: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_wire_names() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                {"shortDescription": "Mountain Dew 12PK", "price": "6.49"}
            ],
            "total": "6.49"
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.purchase_time, "13:01");
        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.items[0].short_description, "Mountain Dew 12PK");
        assert_eq!(receipt.items[0].price, "6.49");
        assert_eq!(receipt.total, "6.49");
    }

    #[test]
    fn test_missing_fields_default() {
        let receipt: Receipt = serde_json::from_str(r#"{"retailer": "Target"}"#).unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert!(receipt.purchase_date.is_empty());
        assert!(receipt.purchase_time.is_empty());
        assert!(receipt.items.is_empty());
        assert!(receipt.total.is_empty());
    }

    #[test]
    fn test_serialize_round_trip() {
        let receipt = Receipt {
            retailer: "Walgreens".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "08:13".to_string(),
            items: vec![Item {
                short_description: "Pepsi - 12-oz".to_string(),
                price: "1.25".to_string(),
            }],
            total: "2.65".to_string(),
        };

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["purchaseDate"], "2022-01-02");
        assert_eq!(json["items"][0]["shortDescription"], "Pepsi - 12-oz");
    }
}
