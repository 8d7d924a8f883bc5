//! # Scoring Rules
//!
//! The points rule engine: a pure function from a receipt to an integer
//! score, computed as the sum of seven independent rules.
//!
//! ## Rule Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Scoring Rules                                  │
//! │                                                                         │
//! │  Rule  Condition                                        Contribution    │
//! │  ────  ─────────────────────────────────────────────    ────────────    │
//! │  R1    alphanumeric characters in retailer name         1 point each    │
//! │  R2    total is a round dollar amount                   +50             │
//! │  R3    total is a multiple of 0.25                      +25             │
//! │  R4    every two items on the receipt                   +5 per pair     │
//! │  R5    trimmed description length divisible by 3        ⌈price × 0.2⌉   │
//! │  R6    purchase day-of-month is odd                     +6              │
//! │  R7    purchase time in [14:00, 16:00)                  +10             │
//! │                                                                         │
//! │  Rules never interact and never fail: a field a rule cannot read       │
//! │  contributes zero instead of aborting the score.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Zero-Substitution Quirk
//! When `total` fails to parse it is replaced with zero BEFORE R2/R3 run,
//! so both rules hold trivially (+75) for a missing or garbled total. This
//! is inherited behavior, preserved on purpose for score compatibility —
//! do not "fix" it by skipping R2/R3 on parse failure.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::amount::Amount;
use crate::types::{Item, Receipt};

// =============================================================================
// Rule Constants
// =============================================================================

/// R2: awarded when the total is a whole dollar amount.
pub const ROUND_DOLLAR_POINTS: u64 = 50;

/// R3: awarded when the total is an exact multiple of 0.25.
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;

/// R4: awarded per pair of items (integer division by 2).
pub const POINTS_PER_ITEM_PAIR: u64 = 5;

/// R6: awarded when the purchase day-of-month is odd.
pub const ODD_DAY_POINTS: u64 = 6;

/// R7: awarded when the purchase time falls in [14:00, 16:00).
pub const AFTERNOON_WINDOW_POINTS: u64 = 10;

/// Expected `purchaseDate` format.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Expected `purchaseTime` format (24-hour).
const TIME_FORMAT: &str = "%H:%M";

// =============================================================================
// Public Contract
// =============================================================================

/// Scores a receipt.
///
/// Pure and total: identical payloads always yield identical scores, and
/// no payload — however malformed its fields — makes this fail.
///
/// ## Example
/// ```rust
/// use tally_core::rules::score;
/// use tally_core::types::Receipt;
///
/// let receipt = Receipt {
///     retailer: "Target".to_string(),
///     ..Default::default()
/// };
/// // 6 for the retailer, 75 for the zero-substituted empty total
/// assert_eq!(score(&receipt), 81);
/// ```
pub fn score(receipt: &Receipt) -> u64 {
    breakdown(receipt).total()
}

/// Scores a receipt, keeping per-rule contributions.
///
/// Used by the API layer for structured logging and by tests to pin each
/// rule down independently. `breakdown(r).total() == score(r)` always.
pub fn breakdown(receipt: &Receipt) -> Breakdown {
    let total = Amount::parse_lossy(&receipt.total);

    Breakdown {
        retailer_name: retailer_name_points(&receipt.retailer),
        round_dollar: round_dollar_points(total),
        quarter_multiple: quarter_multiple_points(total),
        item_pairs: item_pair_points(&receipt.items),
        description_length: description_length_points(&receipt.items),
        odd_day: odd_day_points(&receipt.purchase_date),
        afternoon_window: afternoon_window_points(&receipt.purchase_time),
    }
}

/// Per-rule point contributions for one receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakdown {
    /// R1: one point per alphanumeric retailer character
    pub retailer_name: u64,
    /// R2: round dollar total
    pub round_dollar: u64,
    /// R3: total is a multiple of 0.25
    pub quarter_multiple: u64,
    /// R4: five points per pair of items
    pub item_pairs: u64,
    /// R5: description-length price bonuses
    pub description_length: u64,
    /// R6: odd purchase day
    pub odd_day: u64,
    /// R7: afternoon purchase window
    pub afternoon_window: u64,
}

impl Breakdown {
    /// Sums all rule contributions.
    pub fn total(&self) -> u64 {
        self.retailer_name
            + self.round_dollar
            + self.quarter_multiple
            + self.item_pairs
            + self.description_length
            + self.odd_day
            + self.afternoon_window
    }
}

// =============================================================================
// Individual Rules
// =============================================================================
// Each rule is a small pure function over already-parsed-or-defaulted
// values. Rules degrade to zero instead of erroring; none of them can
// panic on any input.

/// R1: one point for every alphanumeric character in the retailer name.
///
/// Counts each occurrence; punctuation and whitespace earn nothing.
/// `"M&M Corner Market"` → 14.
fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64
}

/// R2: 50 points if the total is a round dollar amount with no cents.
fn round_dollar_points(total: Amount) -> u64 {
    if total.is_round_dollar() {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

/// R3: 25 points if the total is an exact multiple of 0.25.
fn quarter_multiple_points(total: Amount) -> u64 {
    if total.is_quarter_multiple() {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

/// R4: 5 points for every two items on the receipt.
///
/// Integer division: 5 items → 2 pairs → 10 points.
fn item_pair_points(items: &[Item]) -> u64 {
    (items.len() as u64 / 2) * POINTS_PER_ITEM_PAIR
}

/// R5: description-length price bonus.
///
/// For each item whose trimmed description length is divisible by 3,
/// award `⌈price × 0.2⌉`. An empty trimmed description has length 0,
/// which IS divisible by 3 — matching inherited behavior, such an item
/// earns `⌈price × 0.2⌉` as well.
fn description_length_points(items: &[Item]) -> u64 {
    items
        .iter()
        .filter(|item| item.short_description.trim().chars().count() % 3 == 0)
        .map(|item| Amount::parse_lossy(&item.price).fifth_rounded_up())
        .sum()
}

/// R6: 6 points if the day in the purchase date is odd.
///
/// The text must parse as a real calendar date in `YYYY-MM-DD` form;
/// `2022-02-30` or `01/02/2022` contribute zero, not an error.
fn odd_day_points(purchase_date: &str) -> u64 {
    match NaiveDate::parse_from_str(purchase_date, DATE_FORMAT) {
        Ok(date) if date.day() % 2 == 1 => ODD_DAY_POINTS,
        _ => 0,
    }
}

/// R7: 10 points if the purchase time falls in the half-open window
/// [14:00, 16:00).
///
/// The text must parse as a 24-hour `HH:MM` time; `14:00` qualifies,
/// `16:00` does not, and unparseable text contributes zero.
fn afternoon_window_points(purchase_time: &str) -> u64 {
    match NaiveTime::parse_from_str(purchase_time, TIME_FORMAT) {
        Ok(time) if (14..16).contains(&time.hour()) => AFTERNOON_WINDOW_POINTS,
        _ => 0,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(description: &str, price: &str) -> Item {
        Item {
            short_description: description.to_string(),
            price: price.to_string(),
        }
    }

    fn receipt_with_total(total: &str) -> Receipt {
        Receipt {
            total: total.to_string(),
            ..Default::default()
        }
    }

    // -- R1 ------------------------------------------------------------------

    #[test]
    fn test_retailer_all_alphanumeric() {
        assert_eq!(retailer_name_points("Target"), 6);
    }

    #[test]
    fn test_retailer_punctuation_ignored() {
        // M, M, and "CornerMarket" count; '&' and spaces do not
        assert_eq!(retailer_name_points("M&M Corner Market"), 14);
    }

    #[test]
    fn test_retailer_empty() {
        assert_eq!(retailer_name_points(""), 0);
    }

    // -- R2 / R3 -------------------------------------------------------------

    #[test]
    fn test_round_dollar_and_quarter_multiple() {
        let b = breakdown(&receipt_with_total("9.00"));
        assert_eq!(b.round_dollar, 50);
        assert_eq!(b.quarter_multiple, 25);
    }

    #[test]
    fn test_non_round_non_quarter_total() {
        let b = breakdown(&receipt_with_total("35.35"));
        assert_eq!(b.round_dollar, 0);
        assert_eq!(b.quarter_multiple, 0);
    }

    #[test]
    fn test_quarter_multiple_without_round_dollar() {
        let b = breakdown(&receipt_with_total("18.75"));
        assert_eq!(b.round_dollar, 0);
        assert_eq!(b.quarter_multiple, 25);
    }

    /// The zero-substitution quirk: an unparseable total becomes zero,
    /// and zero satisfies both R2 and R3. Inherited, preserved behavior.
    #[test]
    fn test_unparseable_total_scores_as_zero_total() {
        for bad in ["", "abc", "$9.00"] {
            let b = breakdown(&receipt_with_total(bad));
            assert_eq!(b.round_dollar, 50, "total {bad:?}");
            assert_eq!(b.quarter_multiple, 25, "total {bad:?}");
        }
    }

    // -- R4 ------------------------------------------------------------------

    #[test]
    fn test_item_pairs_integer_division() {
        assert_eq!(item_pair_points(&[]), 0);
        assert_eq!(item_pair_points(&vec![item("a", "1.00"); 1]), 0);
        assert_eq!(item_pair_points(&vec![item("a", "1.00"); 2]), 5);
        assert_eq!(item_pair_points(&vec![item("a", "1.00"); 4]), 10);
        assert_eq!(item_pair_points(&vec![item("a", "1.00"); 5]), 10);
    }

    // -- R5 ------------------------------------------------------------------

    #[test]
    fn test_description_length_not_divisible() {
        // "Emulator" and "Gatorade" are 8 characters → no bonus
        let items = [item("Emulator", "12.25"), item("Gatorade", "2.25")];
        assert_eq!(description_length_points(&items), 0);
    }

    #[test]
    fn test_description_length_divisible() {
        // "Tuxedo" is 6 characters; ⌈10.00 × 0.2⌉ = 2
        let items = [item("Tuxedo", "10.00")];
        assert_eq!(description_length_points(&items), 2);
    }

    #[test]
    fn test_description_trimmed_before_measuring() {
        // "   Klarbrunn 12-PK 12 FL OZ  " trims to 24 characters;
        // ⌈12.00 × 0.2⌉ = ⌈2.4⌉ = 3
        let items = [item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00")];
        assert_eq!(description_length_points(&items), 3);
    }

    #[test]
    fn test_description_bonus_sums_across_items() {
        let items = [
            item("Tuxedo", "10.00"),                        // 2
            item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"), // 3
            item("Emulator", "99.99"),                      // 0 (len 8)
        ];
        assert_eq!(description_length_points(&items), 5);
    }

    #[test]
    fn test_description_bonus_bad_price_is_zero() {
        let items = [item("Tuxedo", "free")];
        assert_eq!(description_length_points(&items), 0);
    }

    // -- R6 ------------------------------------------------------------------

    #[test]
    fn test_odd_day() {
        assert_eq!(odd_day_points("2022-01-01"), 6);
        assert_eq!(odd_day_points("2022-03-31"), 6);
        assert_eq!(odd_day_points("2022-03-20"), 0);
    }

    #[test]
    fn test_bad_date_contributes_zero() {
        assert_eq!(odd_day_points(""), 0);
        assert_eq!(odd_day_points("not a date"), 0);
        assert_eq!(odd_day_points("01/02/2022"), 0); // wrong format
        assert_eq!(odd_day_points("2022-02-30"), 0); // not a real date
        assert_eq!(odd_day_points("2022-01-01T00:00:00"), 0); // trailing text
    }

    // -- R7 ------------------------------------------------------------------

    #[test]
    fn test_afternoon_window() {
        assert_eq!(afternoon_window_points("14:00"), 10); // inclusive start
        assert_eq!(afternoon_window_points("14:33"), 10);
        assert_eq!(afternoon_window_points("15:59"), 10);
        assert_eq!(afternoon_window_points("16:00"), 0); // exclusive end
        assert_eq!(afternoon_window_points("13:59"), 0);
    }

    #[test]
    fn test_bad_time_contributes_zero() {
        assert_eq!(afternoon_window_points(""), 0);
        assert_eq!(afternoon_window_points("2:00pm"), 0);
        assert_eq!(afternoon_window_points("25:00"), 0);
        assert_eq!(afternoon_window_points("14:60"), 0);
        assert_eq!(afternoon_window_points("14:33:00"), 0); // trailing text
    }

    // -- Whole-receipt scenarios ---------------------------------------------

    #[test]
    fn test_score_simple_receipt() {
        let receipt = Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![
                item("Mountain Dew 12PK", "6.49"),
                item("Emulator", "12.25"),
            ],
            total: "18.74".to_string(),
        };

        // retailer 6 + one item pair 5 + odd day 6, everything else zero
        let b = breakdown(&receipt);
        assert_eq!(b.retailer_name, 6);
        assert_eq!(b.round_dollar, 0);
        assert_eq!(b.quarter_multiple, 0);
        assert_eq!(b.item_pairs, 5);
        assert_eq!(b.description_length, 0);
        assert_eq!(b.odd_day, 6);
        assert_eq!(b.afternoon_window, 0);
        assert_eq!(score(&receipt), 17);
    }

    #[test]
    fn test_score_corner_market_receipt() {
        let receipt = Receipt {
            retailer: "M&M Corner Market".to_string(),
            purchase_date: "2022-03-20".to_string(),
            purchase_time: "14:33".to_string(),
            items: vec![item("Gatorade", "2.25"); 4],
            total: "9.00".to_string(),
        };

        // 14 retailer + 50 round dollar + 25 quarter multiple
        // + 10 two pairs + 10 afternoon window
        assert_eq!(score(&receipt), 109);
    }

    #[test]
    fn test_score_is_deterministic() {
        let receipt = Receipt {
            retailer: "Walgreens".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "08:13".to_string(),
            items: vec![item("Pepsi - 12-oz", "1.25")],
            total: "2.65".to_string(),
        };
        assert_eq!(score(&receipt), score(&receipt));
    }

    #[test]
    fn test_empty_receipt_never_fails() {
        // Everything missing: retailer 0, zero-substituted total 75,
        // no items, no date, no time
        assert_eq!(score(&Receipt::default()), 75);
    }

    #[test]
    fn test_breakdown_total_matches_score() {
        let receipt = Receipt {
            retailer: "M&M Corner Market".to_string(),
            purchase_date: "2022-03-20".to_string(),
            purchase_time: "14:33".to_string(),
            items: vec![item("Gatorade", "2.25"); 4],
            total: "9.00".to_string(),
        };
        assert_eq!(breakdown(&receipt).total(), score(&receipt));
    }
}
