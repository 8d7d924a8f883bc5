//! # Amount Module
//!
//! Provides the `Amount` type for handling monetary values exactly.
//!
//! ## Why Exact Decimal?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Scoring rules ask exact questions:                                     │
//! │    "is 35.35 a multiple of 0.25?"   → needs an exact remainder          │
//! │    "does 2.00 ceiling to 2 or 3?"   → needs an exact product            │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    Base-10 representation; 35.35 % 0.25 and 10.00 × 0.2 are exact      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::amount::Amount;
//!
//! // Strict parse when the caller wants to know about failure
//! assert!(Amount::parse("9.00").is_some());
//! assert!(Amount::parse("nine dollars").is_none());
//!
//! // Lossy parse: bad text collapses to zero, never an error
//! assert!(Amount::parse_lossy("garbage").is_zero());
//! ```

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

// =============================================================================
// Amount Type
// =============================================================================

/// A monetary value carried by a receipt (`total` or an item `price`).
///
/// ## Design Decisions
/// - **Newtype over `Decimal`**: every monetary value in the rule engine
///   flows through this type; raw floats cannot sneak in.
/// - **Lossy construction**: the wire format is free text, and the scoring
///   contract says unparseable text behaves as zero rather than failing
///   the whole score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    /// Parses decimal-formatted text into an exact amount.
    ///
    /// Surrounding whitespace is tolerated; anything that is not a plain
    /// decimal number (empty text, currency symbols, words) is `None`.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::amount::Amount;
    ///
    /// assert!(Amount::parse("18.74").is_some());
    /// assert!(Amount::parse(" 6.49 ").is_some());
    /// assert!(Amount::parse("$6.49").is_none());
    /// assert!(Amount::parse("").is_none());
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        Decimal::from_str(text.trim()).ok().map(Amount)
    }

    /// Parses decimal-formatted text, substituting zero on failure.
    ///
    /// ## The Zero-Substitution Quirk
    /// A missing or malformed `total` becomes `0.00`, and the round-dollar
    /// and quarter-multiple rules then evaluate against zero (both hold).
    /// This is inherited behavior the scoring contract preserves on
    /// purpose; see the rule engine documentation.
    #[inline]
    pub fn parse_lossy(text: &str) -> Self {
        Self::parse(text).unwrap_or_else(Self::zero)
    }

    /// Returns the zero amount.
    #[inline]
    pub const fn zero() -> Self {
        Amount(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the amount is a whole number of dollars.
    ///
    /// The test is on the value, not the text: `"9"`, `"9.0"` and `"9.00"`
    /// are all round dollar amounts.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::amount::Amount;
    ///
    /// assert!(Amount::parse_lossy("9.00").is_round_dollar());
    /// assert!(!Amount::parse_lossy("9.01").is_round_dollar());
    /// ```
    #[inline]
    pub fn is_round_dollar(&self) -> bool {
        self.0.fract().is_zero()
    }

    /// Checks if the amount is an exact multiple of 0.25.
    ///
    /// Exactness matters: `35.35 % 0.25` must come out as a true nonzero
    /// remainder, which binary floats cannot guarantee.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::amount::Amount;
    ///
    /// assert!(Amount::parse_lossy("9.25").is_quarter_multiple());
    /// assert!(!Amount::parse_lossy("35.35").is_quarter_multiple());
    /// ```
    #[inline]
    pub fn is_quarter_multiple(&self) -> bool {
        (self.0 % QUARTER).is_zero()
    }

    /// Multiplies by exactly 0.2 and rounds up to the nearest whole number.
    ///
    /// ## Exact Ceiling Semantics
    /// ```text
    /// 10.00 × 0.2 = 2.00  → 2   (exact integer, no spurious bump)
    ///  6.49 × 0.2 = 1.298 → 2
    ///  0.00 × 0.2 = 0.00  → 0
    /// ```
    ///
    /// A negative price would produce a negative ceiling; rule
    /// contributions are non-negative, so the result clamps to zero.
    pub fn fifth_rounded_up(&self) -> u64 {
        (self.0 * FIFTH).ceil().to_u64().unwrap_or(0)
    }
}

/// 0.25 — the quarter-multiple divisor.
const QUARTER: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// 0.2 — the description-length bonus multiplier.
const FIFTH: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display keeps the exact decimal representation (for log fields).
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Default amount is zero.
impl Default for Amount {
    fn default() -> Self {
        Amount::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
