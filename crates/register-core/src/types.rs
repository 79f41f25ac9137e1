//! # Domain Types
//!
//! Value types produced and consumed by the [`Register`](crate::Register).
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ DiscountPercent │   │   Transaction   │   │ DiscountOutcome │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  u8, 0..=100    │   │  title          │   │  Applied{total} │       │
//! │  │  20 = 20% off   │   │  amount (p × q) │   │  NoDiscount     │       │
//! │  └─────────────────┘   │  quantity       │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │ RegisterSnapshot: id, opened_at, discount, total, items, last   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{ValidationError, ValidationResult};
use crate::money::format_total;
use crate::validation::validate_discount_percent;

// =============================================================================
// Discount Percent
// =============================================================================

/// A whole-number percentage discount, always within `0..=100`.
///
/// Zero means "no discount configured".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
pub struct DiscountPercent(u8);

impl DiscountPercent {
    /// Creates a discount, rejecting anything above 100%.
    ///
    /// ## Example
    /// ```rust
    /// use register_core::DiscountPercent;
    ///
    /// assert_eq!(DiscountPercent::new(20).unwrap().percent(), 20);
    /// assert!(DiscountPercent::new(101).is_err());
    /// ```
    pub fn new(pct: u8) -> ValidationResult<Self> {
        validate_discount_percent(i64::from(pct))?;
        Ok(DiscountPercent(pct))
    }

    /// No discount.
    #[inline]
    pub const fn none() -> Self {
        DiscountPercent(0)
    }

    /// Returns the discount in percent.
    #[inline]
    pub const fn percent(&self) -> u8 {
        self.0
    }

    /// Returns the share of the total the customer still pays, in percent.
    #[inline]
    pub const fn remaining_percent(&self) -> u8 {
        100 - self.0
    }

    /// Checks if there is nothing to discount.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountPercent {
    fn default() -> Self {
        DiscountPercent::none()
    }
}

impl TryFrom<u8> for DiscountPercent {
    type Error = ValidationError;

    fn try_from(pct: u8) -> ValidationResult<Self> {
        DiscountPercent::new(pct)
    }
}

impl fmt::Display for DiscountPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// One `add_item` call: what was rung up, how many, and for how much.
///
/// `amount` is always `price × quantity` as computed at the time of the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Item title as appended to the ledger.
    pub title: String,
    /// Price × quantity.
    pub amount: f64,
    /// Units rung up. May be zero or negative; nothing is appended then.
    pub quantity: i64,
}

// =============================================================================
// Discount Outcome
// =============================================================================

/// What happened when a discount was requested.
///
/// Replaces printing: the caller decides where the message goes.
///
/// ## Messages
/// ```text
/// Applied { total: 80.0 }    → "After the discount, the total comes to $80."
/// Applied { total: 89.991 }  → "After the discount, the total comes to $89.99."
/// NoDiscount                 → "There is no discount to apply."
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DiscountOutcome {
    /// The discount was applied; `total` is the new running total.
    Applied { total: f64 },
    /// The register has a 0% discount; the total is unchanged.
    NoDiscount,
}

impl DiscountOutcome {
    /// Returns the user-facing message for this outcome.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Checks whether the total was changed.
    pub fn is_applied(&self) -> bool {
        matches!(self, DiscountOutcome::Applied { .. })
    }
}

impl fmt::Display for DiscountOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscountOutcome::Applied { total } => write!(
                f,
                "After the discount, the total comes to ${}.",
                format_total(*total)
            ),
            DiscountOutcome::NoDiscount => f.write_str("There is no discount to apply."),
        }
    }
}

// =============================================================================
// Register Snapshot
// =============================================================================

/// A read-only copy of a register's state, for logging and API responses.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RegisterSnapshot {
    /// Register session id (UUID v4).
    pub id: String,
    /// When the register was opened.
    #[ts(as = "String")]
    pub opened_at: DateTime<Utc>,
    pub discount_percent: u8,
    pub total: f64,
    pub items: Vec<String>,
    /// The transaction a void would reverse, if any.
    pub last_transaction: Option<Transaction>,
}

// =============================================================================
// Unit Tests
// =============================================================================
