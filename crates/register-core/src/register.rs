//! # Register
//!
//! The register owns the running total, the item ledger and a single-slot
//! undo record.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Register Operations                                  │
//! │                                                                         │
//! │  Operation                  total               items / last            │
//! │  ─────────                  ─────               ────────────            │
//! │                                                                         │
//! │  add_item(t, p, q) ───────► += p × q ─────────► push t, q times        │
//! │                                                 last = {t, p×q, q}      │
//! │                                                                         │
//! │  apply_discount() ────────► × (100 - d) / 100   (unchanged)            │
//! │                             (compounds on repeat)                       │
//! │                                                                         │
//! │  void_last_transaction() ─► -= last.amount ───► pop q × t from the end │
//! │                             snap |x| < 1e-9     last = None             │
//! │                                                                         │
//! │  Only ONE transaction back can be voided. A second void is a no-op.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::CoreResult;
use crate::money::{discounted_total, snap_to_zero};
use crate::types::{DiscountOutcome, DiscountPercent, RegisterSnapshot, Transaction};
use crate::validation::{validate_price, validate_quantity, validate_title};

/// A point-of-sale register.
///
/// ## Invariants
/// - `items.len()` is the sum of quantities rung up minus units voided
/// - `last_transaction` holds at most one record; every add overwrites it
/// - after a void, `total` is never within `1e-9` of zero without being `0.0`
///
/// Not `Clone`: every register is its own session with its own id. Share one
/// through `RegisterState` instead.
#[derive(Debug)]
pub struct Register {
    id: String,
    opened_at: DateTime<Utc>,
    discount: DiscountPercent,
    total: f64,
    items: Vec<String>,
    last_transaction: Option<Transaction>,
}

impl Register {
    /// Opens a register with a fixed discount.
    pub fn new(discount: DiscountPercent) -> Self {
        Register {
            id: Uuid::new_v4().to_string(),
            opened_at: Utc::now(),
            discount,
            total: 0.0,
            items: Vec::new(),
            last_transaction: None,
        }
    }

    /// Opens a register from a raw percentage.
    ///
    /// ## Example
    /// ```rust
    /// use register_core::Register;
    ///
    /// assert!(Register::with_discount(20).is_ok());
    /// assert!(Register::with_discount(120).is_err());
    /// ```
    pub fn with_discount(pct: u8) -> CoreResult<Self> {
        Ok(Register::new(DiscountPercent::new(pct)?))
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Rings up `quantity` units of `title` at `price` each.
    ///
    /// No validation happens here: negative prices and quantities flow
    /// through the arithmetic unchanged, and a quantity of zero or less
    /// appends nothing to the ledger. Use [`Register::try_add_item`] for
    /// checked input.
    ///
    /// ## Example
    /// ```rust
    /// use register_core::Register;
    ///
    /// let mut register = Register::default();
    /// register.add_item("Apple", 1.0, 3);
    /// assert_eq!(register.total(), 3.0);
    /// assert_eq!(register.items(), ["Apple", "Apple", "Apple"]);
    /// ```
    pub fn add_item(&mut self, title: impl Into<String>, price: f64, quantity: i64) {
        let title = title.into();
        let amount = price * quantity as f64;

        self.total += amount;
        for _ in 0..quantity {
            self.items.push(title.clone());
        }

        debug!(
            register_id = %self.id,
            title = %title,
            quantity,
            amount,
            total = self.total,
            "item added"
        );

        self.last_transaction = Some(Transaction {
            title,
            amount,
            quantity,
        });
    }

    /// Rings up a single unit.
    pub fn add_single(&mut self, title: impl Into<String>, price: f64) {
        self.add_item(title, price, 1);
    }

    /// Validates the input, then rings it up.
    ///
    /// ## Rules
    /// - title: non-empty, at most 200 characters
    /// - price: finite and not negative
    /// - quantity: 1..=999
    ///
    /// On error the register is left untouched.
    pub fn try_add_item(
        &mut self,
        title: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> CoreResult<()> {
        let title = title.into();
        validate_title(&title)?;
        validate_price(price)?;
        validate_quantity(quantity)?;

        self.add_item(title, price, quantity);
        Ok(())
    }

    /// Applies the register's discount to the current total.
    ///
    /// The total is replaced in place, so calling this twice discounts the
    /// already-discounted total again.
    ///
    /// ## User Workflow
    /// ```text
    /// Total: $100.00, discount 20%
    ///      │
    ///      ▼
    /// apply_discount() ← THIS FUNCTION
    ///      │
    ///      ├── discount == 0 → NoDiscount, total unchanged
    ///      │
    ///      └── total = 100 × 80 / 100 → Applied { total: 80.0 }
    ///                                   "After the discount, the total comes to $80."
    /// ```
    pub fn apply_discount(&mut self) -> DiscountOutcome {
        if self.discount.is_zero() {
            info!(register_id = %self.id, "There is no discount to apply.");
            return DiscountOutcome::NoDiscount;
        }

        self.total = discounted_total(self.total, self.discount);

        let outcome = DiscountOutcome::Applied { total: self.total };
        info!(
            register_id = %self.id,
            discount = %self.discount,
            total = self.total,
            "{outcome}"
        );
        outcome
    }

    /// Reverses the most recent `add_item` call.
    ///
    /// Subtracts its amount from the total and removes up to `quantity`
    /// occurrences of its title, scanning from the end of the ledger so
    /// earlier duplicates survive. Missing occurrences are not an error.
    ///
    /// Returns the voided transaction, or `None` when there was nothing to
    /// void (in which case only the zero snap runs).
    pub fn void_last_transaction(&mut self) -> Option<Transaction> {
        let voided = self.last_transaction.take();

        if let Some(tx) = &voided {
            self.total -= tx.amount;

            if !tx.title.is_empty() && tx.quantity > 0 {
                let removed = self.remove_from_end(&tx.title, tx.quantity);
                debug!(
                    register_id = %self.id,
                    title = %tx.title,
                    requested = tx.quantity,
                    removed,
                    "items removed by void"
                );
            }
        }

        self.total = snap_to_zero(self.total);

        debug!(
            register_id = %self.id,
            voided = voided.is_some(),
            total = self.total,
            "last transaction voided"
        );
        voided
    }

    /// Removes up to `count` occurrences of `title`, last one first.
    fn remove_from_end(&mut self, title: &str, count: i64) -> i64 {
        let mut removed = 0;
        let mut idx = self.items.len();

        while removed < count && idx > 0 {
            idx -= 1;
            if self.items[idx] == title {
                self.items.remove(idx);
                removed += 1;
            }
        }

        removed
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Register session id (UUID v4).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// When the register was opened.
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// The discount fixed at construction.
    pub fn discount(&self) -> DiscountPercent {
        self.discount
    }

    /// The running total.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// The item ledger, one entry per unit, in the order rung up.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Number of units in the ledger.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The transaction a void would reverse.
    pub fn last_transaction(&self) -> Option<&Transaction> {
        self.last_transaction.as_ref()
    }

    /// Copies the current state into a serializable snapshot.
    pub fn snapshot(&self) -> RegisterSnapshot {
        RegisterSnapshot {
            id: self.id.clone(),
            opened_at: self.opened_at,
            discount_percent: self.discount.percent(),
            total: self.total,
            items: self.items.clone(),
            last_transaction: self.last_transaction.clone(),
        }
    }
}

impl Default for Register {
    /// A register with no discount.
    fn default() -> Self {
        Register::new(DiscountPercent::none())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
