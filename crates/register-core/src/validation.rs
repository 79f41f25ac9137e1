//! # Validation Module
//!
//! Strict input checks for the register's checked entry points.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Two Ways to Ring Up an Item                        │
//! │                                                                         │
//! │  add_item(title, price, qty)        try_add_item(title, price, qty)     │
//! │  ├── no checks                      ├── validate_title                  │
//! │  ├── negative price/qty accepted    ├── validate_price                  │
//! │  └── always succeeds                ├── validate_quantity               │
//! │                                     └── then add_item, or Err untouched │
//! │                                                                         │
//! │  Construction: validate_discount_percent (0..=100) in both cases       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use register_core::validation::{validate_price, validate_quantity};
//!
//! assert!(validate_price(2.50).is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::{MAX_DISCOUNT_PERCENT, MAX_ITEM_QUANTITY, MAX_TITLE_LEN};

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item title.
///
/// ## Rules
/// - Must not be empty or whitespace only
/// - At most 200 characters
pub fn validate_title(title: &str) -> ValidationResult<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::TooLong {
            field: "title".to_string(),
            max: MAX_TITLE_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be finite (no NaN, no infinity)
/// - Must be non-negative; zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use register_core::validation::validate_price;
///
/// assert!(validate_price(0.0).is_ok());
/// assert!(validate_price(-1.0).is_err());
/// assert!(validate_price(f64::NAN).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity.
///
/// ## Rules
/// - Between 1 and [`MAX_ITEM_QUANTITY`] (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if !(1..=MAX_ITEM_QUANTITY).contains(&qty) {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a discount in percent.
///
/// ## Rules
/// - Between 0 and 100 inclusive
pub fn validate_discount_percent(pct: i64) -> ValidationResult<()> {
    if !(0..=i64::from(MAX_DISCOUNT_PERCENT)).contains(&pct) {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: i64::from(MAX_DISCOUNT_PERCENT),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
