//! # Money Module
//!
//! Helpers for the register's floating-point running total.
//!
//! ## Why Floats Here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT CONTRACT                                            │
//! │                                                                         │
//! │  Prices arrive as plain numbers (1.00, 99.99, even -0.50) and the       │
//! │  register keeps native f64 arithmetic so results match the register    │
//! │  receipts byte for byte:                                                │
//! │                                                                         │
//! │    99.99 × 90 / 100 = 89.991   → displayed "$89.99"                    │
//! │    100.0 × 80 / 100 = 80.0     → displayed "$80"                       │
//! │                                                                         │
//! │  Two cleanups keep this honest:                                         │
//! │    1. format_total  - whole numbers lose the ".0"                      │
//! │    2. snap_to_zero  - -1e-12 after a void becomes exactly 0.0          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use register_core::money::{format_total, snap_to_zero};
//!
//! assert_eq!(format_total(42.0), "42");
//! assert_eq!(format_total(42.5), "42.50");
//! assert_eq!(snap_to_zero(-1e-12), 0.0);
//! ```

use crate::types::DiscountPercent;
use crate::SNAP_EPSILON;

/// Renders a total for display.
///
/// Whole numbers render without a fractional part (`80`), everything else
/// with exactly two decimals (`89.99`). Negative zero renders as `0` and
/// NaN renders as `nan`.
///
/// ## Example
/// ```rust
/// use register_core::money::format_total;
///
/// assert_eq!(format_total(80.0), "80");
/// assert_eq!(format_total(89.991), "89.99");
/// assert_eq!(format_total(-0.0), "0");
/// ```
pub fn format_total(total: f64) -> String {
    if total.is_nan() {
        // Rust spells it "NaN"
        return "nan".to_string();
    }
    if total.is_finite() && total.fract() == 0.0 {
        // `{:.0}` keeps the sign of -0.0
        let whole = if total == 0.0 { 0.0 } else { total };
        format!("{whole:.0}")
    } else {
        format!("{total:.2}")
    }
}

/// Collapses floating-point residue around zero to exactly `0.0`.
///
/// ## User Workflow
/// ```text
/// Add "Gum" $0.10 ×3      total = 0.30000000000000004
///      │
///      ▼
/// Adjustments, voids ...  total = -0.000000000000001
///      │
///      ▼
/// snap_to_zero() ← THIS FUNCTION
///      │
///      ▼
/// total = 0.0 (never shown as "-0.00")
/// ```
#[inline]
pub fn snap_to_zero(total: f64) -> f64 {
    if total.abs() < SNAP_EPSILON {
        0.0
    } else {
        total
    }
}

/// Applies a percentage discount to a total: `total * (100 - pct) / 100`.
///
/// Multiplies before dividing; reordering changes the last bits of the result.
///
/// ## Example
/// ```rust
/// use register_core::money::discounted_total;
/// use register_core::DiscountPercent;
///
/// let twenty = DiscountPercent::new(20).unwrap();
/// assert_eq!(discounted_total(100.0, twenty), 80.0);
/// ```
#[inline]
pub fn discounted_total(total: f64, discount: DiscountPercent) -> f64 {
    total * f64::from(discount.remaining_percent()) / 100.0
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_whole_numbers() {
        assert_eq!(format_total(80.0), "80");
        assert_eq!(format_total(0.0), "0");
        assert_eq!(format_total(-12.0), "-12");
        assert_eq!(format_total(1_000_000.0), "1000000");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_total(-0.0), "0");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_total(f64::NAN), "nan");
        assert_eq!(format_total(f64::INFINITY), "inf");
        assert_eq!(format_total(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_format_fractional_numbers() {
        assert_eq!(format_total(42.5), "42.50");
        assert_eq!(format_total(89.991), "89.99");
        assert_eq!(format_total(0.3), "0.30");
        assert_eq!(format_total(-1.25), "-1.25");
    }

    #[test]
    fn test_snap_to_zero() {
        assert_eq!(snap_to_zero(-1e-12), 0.0);
        assert_eq!(snap_to_zero(1e-10), 0.0);
        assert!(snap_to_zero(-1e-12).is_sign_positive());
        assert_eq!(snap_to_zero(1e-8), 1e-8);
        assert_eq!(snap_to_zero(-3.0), -3.0);
    }

    #[test]
    fn test_discounted_total() {
        let ten = DiscountPercent::new(10).unwrap();
        assert!((discounted_total(99.99, ten) - 89.991).abs() < 1e-9);

        let full = DiscountPercent::new(100).unwrap();
        assert_eq!(discounted_total(55.0, full), 0.0);
    }
}
