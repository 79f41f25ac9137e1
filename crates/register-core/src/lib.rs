//! # register-core: Pure Register Bookkeeping
//!
//! This crate is the **heart** of the register. It owns the running total,
//! the item ledger and the single-slot undo, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Register Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 register-state (RegisterState)                  │   │
//! │  │    one Mutex per register • env config • tracing subscriber     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ register-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ register  │  │   types   │  │   money   │  │ validation│  │   │
//! │  │   │ Register  │  │Transaction│  │  format   │  │   rules   │  │   │
//! │  │   │           │  │ Discount  │  │   snap    │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PRINTING • NO LOCKS • PLAIN OWNED STATE          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`register`] - The `Register` and its three operations
//! - [`types`] - Transaction, discount and snapshot types
//! - [`money`] - Floating-point total formatting and cleanup
//! - [`error`] - Domain error types
//! - [`validation`] - Optional strict input checks
//!
//! ## Example Usage
//!
//! ```rust
//! use register_core::Register;
//!
//! let mut register = Register::with_discount(20).unwrap();
//! register.add_item("Macbook Air", 1000.0, 1);
//!
//! let outcome = register.apply_discount();
//! assert_eq!(outcome.message(), "After the discount, the total comes to $800.");
//! assert_eq!(register.total(), 800.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod register;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use register::Register;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Totals closer to zero than this are treated as exactly zero after a void.
pub const SNAP_EPSILON: f64 = 1e-9;

/// Largest discount a register can be configured with, in percent.
pub const MAX_DISCOUNT_PERCENT: u8 = 100;

/// Maximum quantity accepted by [`Register::try_add_item`].
///
/// ## Business Reason
/// Catches a mistyped quantity (1000 instead of 10) at the scanner.
/// The permissive [`Register::add_item`] does not check it.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum item title length accepted by [`Register::try_add_item`].
pub const MAX_TITLE_LEN: usize = 200;
