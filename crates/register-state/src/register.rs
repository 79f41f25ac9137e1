//! # Register State
//!
//! Shares one [`Register`] between many callers.
//!
//! ## Thread Safety
//! The register is wrapped in `Arc<Mutex<T>>` because:
//! 1. None of the register operations is safe to interleave
//! 2. Only one caller should mutate the register at a time
//! 3. Callers (request handlers, tasks) may run concurrently
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Register State Operations                            │
//! │                                                                         │
//! │  Caller                   RegisterState            Register change      │
//! │  ──────                   ─────────────            ───────────────      │
//! │                                                                         │
//! │  Scan item ─────────────► add_item() ────────────► total += p × q      │
//! │                                                                         │
//! │  Discount key ──────────► apply_discount() ──────► total × (100-d)/100 │
//! │                                                                         │
//! │  Void key ──────────────► void_last_transaction() ► undo last add      │
//! │                                                                         │
//! │  Display ───────────────► snapshot() ────────────► (read only)         │
//! │                                                                         │
//! │  NOTE: Every operation holds the lock for its full duration.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use register_core::{
    CoreResult, DiscountOutcome, DiscountPercent, Register, RegisterSnapshot, Transaction,
};
use tracing::{debug, warn};

use crate::config::RegisterConfig;

/// A register shared behind a mutex.
///
/// Cloning is cheap and every clone points at the same register.
///
/// ## Why Not RwLock?
/// Almost every register operation writes. A RwLock would add complexity
/// with minimal benefit.
#[derive(Debug, Clone)]
pub struct RegisterState {
    register: Arc<Mutex<Register>>,
}

impl RegisterState {
    /// Opens a new shared register with the given discount.
    pub fn new(discount: DiscountPercent) -> Self {
        RegisterState::from_register(Register::new(discount))
    }

    /// Opens a new shared register using the configured discount.
    pub fn from_config(config: &RegisterConfig) -> Self {
        RegisterState::new(config.discount_percent)
    }

    /// Shares an existing register.
    pub fn from_register(register: Register) -> Self {
        debug!(
            register_id = register.id(),
            discount = %register.discount(),
            "register opened"
        );
        RegisterState {
            register: Arc::new(Mutex::new(register)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Register> {
        self.register.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            warn!("register mutex poisoned, recovering state");
            poisoned.into_inner()
        })
    }

    /// Executes a function with read access to the register.
    ///
    /// ## Usage
    /// ```rust
    /// use register_state::RegisterState;
    ///
    /// let state = RegisterState::default();
    /// let total = state.with_register(|r| r.total());
    /// assert_eq!(total, 0.0);
    /// ```
    pub fn with_register<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Register) -> R,
    {
        let register = self.lock();
        f(&register)
    }

    /// Executes a function with write access to the register.
    ///
    /// Use this to group several operations under one lock.
    pub fn with_register_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Register) -> R,
    {
        let mut register = self.lock();
        f(&mut register)
    }

    /// See [`Register::add_item`].
    pub fn add_item(&self, title: impl Into<String>, price: f64, quantity: i64) {
        self.with_register_mut(|r| r.add_item(title, price, quantity));
    }

    /// See [`Register::try_add_item`].
    pub fn try_add_item(
        &self,
        title: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> CoreResult<()> {
        let result = self.with_register_mut(|r| r.try_add_item(title, price, quantity));
        if let Err(e) = &result {
            debug!(error = %e, "item rejected");
        }
        result
    }

    /// See [`Register::apply_discount`].
    pub fn apply_discount(&self) -> DiscountOutcome {
        self.with_register_mut(Register::apply_discount)
    }

    /// See [`Register::void_last_transaction`].
    pub fn void_last_transaction(&self) -> Option<Transaction> {
        self.with_register_mut(Register::void_last_transaction)
    }

    /// Current running total.
    pub fn total(&self) -> f64 {
        self.with_register(Register::total)
    }

    /// Copies the register's state.
    pub fn snapshot(&self) -> RegisterSnapshot {
        self.with_register(Register::snapshot)
    }
}

impl Default for RegisterState {
    fn default() -> Self {
        RegisterState::new(DiscountPercent::none())
    }
}
