//! # register-state: Shared Register Runtime
//!
//! Thin layer that makes a [`register_core::Register`] usable from many
//! callers at once.
//!
//! ## Modules
//!
//! - [`register`] - `RegisterState`, one mutex per register
//! - [`config`] - `RegisterConfig` loaded from `REGISTER_*` variables
//! - [`telemetry`] - tracing subscriber setup
//!
//! ## Startup Sequence
//! ```rust
//! use register_state::{init_tracing, RegisterConfig, RegisterState};
//!
//! let config = RegisterConfig::from_env();
//! init_tracing(&config);
//!
//! let state = RegisterState::from_config(&config);
//! state.add_item("Apple", 1.0, 3);
//! assert_eq!(state.total(), 3.0);
//! ```

pub mod config;
pub mod register;
pub mod telemetry;

pub use config::RegisterConfig;
pub use register::RegisterState;
pub use telemetry::init_tracing;
