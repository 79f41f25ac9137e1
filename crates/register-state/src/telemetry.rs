//! # Telemetry
//!
//! Installs the tracing subscriber for structured logging.

use tracing_subscriber::EnvFilter;

use crate::config::RegisterConfig;

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages (every add and void)
/// - `RUST_LOG=register_core=trace` - Trace the core crate only
/// - Default: `config.log_filter`
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(config: &RegisterConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        let config = RegisterConfig::default();
        init_tracing(&config);
        assert!(!init_tracing(&config));
    }
}
