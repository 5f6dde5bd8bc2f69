//! Logging bootstrap
//!
//! Installs a `tracing` fmt subscriber. `RUST_LOG` takes precedence over
//! the configured level.

use crate::config::LogLevel;
use tracing_subscriber::EnvFilter;

/// Build the filter used by [`init`]
pub fn filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()))
}

/// Initialize the global subscriber
///
/// Returns `false` if a subscriber was already installed, in which case
/// nothing changes.
pub fn init(level: LogLevel) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let _ = init(LogLevel::Warn);
        assert!(!init(LogLevel::Debug));
    }
}
