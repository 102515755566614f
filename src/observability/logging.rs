//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Honor `RUST_LOG` over the configured level

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a configured level.
pub fn default_directive(level: &str) -> String {
    format!("convention_routes={}", level.to_ascii_lowercase())
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive("DEBUG"), "convention_routes=debug");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging("info");
        init_logging("trace");
        tracing::info!("still logging");
    }
}
