//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing / config / cli produce:
//!     → tracing events (trace: per-resolution decisions,
//!                       debug: registrations, info: summaries)
//!     → logging.rs (subscriber setup, stderr)
//! ```

pub mod logging;

pub use logging::init_logging;
