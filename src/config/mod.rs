//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! mapping config (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MappingConfig (validated, immutable)
//!     → handed to MappingResolver at construction
//!
//! handler manifest (TOML)
//!     → loader.rs
//!     → manifest.rs (entries → HandlerCandidate[])
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod manifest;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_manifest, ConfigError};
pub use manifest::Manifest;
pub use schema::{CasingStyle, MappingConfig};
pub use validation::ValidationError;
