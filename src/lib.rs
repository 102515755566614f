//! Convention-over-configuration route resolution.
//!
//! Handlers named `XxxController` become routable, and each public action on
//! them maps to `/<handler>/<action>` unless an explicit declaration says
//! otherwise.

pub mod config;
pub mod observability;
pub mod routing;

pub use config::MappingConfig;
pub use routing::{MappingResolver, RouteDescriptor, RouteTable};
