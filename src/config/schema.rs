//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

pub use crate::routing::naming::CasingStyle;

/// Root configuration for route resolution.
///
/// Set once before resolution starts; read-only afterwards.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct MappingConfig {
    /// Handler naming convention; stripped from the name before routing.
    /// Empty disables both suffix matching and stripping.
    pub handler_suffix: String,

    /// Casing applied to conventional path segments.
    pub casing: CasingStyle,

    /// Whether actions with an explicit declaration get a mapping here.
    /// Off by default so declared actions are not mapped twice.
    pub map_declared_actions: bool,

    /// Base module for hierarchical grouping (e.g. "app::controllers").
    pub base_module: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            handler_suffix: "Controller".to_string(),
            casing: CasingStyle::LowerCamel,
            map_declared_actions: false,
            base_module: None,
            log_level: "info".to_string(),
        }
    }
}
