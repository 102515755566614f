//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject suffixes and module paths that cannot name a type or module
//! - Check the log level is one tracing understands
//!
//! Returns all validation errors, not just the first.

use thiserror::Error;

use crate::config::schema::MappingConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("handler_suffix '{0}' must not contain '/' or whitespace")]
    InvalidSuffix(String),

    #[error("base_module '{0}' has an empty segment")]
    EmptyModuleSegment(String),

    #[error("base_module '{0}' must not contain '/' or whitespace")]
    InvalidModulePath(String),

    #[error("log_level '{0}' is not one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

fn has_forbidden_chars(s: &str) -> bool {
    s.chars().any(|c| c == '/' || c.is_whitespace())
}

/// Validate a loaded configuration.
pub fn validate_config(config: &MappingConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if has_forbidden_chars(&config.handler_suffix) {
        errors.push(ValidationError::InvalidSuffix(config.handler_suffix.clone()));
    }

    if let Some(base) = &config.base_module {
        if base.split("::").flat_map(|s| s.split('.')).any(str::is_empty) {
            errors.push(ValidationError::EmptyModuleSegment(base.clone()));
        }
        if has_forbidden_chars(base) {
            errors.push(ValidationError::InvalidModulePath(base.clone()));
        }
    }

    if !LOG_LEVELS.contains(&config.log_level.to_ascii_lowercase().as_str()) {
        errors.push(ValidationError::InvalidLogLevel(config.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
