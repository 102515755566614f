//! Handler and action eligibility.
//!
//! # Responsibilities
//! - Decide whether a component is a routable handler
//! - Decide whether an operation on a handler is a routable action
//!
//! Exclusion always wins over naming and over the framework's own detection.

use std::fmt;
use std::sync::Arc;

use crate::routing::candidate::{ActionCandidate, HandlerCandidate, Visibility};

/// The hosting framework's own handler detection, consulted when the
/// naming convention does not match.
pub trait HandlerDetector: Send + Sync + fmt::Debug {
    fn detects(&self, candidate: &HandlerCandidate) -> bool;
}

/// Detects handlers that carry the framework marker or an explicit route.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerDetector;

impl HandlerDetector for MarkerDetector {
    fn detects(&self, candidate: &HandlerCandidate) -> bool {
        candidate.handler_marker || candidate.declaration.is_some()
    }
}

/// Gatekeeper for handlers and actions.
#[derive(Debug, Clone)]
pub struct EligibilityClassifier {
    suffix: String,
    detector: Arc<dyn HandlerDetector>,
}

impl EligibilityClassifier {
    pub fn new(suffix: impl Into<String>, detector: Arc<dyn HandlerDetector>) -> Self {
        Self {
            suffix: suffix.into(),
            detector,
        }
    }

    pub fn is_handler(&self, candidate: &HandlerCandidate) -> bool {
        if candidate.excluded {
            return false;
        }
        let by_name = candidate.name.ends_with(&self.suffix);
        by_name || self.detector.detects(candidate)
    }

    pub fn is_action(&self, action: &ActionCandidate) -> bool {
        action.visibility == Visibility::Public && !action.excluded && !is_reserved_name(&action.name)
    }
}

/// Names that never become actions: base-object methods, lifecycle hooks
/// and dynamic-object protocol accessors.
pub fn is_reserved_name(name: &str) -> bool {
    let base_object = matches!(
        name,
        "equals" | "hashCode" | "toString" | "clone" | "wait" | "getClass"
    ) || name.starts_with("notify");
    let lifecycle = matches!(name, "init" | "destroy");
    let meta_object = matches!(
        name,
        "getMetaClass" | "setMetaClass" | "getProperty" | "setProperty" | "invokeMethod"
    ) || name.contains('$');

    base_object || lifecycle || meta_object
}
