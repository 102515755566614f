//! Mapping resolution for `(handler, action)` pairs.
//!
//! # Responsibilities
//! - Gate actions through the eligibility rules
//! - Pick declared or conventional fragments for both sides
//! - Merge them into the final descriptor, or report no mapping
//!
//! The resolver holds only read-only configuration and can be shared across
//! threads freely.

use std::sync::Arc;

use crate::config::MappingConfig;
use crate::routing::candidate::{ActionCandidate, HandlerCandidate};
use crate::routing::convention::ConventionRouteBuilder;
use crate::routing::declared::OverrideRouteBuilder;
use crate::routing::eligibility::{EligibilityClassifier, HandlerDetector, MarkerDetector};
use crate::routing::fragment::{RouteDescriptor, RouteFragment};
use crate::routing::merge::RouteMerger;

#[derive(Debug, Clone)]
pub struct MappingResolver {
    classifier: EligibilityClassifier,
    convention: ConventionRouteBuilder,
    declared: OverrideRouteBuilder,
    merger: RouteMerger,
    map_declared_actions: bool,
}

impl MappingResolver {
    /// Create a resolver using [`MarkerDetector`] as the framework fallback.
    pub fn new(config: &MappingConfig) -> Self {
        Self::with_detector(config, Arc::new(MarkerDetector))
    }

    pub fn with_detector(config: &MappingConfig, detector: Arc<dyn HandlerDetector>) -> Self {
        Self {
            classifier: EligibilityClassifier::new(config.handler_suffix.clone(), detector),
            convention: ConventionRouteBuilder::new(
                config.handler_suffix.clone(),
                config.casing,
                config.base_module.clone(),
            ),
            declared: OverrideRouteBuilder,
            merger: RouteMerger,
            map_declared_actions: config.map_declared_actions,
        }
    }

    pub fn is_handler(&self, handler: &HandlerCandidate) -> bool {
        self.classifier.is_handler(handler)
    }

    pub fn is_action(&self, action: &ActionCandidate) -> bool {
        self.classifier.is_action(action)
    }

    /// Resolve the route for `action` on `handler`; `None` means no mapping.
    pub fn resolve(&self, handler: &HandlerCandidate, action: &ActionCandidate) -> Option<RouteDescriptor> {
        if !self.is_action(action) {
            tracing::trace!(handler = %handler.name, action = %action.name, "Not an action");
            return None;
        }

        let action_fragment = self.action_fragment(handler, action)?;
        let handler_fragment = self.handler_fragment(handler);

        Some(self.merger.combine(handler_fragment, action_fragment))
    }

    fn action_fragment(&self, handler: &HandlerCandidate, action: &ActionCandidate) -> Option<RouteFragment> {
        match &action.declaration {
            None => Some(self.convention.action_fragment(action)),
            Some(declaration) if self.map_declared_actions => {
                Some(self.declared.action_fragment(declaration, action.custom.clone()))
            }
            Some(_) => {
                tracing::trace!(
                    handler = %handler.name,
                    action = %action.name,
                    "Declared action left to the framework's own mapping"
                );
                None
            }
        }
    }

    fn handler_fragment(&self, handler: &HandlerCandidate) -> RouteFragment {
        match &handler.declaration {
            Some(declaration) => self.declared.handler_fragment(declaration, handler.custom.clone()),
            None => self.convention.handler_fragment(handler),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::candidate::RouteDeclaration;
    use crate::routing::naming::CasingStyle;

    fn resolver(casing: CasingStyle, map_declared_actions: bool) -> MappingResolver {
        MappingResolver::new(&MappingConfig {
            casing,
            map_declared_actions,
            ..MappingConfig::default()
        })
    }

    fn patterns(d: Option<RouteDescriptor>) -> Vec<String> {
        d.map(|d| d.patterns).unwrap_or_default()
    }

    #[test]
    fn test_conventional_resolution() {
        let handler = HandlerCandidate::new("FooController");
        let r = resolver(CasingStyle::LowerCamel, false);
        assert_eq!(patterns(r.resolve(&handler, &ActionCandidate::new("index"))), ["/foo"]);
        assert_eq!(
            patterns(r.resolve(&handler, &ActionCandidate::new("doSomething"))),
            ["/foo/doSomething"]
        );

        let r = resolver(CasingStyle::Kebab, false);
        assert_eq!(patterns(r.resolve(&handler, &ActionCandidate::new("index"))), ["/foo"]);
        assert_eq!(
            patterns(r.resolve(&handler, &ActionCandidate::new("doSomething"))),
            ["/foo/do-something"]
        );
    }

    #[test]
    fn test_reserved_actions_never_map() {
        let handler = HandlerCandidate::new("FooController");
        let r = resolver(CasingStyle::LowerCamel, true);
        for name in ["toString", "init", "destroy"] {
            let declared = ActionCandidate::new(name).declared(RouteDeclaration::with_patterns(["/x"]));
            assert!(r.resolve(&handler, &ActionCandidate::new(name)).is_none());
            assert!(r.resolve(&handler, &declared).is_none());
        }
    }

    #[test]
    fn test_declared_action_requires_override_flag() {
        let handler = HandlerCandidate::new("TestAnnoController")
            .declared(RouteDeclaration::with_patterns(["test/ann/", "/test/annotation"]));
        let action = ActionCandidate::new("relativePath").declared(RouteDeclaration::with_patterns(["action1"]));

        assert!(resolver(CasingStyle::LowerCamel, false).resolve(&handler, &action).is_none());
        assert_eq!(
            patterns(resolver(CasingStyle::LowerCamel, true).resolve(&handler, &action)),
            ["/test/ann//action1", "/test/annotation/action1"]
        );
    }

    #[test]
    fn test_excluded_declared_action_never_maps() {
        let r = resolver(CasingStyle::LowerCamel, true);
        let handler = HandlerCandidate::new("FooController");
        let action = ActionCandidate::new("hidden")
            .declared(RouteDeclaration::with_patterns(["/hidden"]))
            .excluded();
        assert!(r.resolve(&handler, &action).is_none());
    }

    #[test]
    fn test_empty_suffix_classifies_and_maps_alike() {
        let r = MappingResolver::new(&MappingConfig {
            handler_suffix: String::new(),
            ..MappingConfig::default()
        });
        let handler = HandlerCandidate::new("FooController");
        assert!(r.is_handler(&handler));
        assert_eq!(
            patterns(r.resolve(&handler, &ActionCandidate::new("list"))),
            ["/fooController/list"]
        );
    }

    #[test]
    fn test_root_handler_index() {
        let r = resolver(CasingStyle::LowerCamel, false);
        let handler = HandlerCandidate::new("Controller");
        assert_eq!(patterns(r.resolve(&handler, &ActionCandidate::new("index"))), ["/"]);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let r = resolver(CasingStyle::Kebab, true);
        let handler = HandlerCandidate::new("OrderController");
        let action = ActionCandidate::new("listAll");
        assert_eq!(r.resolve(&handler, &action), r.resolve(&handler, &action));
    }
}
