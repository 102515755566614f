//! Handler + action fragment combination.
//!
//! Patterns: cross product, handler-major, plain concatenation. Nothing is
//! inserted or collapsed, so `/a/` + `/b` stays `/a//b`.
//!
//! Conditions: per axis, the action's value if present, else the handler's.

use crate::routing::fragment::{RouteConditions, RouteDescriptor, RouteFragment};

#[derive(Debug, Clone, Copy, Default)]
pub struct RouteMerger;

impl RouteMerger {
    pub fn combine(&self, handler: RouteFragment, action: RouteFragment) -> RouteDescriptor {
        let (handler_patterns, handler_conditions) = handler.into_parts();
        let (action_patterns, action_conditions) = action.into_parts();

        let mut patterns = Vec::with_capacity(handler_patterns.len() * action_patterns.len());
        for h in &handler_patterns {
            for a in &action_patterns {
                let combined = format!("{h}{a}");
                if !patterns.contains(&combined) {
                    patterns.push(combined);
                }
            }
        }

        RouteDescriptor {
            patterns,
            conditions: most_specific(handler_conditions, action_conditions),
        }
    }
}

fn most_specific(handler: RouteConditions, action: RouteConditions) -> RouteConditions {
    RouteConditions {
        methods: action.methods.or(handler.methods),
        params: action.params.or(handler.params),
        headers: action.headers.or(handler.headers),
        consumes: action.consumes.or(handler.consumes),
        produces: action.produces.or(handler.produces),
        custom: action.custom.or(handler.custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::fragment::{CustomPredicate, Verb};

    #[test]
    fn test_cross_product_preserves_double_slash() {
        let handler = RouteFragment::new(["/test/ann/", "/test/annotation"], RouteConditions::default());
        let action = RouteFragment::single("action1");
        let descriptor = RouteMerger.combine(handler, action);
        assert_eq!(descriptor.patterns(), ["/test/ann//action1", "/test/annotation/action1"]);
    }

    #[test]
    fn test_cross_product_size() {
        let handler = RouteFragment::new(["/a", "/b"], RouteConditions::default());
        let action = RouteFragment::new(["/x", "/y", "/z"], RouteConditions::default());
        let descriptor = RouteMerger.combine(handler, action);
        assert_eq!(descriptor.patterns(), ["/a/x", "/a/y", "/a/z", "/b/x", "/b/y", "/b/z"]);
    }

    #[test]
    fn test_index_under_root_handler() {
        let descriptor = RouteMerger.combine(RouteFragment::single("/"), RouteFragment::single(""));
        assert_eq!(descriptor.patterns(), ["/"]);
    }

    #[test]
    fn test_action_conditions_override_handler() {
        let handler = RouteFragment::new(
            ["/orders"],
            RouteConditions {
                methods: Some(vec![Verb::Get]),
                produces: Some(vec!["application/json".into()]),
                custom: Some(CustomPredicate::named("handler")),
                ..RouteConditions::default()
            },
        );
        let action = RouteFragment::new(
            ["/create"],
            RouteConditions {
                methods: Some(vec![Verb::Post]),
                ..RouteConditions::default()
            },
        );
        let descriptor = RouteMerger.combine(handler, action);
        let conditions = descriptor.conditions();
        assert_eq!(conditions.methods, Some(vec![Verb::Post]));
        assert_eq!(conditions.produces, Some(vec!["application/json".to_string()]));
        assert_eq!(conditions.custom, Some(CustomPredicate::named("handler")));
        assert_eq!(conditions.params, None);
        assert_eq!(conditions.headers, None);
        assert_eq!(conditions.consumes, None);
    }
}
