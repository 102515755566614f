//! Routes derived from naming alone.
//!
//! # Conventions
//! - Handler `FooBarController` maps to `/fooBar` (or `/foo-bar`)
//! - Action `list` maps to `/list` under its handler
//! - Action `index` maps to the handler root
//! - With a base module, each module level between the base and the handler
//!   adds one segment in front, outermost first

use crate::routing::candidate::{module_segments, ActionCandidate, HandlerCandidate};
use crate::routing::fragment::{RouteConditions, RouteFragment};
use crate::routing::naming::{to_path_segment, CasingStyle};

/// Action name that maps to its handler's root path.
pub const INDEX_ACTION: &str = "index";

#[derive(Debug, Clone)]
pub struct ConventionRouteBuilder {
    suffix: String,
    casing: CasingStyle,
    base_module: Option<String>,
}

impl ConventionRouteBuilder {
    pub fn new(suffix: impl Into<String>, casing: CasingStyle, base_module: Option<String>) -> Self {
        Self {
            suffix: suffix.into(),
            casing,
            base_module,
        }
    }

    pub fn handler_fragment(&self, handler: &HandlerCandidate) -> RouteFragment {
        let name = handler
            .name
            .strip_suffix(self.suffix.as_str())
            .unwrap_or(&handler.name);

        let mut path = String::new();
        for segment in self.module_prefix(handler) {
            path.push('/');
            path.push_str(&to_path_segment(segment, self.casing));
        }
        path.push('/');
        path.push_str(&to_path_segment(name, self.casing));

        RouteFragment::new([path], RouteConditions::custom_only(handler.custom.clone()))
    }

    pub fn action_fragment(&self, action: &ActionCandidate) -> RouteFragment {
        let segment = if action.name == INDEX_ACTION {
            String::new()
        } else {
            to_path_segment(&action.name, self.casing)
        };
        RouteFragment::new([segment], RouteConditions::custom_only(action.custom.clone()))
    }

    /// Module levels between the base module and the handler's own module.
    fn module_prefix<'a>(&self, handler: &'a HandlerCandidate) -> Vec<&'a str> {
        let (Some(base), Some(module)) = (self.base_module.as_deref(), handler.module_path.as_deref())
        else {
            return Vec::new();
        };
        let base = module_segments(base);
        let module = module_segments(module);
        if module.len() <= base.len() || module[..base.len()] != base[..] {
            return Vec::new();
        }
        module[base.len()..].to_vec()
    }
}
