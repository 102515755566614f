//! Routes built from explicit declarations.
//!
//! Declared patterns are used literally, with no casing applied. Empty
//! condition lists are treated as unspecified.

use crate::routing::candidate::RouteDeclaration;
use crate::routing::fragment::{CustomPredicate, RouteConditions, RouteFragment};

#[derive(Debug, Clone, Copy, Default)]
pub struct OverrideRouteBuilder;

impl OverrideRouteBuilder {
    pub fn handler_fragment(
        &self,
        declaration: &RouteDeclaration,
        custom: Option<CustomPredicate>,
    ) -> RouteFragment {
        build(declaration, custom)
    }

    pub fn action_fragment(
        &self,
        declaration: &RouteDeclaration,
        custom: Option<CustomPredicate>,
    ) -> RouteFragment {
        build(declaration, custom)
    }
}

fn build(declaration: &RouteDeclaration, custom: Option<CustomPredicate>) -> RouteFragment {
    let conditions = RouteConditions {
        methods: non_empty(&declaration.methods),
        params: non_empty(&declaration.params),
        headers: non_empty(&declaration.headers),
        consumes: non_empty(&declaration.consumes),
        produces: non_empty(&declaration.produces),
        custom,
    };
    RouteFragment::new(declaration.patterns.iter().cloned(), conditions)
}

fn non_empty<T: Clone>(values: &[T]) -> Option<Vec<T>> {
    (!values.is_empty()).then(|| values.to_vec())
}
