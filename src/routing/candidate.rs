//! Handler and action metadata supplied by the component registry.
//!
//! The registry fills these in before resolution; nothing in this crate
//! mutates them.

use crate::routing::fragment::{CustomPredicate, Verb};

/// Visibility of an action as declared on its handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Crate,
    Private,
}

/// Explicit route declaration attached to a handler or an action.
///
/// Values are already parsed; patterns are taken literally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteDeclaration {
    pub patterns: Vec<String>,
    pub methods: Vec<Verb>,
    pub params: Vec<String>,
    pub headers: Vec<String>,
    pub consumes: Vec<String>,
    pub produces: Vec<String>,
}

impl RouteDeclaration {
    pub fn with_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

/// An operation on a handler.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionCandidate {
    pub name: String,
    pub visibility: Visibility,
    pub declaration: Option<RouteDeclaration>,
    pub excluded: bool,
    pub custom: Option<CustomPredicate>,
}

impl ActionCandidate {
    /// Public, undeclared action.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            declaration: None,
            excluded: false,
            custom: None,
        }
    }

    pub fn declared(mut self, declaration: RouteDeclaration) -> Self {
        self.declaration = Some(declaration);
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn excluded(mut self) -> Self {
        self.excluded = true;
        self
    }

    pub fn with_custom(mut self, custom: CustomPredicate) -> Self {
        self.custom = Some(custom);
        self
    }
}

/// A component under inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct HandlerCandidate {
    /// Simple type name, e.g. `FooController`.
    pub name: String,
    /// Declaring module path, `::` or `.` separated.
    pub module_path: Option<String>,
    /// Set when the framework itself tags the component as a handler.
    pub handler_marker: bool,
    pub declaration: Option<RouteDeclaration>,
    pub excluded: bool,
    pub custom: Option<CustomPredicate>,
    pub actions: Vec<ActionCandidate>,
}

impl HandlerCandidate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module_path: None,
            handler_marker: false,
            declaration: None,
            excluded: false,
            custom: None,
            actions: Vec::new(),
        }
    }

    pub fn in_module(mut self, module_path: impl Into<String>) -> Self {
        self.module_path = Some(module_path.into());
        self
    }

    pub fn marked(mut self) -> Self {
        self.handler_marker = true;
        self
    }

    pub fn declared(mut self, declaration: RouteDeclaration) -> Self {
        self.declaration = Some(declaration);
        self
    }

    pub fn excluded(mut self) -> Self {
        self.excluded = true;
        self
    }

    pub fn with_custom(mut self, custom: CustomPredicate) -> Self {
        self.custom = Some(custom);
        self
    }

    pub fn action(mut self, action: ActionCandidate) -> Self {
        self.actions.push(action);
        self
    }

    pub fn find_action(&self, name: &str) -> Option<&ActionCandidate> {
        self.actions.iter().find(|a| a.name == name)
    }
}

/// Split a module path on `::` or `.` into its non-empty segments.
pub fn module_segments(path: &str) -> Vec<&str> {
    path.split("::")
        .flat_map(|s| s.split('.'))
        .filter(|s| !s.is_empty())
        .collect()
}
