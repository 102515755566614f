//! Route fragments and merged route descriptors.
//!
//! A [`RouteFragment`] is what a handler or an action contributes on its own.
//! A [`RouteDescriptor`] is the combination of both, handed back to the
//! dispatch layer. Both are plain values built fresh per resolution.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// HTTP request methods a route may be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Trace,
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verb::Get => "GET",
            Verb::Head => "HEAD",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
            Verb::Options => "OPTIONS",
            Verb::Trace => "TRACE",
        };
        f.write_str(s)
    }
}

/// A framework-supplied match condition that this crate never evaluates.
pub trait CustomCondition: Send + Sync + fmt::Debug {
    /// Label identifying the condition in route tables and output.
    fn label(&self) -> &str;
}

/// Label-only condition, used when conditions come from a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedCondition {
    label: String,
}

impl NamedCondition {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl CustomCondition for NamedCondition {
    fn label(&self) -> &str {
        &self.label
    }
}

/// Shared handle to an opaque custom condition.
///
/// Two predicates are equal when they point at the same condition or carry
/// the same label.
#[derive(Debug, Clone)]
pub struct CustomPredicate(Arc<dyn CustomCondition>);

impl CustomPredicate {
    pub fn new(condition: impl CustomCondition + 'static) -> Self {
        Self(Arc::new(condition))
    }

    pub fn named(label: impl Into<String>) -> Self {
        Self::new(NamedCondition::new(label))
    }

    pub fn label(&self) -> &str {
        self.0.label()
    }
}

impl From<Arc<dyn CustomCondition>> for CustomPredicate {
    fn from(inner: Arc<dyn CustomCondition>) -> Self {
        Self(inner)
    }
}

impl PartialEq for CustomPredicate {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.label() == other.label()
    }
}

impl Eq for CustomPredicate {}

impl Serialize for CustomPredicate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Auxiliary match conditions. `None` on an axis means unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteConditions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<Verb>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub produces: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomPredicate>,
}

impl RouteConditions {
    /// Conditions with only a custom predicate attached.
    pub fn custom_only(custom: Option<CustomPredicate>) -> Self {
        Self {
            custom,
            ..Self::default()
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }
}

/// Partial route contributed by either a handler or an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteFragment {
    patterns: Vec<String>,
    conditions: RouteConditions,
}

impl RouteFragment {
    /// Build a fragment from raw patterns.
    ///
    /// Non-empty patterns get a leading `/` when missing, duplicates are
    /// dropped keeping first occurrence, and an empty list becomes the single
    /// empty pattern.
    pub fn new<I, S>(patterns: I, conditions: RouteConditions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for pattern in patterns {
            let pattern = with_leading_slash(pattern.into());
            if !normalized.contains(&pattern) {
                normalized.push(pattern);
            }
        }
        if normalized.is_empty() {
            normalized.push(String::new());
        }
        Self {
            patterns: normalized,
            conditions,
        }
    }

    /// Single-pattern fragment with no auxiliary conditions.
    pub fn single(pattern: impl Into<String>) -> Self {
        Self::new([pattern.into()], RouteConditions::default())
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn conditions(&self) -> &RouteConditions {
        &self.conditions
    }

    pub(crate) fn into_parts(self) -> (Vec<String>, RouteConditions) {
        (self.patterns, self.conditions)
    }
}

fn with_leading_slash(pattern: String) -> String {
    if pattern.is_empty() || pattern.starts_with('/') {
        pattern
    } else {
        format!("/{pattern}")
    }
}

/// Final route for one `(handler, action)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDescriptor {
    pub patterns: Vec<String>,
    #[serde(flatten)]
    pub conditions: RouteConditions,
}

impl RouteDescriptor {
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn conditions(&self) -> &RouteConditions {
        &self.conditions
    }
}
