//! Handler manifest: the registration-time list of handlers and actions.
//!
//! ```toml
//! [[handlers]]
//! name = "TestAnnoController"
//! module = "app::controllers"
//! route = { path = ["test/ann/", "/test/annotation"] }
//!
//! [[handlers.actions]]
//! name = "relativePath"
//! route = { path = ["action1"], method = ["GET"] }
//! ```

use serde::Deserialize;

use crate::routing::candidate::{ActionCandidate, HandlerCandidate, RouteDeclaration, Visibility};
use crate::routing::fragment::{CustomPredicate, Verb};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Manifest {
    pub handlers: Vec<HandlerEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HandlerEntry {
    pub name: String,

    #[serde(default)]
    pub module: Option<String>,

    /// Framework handler marker.
    #[serde(default)]
    pub handler_marker: bool,

    #[serde(default)]
    pub excluded: bool,

    /// Custom condition label.
    #[serde(default)]
    pub condition: Option<String>,

    #[serde(default)]
    pub route: Option<DeclarationEntry>,

    #[serde(default)]
    pub actions: Vec<ActionEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActionEntry {
    pub name: String,

    #[serde(default)]
    pub visibility: Visibility,

    #[serde(default)]
    pub excluded: bool,

    #[serde(default)]
    pub condition: Option<String>,

    #[serde(default)]
    pub route: Option<DeclarationEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeclarationEntry {
    pub path: Vec<String>,
    pub method: Vec<Verb>,
    pub params: Vec<String>,
    pub headers: Vec<String>,
    pub consumes: Vec<String>,
    pub produces: Vec<String>,
}

impl From<DeclarationEntry> for RouteDeclaration {
    fn from(entry: DeclarationEntry) -> Self {
        Self {
            patterns: entry.path,
            methods: entry.method,
            params: entry.params,
            headers: entry.headers,
            consumes: entry.consumes,
            produces: entry.produces,
        }
    }
}

impl From<ActionEntry> for ActionCandidate {
    fn from(entry: ActionEntry) -> Self {
        Self {
            name: entry.name,
            visibility: entry.visibility,
            declaration: entry.route.map(Into::into),
            excluded: entry.excluded,
            custom: entry.condition.map(CustomPredicate::named),
        }
    }
}

impl From<HandlerEntry> for HandlerCandidate {
    fn from(entry: HandlerEntry) -> Self {
        Self {
            name: entry.name,
            module_path: entry.module,
            handler_marker: entry.handler_marker,
            declaration: entry.route.map(Into::into),
            excluded: entry.excluded,
            custom: entry.condition.map(CustomPredicate::named),
            actions: entry.actions.into_iter().map(Into::into).collect(),
        }
    }
}

impl Manifest {
    pub fn into_candidates(self) -> Vec<HandlerCandidate> {
        self.handlers.into_iter().map(Into::into).collect()
    }
}
