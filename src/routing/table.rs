//! Dispatch table assembly.
//!
//! # Data Flow
//! ```text
//! HandlerCandidate[]
//!     → is_handler (skip non-handlers)
//!     → resolve each action
//!     → register pattern + conditions → (handler, action)
//!     → frozen RouteTable
//! ```
//!
//! The same pattern may be registered more than once only when the
//! conditions differ; otherwise the table is ambiguous and building fails.

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use crate::routing::candidate::HandlerCandidate;
use crate::routing::fragment::RouteConditions;
use crate::routing::resolver::MappingResolver;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("Ambiguous mapping for '{pattern}': {existing} and {duplicate} share the same conditions")]
    Ambiguous {
        pattern: String,
        existing: String,
        duplicate: String,
    },
}

/// One dispatch entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub pattern: String,
    pub handler: String,
    pub action: String,
    #[serde(flatten)]
    pub conditions: RouteConditions,
}

impl Registration {
    /// `Handler#action`
    pub fn target(&self) -> String {
        format!("{}#{}", self.handler, self.action)
    }
}

/// Frozen set of registrations, in registration order.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<Registration>,
    by_pattern: HashMap<String, Vec<usize>>,
}

impl RouteTable {
    pub fn build(resolver: &MappingResolver, handlers: &[HandlerCandidate]) -> Result<Self, RouteTableError> {
        let mut table = Self::default();
        let mut handler_count = 0usize;

        for handler in handlers {
            if !resolver.is_handler(handler) {
                tracing::debug!(handler = %handler.name, "Skipping non-handler");
                continue;
            }
            handler_count += 1;

            for action in &handler.actions {
                let Some(descriptor) = resolver.resolve(handler, action) else {
                    continue;
                };
                for pattern in descriptor.patterns {
                    table.register(Registration {
                        pattern,
                        handler: handler.name.clone(),
                        action: action.name.clone(),
                        conditions: descriptor.conditions.clone(),
                    })?;
                }
            }
        }

        tracing::info!(
            handlers = handler_count,
            routes = table.entries.len(),
            "Route table built"
        );
        Ok(table)
    }

    fn register(&mut self, registration: Registration) -> Result<(), RouteTableError> {
        let slots = self.by_pattern.entry(registration.pattern.clone()).or_default();
        for &idx in slots.iter() {
            let existing = &self.entries[idx];
            if existing.conditions != registration.conditions {
                continue;
            }
            if existing.handler == registration.handler && existing.action == registration.action {
                // same target listed twice
                return Ok(());
            }
            let duplicate = registration.target();
            return Err(RouteTableError::Ambiguous {
                pattern: registration.pattern,
                existing: existing.target(),
                duplicate,
            });
        }

        tracing::debug!(
            pattern = %registration.pattern,
            target = %registration.target(),
            "Registered route"
        );
        slots.push(self.entries.len());
        self.entries.push(registration);
        Ok(())
    }

    /// All registrations for an exact pattern.
    pub fn lookup(&self, pattern: &str) -> Vec<&Registration> {
        self.by_pattern
            .get(pattern)
            .map(|slots| slots.iter().map(|&i| &self.entries[i]).collect())
            .unwrap_or_default()
    }

    pub fn entries(&self) -> impl Iterator<Item = &Registration> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
