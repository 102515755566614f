//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! HandlerCandidate / ActionCandidate (from the component registry)
//!     → eligibility.rs (is it a handler? is it an action?)
//!     → convention.rs (name-derived fragment)
//!       or declared.rs (explicit declaration)
//!     → merge.rs (cross product + most specific conditions)
//!     → Return: RouteDescriptor or no mapping
//!
//! Table Assembly:
//!     HandlerCandidate[]
//!     → resolver.rs per (handler, action)
//!     → table.rs (register, reject ambiguous routes)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Invariants
//! - Resolution is pure: same inputs, same descriptor
//! - Returned pattern sets are never empty
//! - Exclusion markers always win

pub mod candidate;
pub mod convention;
pub mod declared;
pub mod eligibility;
pub mod fragment;
pub mod merge;
pub mod naming;
pub mod resolver;
pub mod table;

pub use candidate::{ActionCandidate, HandlerCandidate, RouteDeclaration, Visibility};
pub use eligibility::{HandlerDetector, MarkerDetector};
pub use fragment::{CustomCondition, CustomPredicate, RouteConditions, RouteDescriptor, RouteFragment, Verb};
pub use naming::CasingStyle;
pub use resolver::MappingResolver;
pub use table::{Registration, RouteTable, RouteTableError};
