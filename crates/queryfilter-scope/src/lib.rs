//! # queryfilter-scope
//!
//! Translates HTTP query parameters into filtering, search, sorting and
//! pagination steps for a model, as allowed by the model's field policy.
//!
//! The pipeline is synchronous and pure: parse the parameters, build each
//! stage's clauses against the cached policy table, and collect them into a
//! [`Scope`] that is applied to any [`QueryModifier`].
//!
//! [`QueryModifier`]: queryfilter_core::traits::QueryModifier

pub mod composer;
pub mod pagination;
pub mod params;
pub mod policy;
pub mod predicate;
pub mod search;
pub mod sort;

pub use composer::{Scope, ScopeComposer, ScopeOp, filter_by_query};
pub use params::{ParsedParameter, QueryParams, RawValue, parse_parameters};
pub use policy::{FieldPolicy, FieldPolicyTable, PolicyRegistry, extract_policy};
pub use queryfilter_core::types::FilterFlags;
