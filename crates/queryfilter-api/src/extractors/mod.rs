//! Custom Axum extractors.

pub mod query;

pub use query::FilterQuery;
