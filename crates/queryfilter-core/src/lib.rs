//! # queryfilter-core
//!
//! Core crate for queryfilter. Contains the collaborator traits a model and
//! a query builder implement, configuration schemas, the filter, sorting,
//! pagination and feature-flag types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other queryfilter crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
