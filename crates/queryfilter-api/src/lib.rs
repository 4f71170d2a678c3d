//! # queryfilter-api
//!
//! HTTP layer built on Axum.
//!
//! Provides the query-string extractor, the mapping from [`AppError`] to
//! HTTP responses, and routes that list any
//! [`FilterModel`](queryfilter_core::traits::FilterModel) filtered by the
//! request's query parameters.
//!
//! [`AppError`]: queryfilter_core::error::AppError

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use extractors::FilterQuery;
pub use router::{build_router, filter_route};
pub use state::AppState;
