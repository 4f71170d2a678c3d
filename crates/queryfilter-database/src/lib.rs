//! # queryfilter-database
//!
//! PostgreSQL connection management and the query builder that filter
//! scopes are applied to.

pub mod connection;
pub mod repository;
pub mod select;

pub use connection::DatabasePool;
pub use repository::FilterRepository;
pub use select::SelectQuery;
