//! Core type definitions used across the queryfilter workspace.

pub mod filter;
pub mod flags;
pub mod pagination;
pub mod sorting;

pub use filter::{FilterField, FilterOp, FilterValue, SearchClause};
pub use flags::FilterFlags;
pub use pagination::{PageResponse, PaginationPlan};
pub use sorting::{SortDirection, SortField};
