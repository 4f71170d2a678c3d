//! Convenience result type alias for queryfilter.

use crate::error::AppError;

/// A specialized `Result` type for queryfilter operations.
pub type AppResult<T> = Result<T, AppError>;
