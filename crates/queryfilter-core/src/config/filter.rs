//! Query filtering defaults.

use serde::{Deserialize, Serialize};

use crate::types::sorting::{SortDirection, SortField};

/// Defaults applied when a request does not (validly) specify sorting or
/// page size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Column used when `order_by` is absent or does not resolve.
    #[serde(default = "default_sort_field")]
    pub default_sort_field: String,
    /// Direction used when `order_direction` is absent or invalid.
    #[serde(default = "default_sort_direction")]
    pub default_sort_direction: SortDirection,
    /// Page size used when only `page` is supplied.
    #[serde(default = "default_limit")]
    pub default_limit: u64,
    /// Upper bound for `limit`; larger values are clamped.
    #[serde(default = "default_max_limit")]
    pub max_limit: u64,
    /// Operator switch for the `search` parameter, checked in addition to
    /// the per-call `SEARCH` flag.
    #[serde(default = "default_true")]
    pub search_enabled: bool,
}

impl FilterConfig {
    /// The ordering used when the request does not pick one.
    pub fn default_sort(&self) -> SortField {
        SortField::new(&self.default_sort_field, self.default_sort_direction)
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            default_sort_field: default_sort_field(),
            default_sort_direction: default_sort_direction(),
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            search_enabled: default_true(),
        }
    }
}

fn default_sort_field() -> String {
    "created_at".to_string()
}

fn default_sort_direction() -> SortDirection {
    SortDirection::Desc
}

fn default_limit() -> u64 {
    20
}

fn default_max_limit() -> u64 {
    100
}

fn default_true() -> bool {
    true
}
