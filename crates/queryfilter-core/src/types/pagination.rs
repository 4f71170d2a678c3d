//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// A resolved page window.
///
/// Invariants: `page >= 1`, `limit >= 1`, `offset == (page - 1) * limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationPlan {
    page: u64,
    limit: u64,
    offset: u64,
}

impl PaginationPlan {
    /// Largest `LIMIT`/`OFFSET` PostgreSQL accepts (`bigint`).
    pub const MAX_WINDOW: u64 = i64::MAX as u64;

    /// Create a plan, or `None` when `page` or `limit` is zero or the limit
    /// or offset exceeds [`Self::MAX_WINDOW`].
    pub fn new(page: u64, limit: u64) -> Option<Self> {
        if page == 0 || limit == 0 || limit > Self::MAX_WINDOW {
            return None;
        }
        let offset = (page - 1)
            .checked_mul(limit)
            .filter(|&offset| offset <= Self::MAX_WINDOW)?;
        Some(Self {
            page,
            limit,
            offset,
        })
    }

    /// Page number (1-based).
    pub fn page(&self) -> u64 {
        self.page
    }

    /// The SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// The SQL `OFFSET` value.
    pub fn offset(&self) -> u64 {
        self.offset
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T: Serialize> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Total number of items across all pages.
    pub total_items: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_previous: bool,
}

impl<T: Serialize> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, page: u64, page_size: u64, total_items: u64) -> Self {
        let total_pages = if total_items == 0 || page_size == 0 {
            1
        } else {
            total_items.div_ceil(page_size)
        };
        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }

    /// Wrap an unpaginated result as a single page.
    pub fn single(items: Vec<T>) -> Self {
        let total = items.len() as u64;
        Self::new(items, 1, total, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let plan = PaginationPlan::new(2, 10).unwrap();
        assert_eq!(plan.limit(), 10);
        assert_eq!(plan.offset(), 10);

        let first = PaginationPlan::new(1, 25).unwrap();
        assert_eq!(first.offset(), 0);
    }

    #[test]
    fn test_rejects_zero_and_overflow() {
        assert!(PaginationPlan::new(0, 10).is_none());
        assert!(PaginationPlan::new(3, 0).is_none());
        assert!(PaginationPlan::new(u64::MAX, 2).is_none());
    }

    #[test]
    fn test_window_fits_bigint() {
        assert!(PaginationPlan::new(3_000_000_000_000_000_000, 5).is_none());
        assert!(PaginationPlan::new(1, u64::MAX).is_none());

        let edge = PaginationPlan::new(2, PaginationPlan::MAX_WINDOW).unwrap();
        assert_eq!(edge.offset(), PaginationPlan::MAX_WINDOW);
        assert!(PaginationPlan::new(3, PaginationPlan::MAX_WINDOW).is_none());
    }

    #[test]
    fn test_page_response_counts() {
        let response = PageResponse::new(vec![1, 2, 3], 2, 3, 7);
        assert_eq!(response.total_pages, 3);
        assert!(response.has_next);
        assert!(response.has_previous);

        let single = PageResponse::single(vec!["a", "b"]);
        assert_eq!(single.total_items, 2);
        assert_eq!(single.total_pages, 1);
        assert!(!single.has_next);
    }
}
