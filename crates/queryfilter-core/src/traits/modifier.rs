//! The write-only query builder a composed scope is applied to.

use crate::types::filter::{FilterField, SearchClause};
use crate::types::sorting::SortField;

/// A query builder that accepts filtering, sorting and pagination steps.
///
/// Implementations bind every value as a query parameter. Calls arrive in
/// scope order: predicates, search, ordering, count query, limit/offset.
/// Execution failures are reported by the implementation when the query
/// runs, never through these methods.
pub trait QueryModifier {
    /// AND a validated predicate onto the query.
    fn add_predicate(&mut self, clause: &FilterField);

    /// AND an OR-combined substring match onto the query.
    fn add_search(&mut self, clause: &SearchClause);

    /// Request a total-row count of the filtered query before paging.
    fn add_count_query(&mut self);

    /// Order the results.
    fn add_order_by(&mut self, sort: &SortField);

    /// Restrict the results to a window.
    fn add_limit_offset(&mut self, limit: u64, offset: u64);
}
