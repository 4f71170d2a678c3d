//! Substring search over searchable fields.

use tracing::trace;

use queryfilter_core::types::filter::SearchClause;

use crate::policy::FieldPolicyTable;

/// Build the OR-combined `LIKE '%term%'` clause for a `search` value.
///
/// `None` when the term is empty or the model has no searchable field.
pub fn build_search_clause(policy: &FieldPolicyTable, term: &str) -> Option<SearchClause> {
    if term.is_empty() {
        return None;
    }

    let columns: Vec<String> = policy.searchable().map(|f| f.column.clone()).collect();
    if columns.is_empty() {
        trace!(table = policy.table(), "Search requested but no field is searchable");
        return None;
    }

    Some(SearchClause::contains(columns, term))
}
