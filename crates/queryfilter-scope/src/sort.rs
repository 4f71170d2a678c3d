//! Sort resolution.

use tracing::trace;

use queryfilter_core::types::sorting::{SortDirection, SortField};

use crate::policy::FieldPolicyTable;

/// Resolve `order_by` / `order_direction` into an ordering.
///
/// `order_by` is matched against the exposed names of sortable fields, the
/// same names filtering uses; the result orders by the storage column. An
/// absent or unresolvable `order_by` yields `default` unchanged. An
/// unrecognised direction falls back to the default direction.
pub fn build_sort_clause(
    policy: &FieldPolicyTable,
    order_by: Option<&str>,
    direction: Option<&str>,
    default: &SortField,
) -> SortField {
    let Some(order_by) = order_by.filter(|s| !s.is_empty()) else {
        return default.clone();
    };

    let Some(field) = policy.get(order_by).filter(|f| f.sortable) else {
        trace!(order_by, "Falling back to default ordering");
        return default.clone();
    };

    let direction = direction
        .and_then(SortDirection::parse)
        .unwrap_or(default.direction);

    SortField::new(&field.column, direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use queryfilter_core::traits::FieldDescriptor;

    fn policy() -> FieldPolicyTable {
        FieldPolicyTable::from_descriptors(
            "users",
            &[
                FieldDescriptor::new("username", "searchable;filterable"),
                FieldDescriptor::new("full_name", "param:name;searchable"),
                FieldDescriptor::new("email", "filterable"),
                FieldDescriptor::new("last_login", "filterable;unsortable"),
                FieldDescriptor::new("password", ""),
            ],
        )
        .unwrap()
    }

    fn default() -> SortField {
        SortField::desc("created_at")
    }

    #[test]
    fn test_explicit_field_and_direction() {
        let sort = build_sort_clause(&policy(), Some("email"), Some("asc"), &default());
        assert_eq!(sort, SortField::asc("email"));
    }

    #[test]
    fn test_absent_falls_back_to_default() {
        assert_eq!(build_sort_clause(&policy(), None, None, &default()), default());
        assert_eq!(
            build_sort_clause(&policy(), None, Some("asc"), &default()),
            default()
        );
    }

    #[test]
    fn test_unresolvable_or_unsortable_falls_back() {
        for order_by in ["password", "nope", "last_login", "full_name", ""] {
            let sort = build_sort_clause(&policy(), Some(order_by), Some("asc"), &default());
            assert_eq!(sort, default(), "order_by={order_by}");
        }
    }

    #[test]
    fn test_alias_orders_by_column() {
        let sort = build_sort_clause(&policy(), Some("name"), Some("DESC"), &default());
        assert_eq!(sort, SortField::desc("full_name"));
    }

    #[test]
    fn test_invalid_direction_uses_default_direction() {
        let sort = build_sort_clause(&policy(), Some("username"), Some("sideways"), &default());
        assert_eq!(sort, SortField::desc("username"));
    }
}
