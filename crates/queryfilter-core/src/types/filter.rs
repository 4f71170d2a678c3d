//! Filter types for dynamic query building.

use serde::{Deserialize, Serialize};

/// Filter comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOp {
    /// Exact equality.
    Eq,
    /// SQL `IN` list membership, produced by repeated query keys.
    In,
}

/// A raw filter value, bound by the query collaborator as a parameter.
///
/// Values stay strings; the collaborator compares them against the column's
/// text form, so `"42"` matches an integer column holding 42.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// A single string value.
    String(String),
    /// A list of string values (for the `IN` operator).
    StringList(Vec<String>),
}

impl FilterValue {
    /// Borrow the single value, if this is not a list.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            Self::StringList(_) => None,
        }
    }
}

/// A validated predicate clause on a model field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterField {
    /// The query-parameter name the clause was requested with.
    pub field: String,
    /// The storage column the clause applies to.
    pub column: String,
    /// The comparison operator.
    pub op: FilterOp,
    /// The value to compare against.
    pub value: FilterValue,
}

impl FilterField {
    /// Create a new filter field.
    pub fn new(
        field: impl Into<String>,
        column: impl Into<String>,
        op: FilterOp,
        value: FilterValue,
    ) -> Self {
        Self {
            field: field.into(),
            column: column.into(),
            op,
            value,
        }
    }

    /// Shorthand for an equality filter.
    pub fn eq(field: impl Into<String>, column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, column, FilterOp::Eq, FilterValue::String(value.into()))
    }

    /// Shorthand for a list membership filter.
    pub fn any_of(field: impl Into<String>, column: impl Into<String>, values: Vec<String>) -> Self {
        Self::new(field, column, FilterOp::In, FilterValue::StringList(values))
    }
}

/// An OR-combined substring match over several columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchClause {
    /// Searchable columns, in model declaration order.
    pub columns: Vec<String>,
    /// The `LIKE` pattern bound once per column.
    pub pattern: String,
}

impl SearchClause {
    /// Build a substring search for `term` over `columns`.
    pub fn contains(columns: Vec<String>, term: &str) -> Self {
        Self {
            columns,
            pattern: format!("%{term}%"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_shorthand() {
        let clause = FilterField::eq("username", "username", "sampleUser");
        assert_eq!(clause.op, FilterOp::Eq);
        assert_eq!(clause.value.as_str(), Some("sampleUser"));
    }

    #[test]
    fn test_search_pattern_wraps_term() {
        let clause = SearchClause::contains(vec!["username".into()], "John");
        assert_eq!(clause.pattern, "%John%");
    }
}
