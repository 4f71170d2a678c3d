//! Predicate building: candidate parameters checked against a policy.

use tracing::trace;

use queryfilter_core::types::filter::{FilterField, FilterValue};

use crate::params::{ParsedParameter, RawValue};
use crate::policy::FieldPolicyTable;

/// Validated predicates, in parameter order.
///
/// Unknown and non-filterable fields are skipped without error, so a
/// response never reveals which columns exist.
pub fn build_predicates(policy: &FieldPolicyTable, params: &[ParsedParameter]) -> Vec<FilterField> {
    let mut clauses = Vec::with_capacity(params.len());

    for param in params {
        let Some(field) = policy.get(&param.field_name) else {
            trace!(param = %param.field_name, "Skipping unknown filter parameter");
            continue;
        };
        if !field.filterable {
            trace!(param = %param.field_name, "Skipping non-filterable field");
            continue;
        }

        let value = match &param.raw_value {
            RawValue::Single(value) => FilterValue::String(value.clone()),
            RawValue::Many(values) => FilterValue::StringList(values.clone()),
        };
        clauses.push(FilterField::new(
            &field.exposed_name,
            &field.column,
            param.operator,
            value,
        ));
    }

    clauses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{QueryParams, parse_parameters};
    use queryfilter_core::traits::FieldDescriptor;

    fn policy() -> FieldPolicyTable {
        FieldPolicyTable::from_descriptors(
            "users",
            &[
                FieldDescriptor::new("username", "searchable;filterable"),
                FieldDescriptor::new("full_name", "param:name;searchable"),
                FieldDescriptor::with_column("email", "email_address", "filterable;param:email"),
                FieldDescriptor::new("password", ""),
            ],
        )
        .unwrap()
    }

    fn build(query: &str) -> Vec<FilterField> {
        build_predicates(&policy(), &parse_parameters(&QueryParams::parse(query)))
    }

    #[test]
    fn test_equality_on_filterable_field() {
        let clauses = build("username=sampleUser");
        assert_eq!(clauses, vec![FilterField::eq("username", "username", "sampleUser")]);
    }

    #[test]
    fn test_unknown_and_disallowed_dropped() {
        assert!(build("password=samplePassword").is_empty());
        assert!(build("nope=1&name=John").is_empty());
    }

    #[test]
    fn test_alias_resolves_to_column() {
        let clauses = build("email=a@b.io&email_address=ignored");
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].field, "email");
        assert_eq!(clauses[0].column, "email_address");
    }

    #[test]
    fn test_parameter_order_kept() {
        let clauses = build("email=a@b.io&username=bob");
        let fields: Vec<_> = clauses.iter().map(|c| c.field.as_str()).collect();
        assert_eq!(fields, ["email", "username"]);
    }

    #[test]
    fn test_repeated_key_is_membership() {
        let clauses = build("username=a&username=b");
        assert_eq!(
            clauses,
            vec![FilterField::any_of("username", "username", vec!["a".into(), "b".into()])]
        );
    }
}
