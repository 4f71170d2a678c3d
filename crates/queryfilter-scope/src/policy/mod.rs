//! Field policy tables: which model fields a request may filter, search or
//! sort on, and under which query-parameter name.

pub mod registry;
pub mod tags;

use std::collections::HashMap;

use tracing::debug;

use queryfilter_core::error::AppError;
use queryfilter_core::result::AppResult;
use queryfilter_core::traits::{FieldDescriptor, FilterModel};

pub use registry::{PolicyRegistry, extract_policy};
pub use tags::FieldTags;

/// The resolved policy of one model field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPolicy {
    /// The field's declared name.
    pub name: String,
    /// The storage column.
    pub column: String,
    /// The query-parameter name: the `param:` alias, else the column.
    pub exposed_name: String,
    /// May be matched by an equality query parameter.
    pub filterable: bool,
    /// Included in the `search` substring match.
    pub searchable: bool,
    /// May be named by `order_by`.
    pub sortable: bool,
}

/// Immutable policy of a model, in field declaration order.
#[derive(Debug, Clone)]
pub struct FieldPolicyTable {
    table: String,
    fields: Vec<FieldPolicy>,
    by_exposed_name: HashMap<String, usize>,
}

impl FieldPolicyTable {
    /// Build the table for a model type.
    pub fn for_model<M: FilterModel>() -> AppResult<Self> {
        Self::from_descriptors(M::table_name(), M::fields())
    }

    /// Build a table from raw descriptors.
    ///
    /// Fields without a recognised tag are left out. Two fields sharing an
    /// exposed name is a configuration error.
    pub fn from_descriptors(table: &str, descriptors: &[FieldDescriptor]) -> AppResult<Self> {
        let mut fields = Vec::new();
        let mut by_exposed_name = HashMap::new();

        for descriptor in descriptors {
            let tags = FieldTags::parse(descriptor.name, descriptor.tags);
            if !tags.recognized {
                continue;
            }

            let exposed_name = tags
                .param
                .clone()
                .unwrap_or_else(|| descriptor.column.to_string());

            if let Some(&existing) = by_exposed_name.get(&exposed_name) {
                let other: &FieldPolicy = &fields[existing];
                return Err(AppError::configuration(format!(
                    "Model '{table}': fields '{}' and '{}' both expose query parameter '{exposed_name}'",
                    other.name, descriptor.name
                )));
            }

            by_exposed_name.insert(exposed_name.clone(), fields.len());
            fields.push(FieldPolicy {
                name: descriptor.name.to_string(),
                column: descriptor.column.to_string(),
                exposed_name,
                filterable: tags.filterable,
                searchable: tags.searchable,
                sortable: tags.is_sortable(),
            });
        }

        debug!(table, fields = fields.len(), "Built filter policy table");

        Ok(Self {
            table: table.to_string(),
            fields,
            by_exposed_name,
        })
    }

    /// The model's table name.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Look up a field by its exposed query-parameter name.
    pub fn get(&self, exposed_name: &str) -> Option<&FieldPolicy> {
        self.by_exposed_name
            .get(exposed_name)
            .map(|&idx| &self.fields[idx])
    }

    /// All exposed fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldPolicy> {
        self.fields.iter()
    }

    /// Searchable fields in declaration order.
    pub fn searchable(&self) -> impl Iterator<Item = &FieldPolicy> {
        self.fields.iter().filter(|f| f.searchable)
    }

    /// Number of exposed fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the model exposes no field at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use queryfilter_core::error::ErrorKind;

    const USER_FIELDS: &[FieldDescriptor] = &[
        FieldDescriptor::new("id", ""),
        FieldDescriptor::new("username", "searchable;filterable"),
        FieldDescriptor::new("full_name", "param:name;searchable"),
        FieldDescriptor::new("email", "filterable"),
        FieldDescriptor::new("password", ""),
    ];

    #[test]
    fn test_untagged_fields_excluded() {
        let table = FieldPolicyTable::from_descriptors("users", USER_FIELDS).unwrap();
        assert_eq!(table.len(), 3);
        assert!(table.get("id").is_none());
        assert!(table.get("password").is_none());
    }

    #[test]
    fn test_alias_replaces_column_name() {
        let table = FieldPolicyTable::from_descriptors("users", USER_FIELDS).unwrap();
        let full_name = table.get("name").unwrap();
        assert_eq!(full_name.column, "full_name");
        assert!(table.get("full_name").is_none());
    }

    #[test]
    fn test_declaration_order_preserved() {
        let table = FieldPolicyTable::from_descriptors("users", USER_FIELDS).unwrap();
        let names: Vec<_> = table.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["username", "full_name", "email"]);

        let searchable: Vec<_> = table.searchable().map(|f| f.column.as_str()).collect();
        assert_eq!(searchable, ["username", "full_name"]);
    }

    #[test]
    fn test_custom_column_is_default_exposed_name() {
        let fields = [FieldDescriptor::with_column("email", "email_address", "filterable")];
        let table = FieldPolicyTable::from_descriptors("users", &fields).unwrap();
        assert_eq!(table.get("email_address").unwrap().name, "email");
    }

    #[test]
    fn test_duplicate_exposed_name_is_configuration_error() {
        let fields = [
            FieldDescriptor::new("email", "filterable"),
            FieldDescriptor::new("contact", "filterable;param:email"),
        ];
        let err = FieldPolicyTable::from_descriptors("users", &fields).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
        assert!(err.message.contains("'email'"));
    }

    #[test]
    fn test_untagged_field_does_not_collide() {
        let fields = [
            FieldDescriptor::new("email", ""),
            FieldDescriptor::new("contact", "filterable;param:email"),
        ];
        let table = FieldPolicyTable::from_descriptors("users", &fields).unwrap();
        assert_eq!(table.get("email").unwrap().name, "contact");
    }
}
