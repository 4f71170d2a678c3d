//! Model metadata consumed by the filter policy extractor.

/// Declared metadata for one field of a filterable model.
///
/// `tags` uses the `;`-separated form `searchable;filterable;param:full_name`.
/// A field without tags is never exposed to query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// The field's declared name.
    pub name: &'static str,
    /// The storage column backing the field.
    pub column: &'static str,
    /// Raw policy tags.
    pub tags: &'static str,
}

impl FieldDescriptor {
    /// Describe a field whose column matches its name.
    pub const fn new(name: &'static str, tags: &'static str) -> Self {
        Self {
            name,
            column: name,
            tags,
        }
    }

    /// Describe a field stored under a different column name.
    pub const fn with_column(name: &'static str, column: &'static str, tags: &'static str) -> Self {
        Self { name, column, tags }
    }
}

/// A data model whose fields carry filter policy tags.
///
/// Usually implemented with `#[derive(FilterModel)]`; manual
/// implementations list fields in declaration order.
pub trait FilterModel: 'static {
    /// The table the model is stored in.
    fn table_name() -> &'static str;

    /// Every field of the model, in declaration order.
    fn fields() -> &'static [FieldDescriptor];
}
