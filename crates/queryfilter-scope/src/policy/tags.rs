//! Parsing of `;`-separated field policy tags.

use tracing::debug;

/// Tags recognised on a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTags {
    /// `searchable`
    pub searchable: bool,
    /// `filterable`
    pub filterable: bool,
    /// `sortable` (`Some(true)`) or `unsortable` (`Some(false)`).
    pub sortable: Option<bool>,
    /// `param:<name>`
    pub param: Option<String>,
    /// Whether any tag was recognised at all.
    pub recognized: bool,
}

impl FieldTags {
    /// Parse a raw tag string such as `searchable;filterable;param:full_name`.
    ///
    /// Unknown tags are skipped. `unsortable` wins over `sortable`.
    pub fn parse(field: &str, raw: &str) -> Self {
        let mut tags = Self::default();

        for tag in raw.split(';').map(str::trim).filter(|t| !t.is_empty()) {
            match tag {
                "searchable" => tags.searchable = true,
                "filterable" => tags.filterable = true,
                "sortable" => {
                    if tags.sortable.is_none() {
                        tags.sortable = Some(true);
                    }
                }
                "unsortable" => tags.sortable = Some(false),
                _ => match tag.strip_prefix("param:").map(str::trim) {
                    Some(name) if !name.is_empty() => tags.param = Some(name.to_string()),
                    _ => {
                        debug!(field, tag, "Ignoring unrecognized filter tag");
                        continue;
                    }
                },
            }
            tags.recognized = true;
        }

        tags
    }

    /// Sortability: explicit declaration, else implied by filterable or
    /// searchable.
    pub fn is_sortable(&self) -> bool {
        self.sortable
            .unwrap_or(self.filterable || self.searchable)
    }
}
