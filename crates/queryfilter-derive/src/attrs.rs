use syn::{Attribute, Error, LitStr, Result};

///
/// ModelAttrs
///

#[derive(Default)]
pub struct ModelAttrs {
    pub table: Option<String>,
}

impl ModelAttrs {
    pub fn parse(attrs: &[Attribute]) -> Result<Self> {
        let mut out = Self::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident("filter")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("table") {
                    let lit: LitStr = meta.value()?.parse()?;
                    out.table = Some(lit.value());
                    Ok(())
                } else {
                    Err(meta.error("expected `table = \"...\"`"))
                }
            })?;
        }

        Ok(out)
    }
}

///
/// FieldAttrs
///

#[derive(Default)]
pub struct FieldAttrs {
    pub searchable: bool,
    pub filterable: bool,
    pub sortable: bool,
    pub unsortable: bool,
    pub param: Option<String>,
    pub column: Option<String>,
}

impl FieldAttrs {
    pub fn parse(attrs: &[Attribute]) -> Result<Self> {
        let mut out = Self::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident("filter")) {
            attr.parse_nested_meta(|meta| {
                let path = &meta.path;
                if path.is_ident("searchable") {
                    out.searchable = true;
                } else if path.is_ident("filterable") {
                    out.filterable = true;
                } else if path.is_ident("sortable") {
                    out.sortable = true;
                } else if path.is_ident("unsortable") {
                    out.unsortable = true;
                } else if path.is_ident("param") {
                    let lit: LitStr = meta.value()?.parse()?;
                    let param = lit.value();
                    if param.trim().is_empty() || param.contains(';') {
                        return Err(Error::new_spanned(
                            &lit,
                            "`param` must be a non-empty name without `;`",
                        ));
                    }
                    out.param = Some(param);
                } else if path.is_ident("column") {
                    let lit: LitStr = meta.value()?.parse()?;
                    out.column = Some(lit.value());
                } else {
                    return Err(meta.error(
                        "unsupported filter attribute; expected one of `searchable`, \
                         `filterable`, `sortable`, `unsortable`, `param = \"...\"`, \
                         `column = \"...\"`",
                    ));
                }
                Ok(())
            })?;
        }

        Ok(out)
    }

    /// Render the `;`-separated tag string understood by the policy
    /// extractor. `column` is not a tag; it becomes the descriptor's column.
    pub fn tags(&self) -> String {
        let mut tags = Vec::new();
        if self.searchable {
            tags.push("searchable".to_string());
        }
        if self.filterable {
            tags.push("filterable".to_string());
        }
        if self.sortable {
            tags.push("sortable".to_string());
        }
        if self.unsortable {
            tags.push("unsortable".to_string());
        }
        if let Some(param) = &self.param {
            tags.push(format!("param:{param}"));
        }
        tags.join(";")
    }
}
