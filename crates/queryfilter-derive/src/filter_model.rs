use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields};

use crate::attrs::{FieldAttrs, ModelAttrs};

// derive_filter_model
pub fn derive_filter_model(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            other => {
                return Err(Error::new_spanned(
                    other,
                    "FilterModel can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(Error::new_spanned(
                ident,
                "FilterModel can only be derived for structs with named fields",
            ));
        }
    };

    let model_attrs = ModelAttrs::parse(&input.attrs)?;
    let table = model_attrs
        .table
        .unwrap_or_else(|| default_table_name(&ident.to_string()));

    let mut descriptors = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        let attrs = FieldAttrs::parse(&field.attrs)?;

        let name = field_ident.to_string();
        let name = name.strip_prefix("r#").unwrap_or(&name).to_string();
        let column = attrs.column.clone().unwrap_or_else(|| name.clone());
        let tags = attrs.tags();

        descriptors.push(quote! {
            ::queryfilter_core::traits::FieldDescriptor::with_column(#name, #column, #tags)
        });
    }

    Ok(quote! {
        impl #impl_generics ::queryfilter_core::traits::FilterModel for #ident #ty_generics #where_clause {
            fn table_name() -> &'static str {
                #table
            }

            fn fields() -> &'static [::queryfilter_core::traits::FieldDescriptor] {
                const FIELDS: &[::queryfilter_core::traits::FieldDescriptor] = &[
                    #(#descriptors),*
                ];
                FIELDS
            }
        }
    })
}

/// `UserAccount` -> `user_accounts`
fn default_table_name(type_name: &str) -> String {
    let mut out = String::with_capacity(type_name.len() + 4);
    for (i, ch) in type_name.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    if !out.ends_with('s') {
        out.push('s');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_name() {
        assert_eq!(default_table_name("User"), "users");
        assert_eq!(default_table_name("UserAccount"), "user_accounts");
        assert_eq!(default_table_name("Address"), "address");
    }

    #[test]
    fn test_expand_emits_tags_in_declaration_order() {
        let input = quote! {
            #[filter(table = "people")]
            struct Person {
                id: i64,
                #[filter(searchable, filterable)]
                username: String,
                #[filter(param = "name", searchable, column = "display_name")]
                full_name: String,
            }
        };
        let expanded = derive_filter_model(input).to_string();

        assert!(expanded.contains("\"people\""));
        let id = expanded.find("\"id\" , \"id\" , \"\"").unwrap();
        let username = expanded
            .find("\"username\" , \"username\" , \"searchable;filterable\"")
            .unwrap();
        let full_name = expanded
            .find("\"full_name\" , \"display_name\" , \"searchable;param:name\"")
            .unwrap();
        assert!(id < username && username < full_name);
    }

    #[test]
    fn test_rejects_unknown_attribute() {
        let input = quote! {
            struct Bad {
                #[filter(fuzzy)]
                name: String,
            }
        };
        let expanded = derive_filter_model(input).to_string();
        assert!(expanded.contains("compile_error"));
    }

    #[test]
    fn test_rejects_malformed_param() {
        for param in ["", "  ", "a;b"] {
            let input = quote! {
                struct Bad {
                    #[filter(filterable, param = #param)]
                    email: String,
                }
            };
            let expanded = derive_filter_model(input).to_string();
            assert!(expanded.contains("compile_error"), "param {param:?}");
            assert!(expanded.contains("non-empty name"), "param {param:?}");
        }
    }

    #[test]
    fn test_rejects_tuple_struct() {
        let input = quote! { struct Pair(i64, String); };
        let expanded = derive_filter_model(input).to_string();
        assert!(expanded.contains("named fields"));
    }
}
