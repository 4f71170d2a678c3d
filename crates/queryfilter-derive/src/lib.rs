//! # queryfilter-derive
//!
//! `#[derive(FilterModel)]` turns `#[filter(...)]` field attributes into a
//! `queryfilter_core::traits::FilterModel` implementation.
//!
//! ```ignore
//! #[derive(FilterModel)]
//! #[filter(table = "users")]
//! struct User {
//!     id: i64,
//!     #[filter(searchable, filterable)]
//!     username: String,
//!     #[filter(param = "name", searchable)]
//!     full_name: String,
//!     password: String,
//! }
//! ```

use proc_macro::TokenStream;

mod attrs;
mod filter_model;

#[proc_macro_derive(FilterModel, attributes(filter))]
pub fn derive_filter_model(input: TokenStream) -> TokenStream {
    filter_model::derive_filter_model(input.into()).into()
}
