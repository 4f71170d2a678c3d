//! Collaborator traits defined in `queryfilter-core` and implemented by
//! models and query builders.

pub mod model;
pub mod modifier;

pub use model::{FieldDescriptor, FilterModel};
pub use modifier::QueryModifier;
