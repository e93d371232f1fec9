//! Schema module
//!
//! Content-type schemas from the Strapi introspection endpoint.
//!
//! # Features
//!
//! - **Schema Types**: Content types, attributes and their metadata
//! - **Kind Mapping**: Strapi attribute kinds to host value types
//! - **Discovery**: Selectable content types for dropdowns and lookups

mod discovery;
mod mapping;
mod types;

pub use discovery::{
    find_content_type, is_selectable, list_content_types, list_selectable_content_types,
    selectable_options, ContentTypeOption,
};
pub use mapping::{map_field_type, FieldKind, OutputType};
pub use types::{ContentTypeKind, ContentTypeSchema, FieldAttribute, SchemaInfo};
