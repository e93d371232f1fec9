//! Operations module
//!
//! The handlers the host invokes: polling triggers, search, creates and the
//! discovery resources, plus the input definitions and coercion they share.

pub mod coerce;
mod create;
pub mod fields;
pub mod inputs;
mod resources;
mod search;
mod triggers;

pub use create::{create_entry, create_entry_advanced, CreateEntry, CreateEntryAdvanced};
pub use fields::{InputField, InputType};
pub use resources::{
    content_type_fields, content_type_schema, ContentTypeDetail, ContentTypeFields,
    ContentTypeSchemaResource, ContentTypes, FieldDetail,
};
pub use search::{find_entry, search_params, FindEntry};
pub use triggers::{poll_entries, NewEntry, PollOrder, UpdatedEntry};
