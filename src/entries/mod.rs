//! Entries module
//!
//! Reading and writing content-type entries, and flattening them into the
//! single-level records the host platform consumes.

mod client;
mod convert;
mod types;

pub use client::{write_body, EntryClient};
pub use convert::{flatten, flatten_for_polling};
pub use types::{Entry, Meta, Pagination, StrapiResponse};
