// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Strapi Connector
//!
//! Connects a workflow-automation host to the Strapi headless CMS: poll for
//! new and updated entries, search entries, create entries, and discover
//! content-type schemas.
//!
//! The host owns the invocation loop. Each call hands the connector a
//! [`Bundle`] (credentials + inputs) and an operation key, and gets plain
//! JSON back.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use strapi_connector::{Bundle, Connector, Credentials};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> strapi_connector::Result<()> {
//!     let connector = Connector::new();
//!     let creds = Credentials::new("https://cms.example.com", "api-token");
//!
//!     let input = json!({"contentType": "articles", "query": "rust"});
//!     let bundle = Bundle::new(creds, input.as_object().cloned().unwrap_or_default());
//!
//!     let entries = connector.perform("find_entry", &bundle).await?;
//!     println!("{entries}");
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          Connector                           │
//! │  perform(key, bundle) → JSON     definition() → AppDefinition│
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌────────────┬────────────────┼────────────────┬──────────────┐
//! │ Triggers   │ Search         │ Creates        │ Resources    │
//! ├────────────┴────────────────┴────────────────┴──────────────┤
//! │ Schema discovery  │  Entry CRUD + flatten  │  Coercion      │
//! ├───────────────────┴────────────────────────┴────────────────┤
//! │ HTTP client: bearer auth → request → status classification  │
//! └──────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Document public struct fields before publishing 1.0

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and constants
pub mod types;

/// Connector configuration
pub mod config;

/// Credentials and the authentication test
pub mod auth;

/// HTTP client and middleware
pub mod http;

/// Content-type schemas and discovery
pub mod schema;

/// Entry CRUD and flattening
pub mod entries;

/// Triggers, search, creates and resources
pub mod operations;

/// Operation registry and app definition
pub mod connector;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::Credentials;
pub use config::ConnectorConfig;
pub use connector::{AppDefinition, Bundle, Connector, Operation, OperationDefinition};
pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
