//! Common types used throughout the connector
//!
//! Shared type aliases, Strapi path constants and the timestamp format
//! the host expects.

use chrono::{DateTime, SecondsFormat, Utc};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Strapi API Paths
// ============================================================================

/// Prefix of the Strapi REST API
pub const API_BASE: &str = "/api";

/// Schema introspection endpoint, also used to probe credentials
pub const CONTENT_TYPES_PATH: &str = "/api/content-type-builder/content-types";

/// Namespace prefix of user-defined content types
pub const API_NAMESPACE: &str = "api::";

// ============================================================================
// Query Defaults
// ============================================================================

/// Page size applied to every entry listing unless overridden
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Default sort applied to every entry listing unless overridden
pub const DEFAULT_SORT: &str = "createdAt:desc";

/// Default number of entries returned by the search operation
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// Default number of entries returned by polling triggers
pub const DEFAULT_TRIGGER_LIMIT: u32 = 50;

// ============================================================================
// Reserved Entry Keys
// ============================================================================

/// Keys the flattened entry reserves for entry metadata
pub const RESERVED_KEYS: [&str; 4] = ["id", "createdAt", "updatedAt", "publishedAt"];

/// Format a timestamp the way Strapi writes them (`2024-01-01T00:00:00.000Z`)
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}
