//! Entry types
//!
//! Strapi v4 nests fields under `attributes`; v5 puts them next to `id`.
//! Both shapes deserialize into [`Entry`]: top-level keys that are not
//! entry metadata land in `fields`.

use crate::types::JsonObject;
use serde::{Deserialize, Serialize};

/// One record of a content type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Numeric entry id
    pub id: u64,

    /// Nested field values (v4 shape)
    #[serde(default, skip_serializing_if = "JsonObject::is_empty")]
    pub attributes: JsonObject,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Absent or null for drafts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,

    /// Top-level field values (v5 shape)
    #[serde(flatten)]
    pub fields: JsonObject,
}

impl Entry {
    /// An entry with only an id
    pub fn new(id: u64) -> Self {
        Self {
            id,
            attributes: JsonObject::new(),
            created_at: None,
            updated_at: None,
            published_at: None,
            fields: JsonObject::new(),
        }
    }
}

/// Standard Strapi response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrapiResponse<T> {
    pub data: T,

    #[serde(default)]
    pub meta: Meta,
}

/// Response metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Page-based pagination metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub page_size: u64,
    #[serde(default)]
    pub page_count: u64,
    #[serde(default)]
    pub total: u64,
}
