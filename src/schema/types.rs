//! Schema types
//!
//! Shapes returned by the Strapi content-type builder endpoint. Everything is
//! read-only and re-fetched per invocation.

use super::mapping::FieldKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Singleton or collection content type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentTypeKind {
    #[default]
    SingleType,
    CollectionType,
}

/// One content type as described by the schema introspection endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentTypeSchema {
    /// Unique identifier, e.g. `api::article.article`
    pub uid: String,

    /// Owning plugin (`admin`, `users-permissions`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin: Option<String>,

    /// API identifier, e.g. `article`
    #[serde(rename = "apiID", default)]
    pub api_id: String,

    /// Schema block
    pub schema: SchemaInfo,
}

impl ContentTypeSchema {
    /// Plural name, which is also the REST path segment
    pub fn plural_name(&self) -> &str {
        &self.schema.plural_name
    }

    /// Human-readable name
    pub fn display_name(&self) -> &str {
        &self.schema.display_name
    }

    /// Attribute definition by field name
    pub fn attribute(&self, name: &str) -> Option<&FieldAttribute> {
        self.schema.attributes.get(name)
    }
}

/// The `schema` block of a content type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaInfo {
    #[serde(default)]
    pub kind: ContentTypeKind,

    #[serde(default)]
    pub display_name: String,

    #[serde(default)]
    pub collection_name: String,

    #[serde(default)]
    pub singular_name: String,

    #[serde(default)]
    pub plural_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Missing means hidden
    #[serde(default)]
    pub visible: bool,

    #[serde(default)]
    pub attributes: BTreeMap<String, FieldAttribute>,
}

/// One attribute (field) definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldAttribute {
    #[serde(rename = "type")]
    pub kind: FieldKind,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub unique: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,

    /// Numeric lower bound (a string for big integers)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Value>,

    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,

    // Relation metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_attribute: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inversed_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapped_by: Option<String>,

    // Visibility
    #[serde(default)]
    pub private: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configurable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

impl FieldAttribute {
    /// An attribute of the given kind with no metadata
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            required: false,
            unique: false,
            default: None,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
            enum_values: Vec::new(),
            relation: None,
            target: None,
            target_attribute: None,
            inversed_by: None,
            mapped_by: None,
            private: false,
            configurable: None,
            writable: None,
            visible: None,
        }
    }

    /// Whether the attribute can be set through the REST API
    pub fn is_writable(&self) -> bool {
        !self.private && self.writable != Some(false) && self.visible != Some(false)
    }
}
