//! Entry flattening
//!
//! The host wants one flat record per entry. Metadata goes in first, then
//! every field value; a field named like a metadata key overwrites it.

use super::types::Entry;
use crate::types::{JsonObject, JsonValue, RESERVED_KEYS};
use tracing::debug;

/// Flatten an entry into a single-level record
pub fn flatten(entry: &Entry) -> JsonObject {
    let mut record = JsonObject::new();
    record.insert("id".to_string(), JsonValue::from(entry.id));

    for (key, value) in [("createdAt", &entry.created_at), ("updatedAt", &entry.updated_at)] {
        if let Some(value) = value {
            record.insert(key.to_string(), JsonValue::String(value.clone()));
        }
    }
    // Drafts carry an explicit null
    let published_at = entry.published_at.clone().map_or(JsonValue::Null, JsonValue::String);
    record.insert("publishedAt".to_string(), published_at);

    for (key, value) in entry.fields.iter().chain(&entry.attributes) {
        let previous = record.insert(key.clone(), value.clone());
        if RESERVED_KEYS.contains(&key.as_str()) && previous.is_some_and(|p| !p.is_null() && p != *value) {
            debug!(entry_id = entry.id, field = key.as_str(), "Field overwrites entry metadata");
        }
    }

    record
}

/// Flatten for polling triggers: `id` is always a string so the host can
/// deduplicate across polls
pub fn flatten_for_polling(entry: &Entry) -> JsonObject {
    let mut record = flatten(entry);
    record.insert("id".to_string(), JsonValue::String(entry.id.to_string()));
    record
}
