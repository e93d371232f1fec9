//! Create operations
//!
//! Two variants: a basic create taking the fields as one JSON document, and
//! a schema-driven create whose inputs mirror the content type's attributes.

use super::coerce::coerce_value;
use super::fields::{content_type_field, is_input_attribute, params_field, InputField, InputType};
use super::inputs::{flag, json_fields, raw_params, required_str};
use crate::connector::{Operation, OperationDefinition, OperationKind};
use crate::entries::{flatten, EntryClient};
use crate::error::Result;
use crate::http::{HttpClient, QueryParams};
use crate::schema::find_content_type;
use crate::types::{format_timestamp, JsonObject, JsonValue};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tracing::debug;

/// Create an entry from a JSON-encoded `fields` input
pub async fn create_entry(client: &HttpClient, input: &JsonObject) -> Result<JsonObject> {
    let content_type = required_str(input, "contentType")?;
    let fields = json_fields(input)?;
    let params = raw_params(input)?;

    let response = EntryClient::new(client)
        .create(content_type, fields, params)
        .await?;
    Ok(flatten(&response.data))
}

/// Create an entry from per-attribute inputs, coerced by the schema
pub async fn create_entry_advanced(client: &HttpClient, input: &JsonObject) -> Result<JsonObject> {
    let content_type = required_str(input, "contentType")?;
    let published = flag(input, "published", true)?;

    let schema = find_content_type(client, content_type).await?;

    let mut data = JsonObject::new();
    for (name, attr) in &schema.schema.attributes {
        if !is_input_attribute(name, attr) {
            continue;
        }
        let Some(raw) = input.get(name) else {
            continue;
        };
        if let Some(value) = coerce_value(name, attr, raw)? {
            data.insert(name.clone(), value);
        }
    }

    let published_at = if published {
        JsonValue::String(format_timestamp(Utc::now()))
    } else {
        JsonValue::Null
    };
    data.insert("publishedAt".to_string(), published_at);

    debug!("Creating {} entry with {} fields", content_type, data.len());
    let response = EntryClient::new(client)
        .create(content_type, data, QueryParams::new())
        .await?;
    Ok(flatten(&response.data))
}

fn sample() -> JsonValue {
    json!({
        "id": 1,
        "title": "New Entry",
        "description": "This is a new entry",
        "content": "This is the content of the entry",
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-01T00:00:00.000Z",
        "publishedAt": "2024-01-01T00:00:00.000Z"
    })
}

/// `create_entry`
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateEntry;

#[async_trait]
impl Operation for CreateEntry {
    fn key(&self) -> &'static str {
        "create_entry"
    }

    fn definition(&self) -> OperationDefinition {
        OperationDefinition::new(self.key(), OperationKind::Create, "Entry")
            .display(
                "Create Entry",
                "Creates a new entry in a Strapi content type.",
            )
            .inputs(vec![
                content_type_field("Select the content type to create an entry in"),
                InputField::new("fields", InputType::Text, "Entry Fields (JSON)")
                    .required()
                    .help("JSON object containing all the fields for this entry. Use the \"Content Type Schema\" resource to see available fields."),
                params_field("Additional parameters to pass to the API when creating the entry (e.g., populate[transaction]). Separate multiple parameters with &."),
            ])
            .sample(sample())
    }

    async fn perform(&self, client: &HttpClient, input: &JsonObject) -> Result<JsonValue> {
        Ok(JsonValue::Object(create_entry(client, input).await?))
    }
}

/// `create_entry_advanced`
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateEntryAdvanced;

#[async_trait]
impl Operation for CreateEntryAdvanced {
    fn key(&self) -> &'static str {
        "create_entry_advanced"
    }

    fn definition(&self) -> OperationDefinition {
        OperationDefinition::new(self.key(), OperationKind::Create, "Entry")
            .display(
                "Create Entry (Advanced)",
                "Creates a new entry with one input per content-type field.",
            )
            .inputs(vec![
                content_type_field("Select the content type to create an entry in"),
                InputField::new("published", InputType::Boolean, "Published")
                    .help("Publish the entry immediately (default: true)")
                    .default_value("true"),
            ])
            .dynamic_fields("content_type_fields")
            .sample(sample())
    }

    async fn perform(&self, client: &HttpClient, input: &JsonObject) -> Result<JsonValue> {
        Ok(JsonValue::Object(create_entry_advanced(client, input).await?))
    }
}
