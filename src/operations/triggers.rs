//! Polling triggers
//!
//! Each poll refetches the newest entries by creation or update time. No
//! cursor is kept between polls; the host deduplicates on the string `id`.

use super::fields::{content_type_field, limit_field, params_field};
use super::inputs::{limit, raw_params, required_str};
use crate::connector::{Operation, OperationDefinition, OperationKind};
use crate::entries::{flatten_for_polling, EntryClient};
use crate::error::Result;
use crate::http::{HttpClient, QueryParams, PAGE_SIZE_KEY, SORT_KEY};
use crate::types::{JsonObject, JsonValue, DEFAULT_TRIGGER_LIMIT};
use async_trait::async_trait;
use serde_json::json;

/// Timestamp a trigger orders entries by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOrder {
    /// Newest created first
    Created,
    /// Most recently updated first
    Updated,
}

impl PollOrder {
    /// The Strapi sort expression
    pub fn sort(self) -> &'static str {
        match self {
            PollOrder::Created => "createdAt:desc",
            PollOrder::Updated => "updatedAt:desc",
        }
    }
}

/// Fetch the newest entries for a trigger; `accept_params` enables the raw `params` input
pub async fn poll_entries(
    client: &HttpClient,
    input: &JsonObject,
    order: PollOrder,
    accept_params: bool,
) -> Result<Vec<JsonObject>> {
    let content_type = required_str(input, "contentType")?;

    let mut params = QueryParams::new()
        .with(PAGE_SIZE_KEY, limit(input, DEFAULT_TRIGGER_LIMIT)?.to_string())
        .with(SORT_KEY, order.sort());
    if accept_params {
        params.merge(raw_params(input)?);
    }

    let response = EntryClient::new(client).list(content_type, params).await?;
    Ok(response.data.iter().map(flatten_for_polling).collect())
}

fn to_array(records: Vec<JsonObject>) -> JsonValue {
    JsonValue::Array(records.into_iter().map(JsonValue::Object).collect())
}

/// `new_entry`
#[derive(Debug, Clone, Copy, Default)]
pub struct NewEntry;

#[async_trait]
impl Operation for NewEntry {
    fn key(&self) -> &'static str {
        "new_entry"
    }

    fn definition(&self) -> OperationDefinition {
        OperationDefinition::new(self.key(), OperationKind::Trigger, "Entry")
            .display(
                "New Entry",
                "Triggers when a new entry is created in a Strapi content type.",
            )
            .inputs(vec![
                content_type_field("Select the content type to monitor for new entries"),
                limit_field(DEFAULT_TRIGGER_LIMIT),
            ])
            .sample(json!({
                "id": "1",
                "title": "Sample Entry",
                "description": "This is a sample entry",
                "createdAt": "2024-01-01T00:00:00.000Z",
                "updatedAt": "2024-01-01T00:00:00.000Z",
                "publishedAt": "2024-01-01T00:00:00.000Z"
            }))
    }

    async fn perform(&self, client: &HttpClient, input: &JsonObject) -> Result<JsonValue> {
        Ok(to_array(
            poll_entries(client, input, PollOrder::Created, false).await?,
        ))
    }
}

/// `updated_entry`
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdatedEntry;

#[async_trait]
impl Operation for UpdatedEntry {
    fn key(&self) -> &'static str {
        "updated_entry"
    }

    fn definition(&self) -> OperationDefinition {
        OperationDefinition::new(self.key(), OperationKind::Trigger, "Entry")
            .display(
                "Updated Entry",
                "Triggers when an entry is updated in a Strapi content type.",
            )
            .inputs(vec![
                content_type_field("Select the content type to monitor for updated entries"),
                limit_field(DEFAULT_TRIGGER_LIMIT),
                params_field("Additional parameters to pass to the API (e.g., populate[transaction], filters[status][$eq]=published). Separate multiple parameters with &."),
            ])
            .sample(json!({
                "id": "1",
                "title": "Updated Sample Entry",
                "description": "This is an updated sample entry",
                "createdAt": "2024-01-01T00:00:00.000Z",
                "updatedAt": "2024-01-02T00:00:00.000Z",
                "publishedAt": "2024-01-01T00:00:00.000Z"
            }))
    }

    async fn perform(&self, client: &HttpClient, input: &JsonObject) -> Result<JsonValue> {
        Ok(to_array(
            poll_entries(client, input, PollOrder::Updated, true).await?,
        ))
    }
}
