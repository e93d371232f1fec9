//! Entry search

use super::fields::{content_type_field, limit_field, params_field, InputField, InputType};
use super::inputs::{limit, optional_str, raw_params, required_str};
use crate::connector::{Operation, OperationDefinition, OperationKind};
use crate::entries::{flatten, EntryClient};
use crate::error::Result;
use crate::http::{HttpClient, QueryParams, PAGE_SIZE_KEY, SORT_KEY};
use crate::types::{JsonObject, JsonValue, DEFAULT_SEARCH_LIMIT, DEFAULT_SORT};
use async_trait::async_trait;
use serde_json::json;

/// Fields the free-text query is matched against
pub const SEARCH_FIELDS: [&str; 2] = ["title", "description"];

/// Query parameters for a search; raw `params` override everything else
pub fn search_params(input: &JsonObject) -> Result<QueryParams> {
    let mut params = QueryParams::new()
        .with(PAGE_SIZE_KEY, limit(input, DEFAULT_SEARCH_LIMIT)?.to_string())
        .with(SORT_KEY, DEFAULT_SORT);

    if let Some(query) = optional_str(input, "query") {
        for field in SEARCH_FIELDS {
            params.set(format!("filters[{field}][$containsi]"), query);
        }
    }

    params.merge(raw_params(input)?);
    Ok(params)
}

/// Search entries of a content type
pub async fn find_entry(client: &HttpClient, input: &JsonObject) -> Result<Vec<JsonObject>> {
    let content_type = required_str(input, "contentType")?;
    let params = search_params(input)?;

    let response = EntryClient::new(client).list(content_type, params).await?;
    Ok(response.data.iter().map(flatten).collect())
}

/// `find_entry`
#[derive(Debug, Clone, Copy, Default)]
pub struct FindEntry;

#[async_trait]
impl Operation for FindEntry {
    fn key(&self) -> &'static str {
        "find_entry"
    }

    fn definition(&self) -> OperationDefinition {
        OperationDefinition::new(self.key(), OperationKind::Search, "Entry")
            .display("Find Entry", "Searches for entries in a Strapi content type.")
            .inputs(vec![
                content_type_field("Select the content type to search in"),
                InputField::new("query", InputType::String, "Search Query")
                    .help("Search for entries containing this text in the title or description"),
                limit_field(DEFAULT_SEARCH_LIMIT),
                params_field("Additional parameters to pass to the API (e.g., populate[transaction], filters[status][$eq]=published). Separate multiple parameters with &."),
            ])
            .sample(json!({
                "id": 1,
                "title": "Found Entry",
                "description": "This is a found entry",
                "createdAt": "2024-01-01T00:00:00.000Z",
                "updatedAt": "2024-01-01T00:00:00.000Z",
                "publishedAt": "2024-01-01T00:00:00.000Z"
            }))
    }

    async fn perform(&self, client: &HttpClient, input: &JsonObject) -> Result<JsonValue> {
        let records = find_entry(client, input).await?;
        Ok(JsonValue::Array(records.into_iter().map(JsonValue::Object).collect()))
    }
}
