//! Entry CRUD adapter
//!
//! One authenticated call per operation against `/api/{contentType}[/{id}]`.

use super::types::{Entry, StrapiResponse};
use crate::error::{Error, Result};
use crate::http::{HttpClient, QueryParams, RequestConfig};
use crate::types::{JsonObject, JsonValue, API_BASE};
use reqwest::Method;
use serde_json::json;
use tracing::debug;

/// CRUD operations on the entries of a content type
#[derive(Debug, Clone, Copy)]
pub struct EntryClient<'a> {
    client: &'a HttpClient,
}

impl<'a> EntryClient<'a> {
    /// Wrap an HTTP client
    pub fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// List entries; `params` override the page-size and sort defaults
    pub async fn list(
        &self,
        content_type: &str,
        params: QueryParams,
    ) -> Result<StrapiResponse<Vec<Entry>>> {
        let mut query = QueryParams::listing_defaults();
        query.merge(params);

        let response: StrapiResponse<Vec<Entry>> = self
            .client
            .get_json(&collection_path(content_type)?, query)
            .await?;
        debug!("Listed {} {} entries", response.data.len(), content_type);
        Ok(response)
    }

    /// Fetch one entry by id
    pub async fn get(&self, content_type: &str, id: u64) -> Result<StrapiResponse<Entry>> {
        self.client
            .get_json(&entry_path(content_type, id)?, QueryParams::new())
            .await
    }

    /// Create an entry from field values
    pub async fn create(
        &self,
        content_type: &str,
        fields: JsonObject,
        params: QueryParams,
    ) -> Result<StrapiResponse<Entry>> {
        let config = RequestConfig::new()
            .params(params)
            .json(write_body(fields));
        self.client
            .request_json(Method::POST, &collection_path(content_type)?, config)
            .await
    }

    /// Replace field values of an existing entry
    pub async fn update(
        &self,
        content_type: &str,
        id: u64,
        fields: JsonObject,
    ) -> Result<StrapiResponse<Entry>> {
        let config = RequestConfig::new().json(write_body(fields));
        self.client
            .request_json(Method::PUT, &entry_path(content_type, id)?, config)
            .await
    }

    /// Delete an entry; any response body is ignored
    pub async fn delete(&self, content_type: &str, id: u64) -> Result<()> {
        self.client
            .request(Method::DELETE, &entry_path(content_type, id)?, RequestConfig::new())
            .await?;
        Ok(())
    }
}

/// Request body for creates and updates
pub fn write_body(fields: JsonObject) -> JsonValue {
    json!({ "data": fields })
}

fn collection_path(content_type: &str) -> Result<String> {
    let content_type = content_type.trim();
    if content_type.is_empty() {
        return Err(Error::validation("Content type is required"));
    }
    if content_type.contains(['/', '?', '#']) {
        return Err(Error::validation(format!(
            "Invalid content type '{content_type}'"
        )));
    }
    Ok(format!("{API_BASE}/{content_type}"))
}

fn entry_path(content_type: &str, id: u64) -> Result<String> {
    Ok(format!("{}/{id}", collection_path(content_type)?))
}
