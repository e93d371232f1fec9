//! Content-type discovery
//!
//! Fetches schemas from the introspection endpoint and narrows them to the
//! user-defined collection types an automation can work with.

use super::types::{ContentTypeKind, ContentTypeSchema};
use crate::error::{Error, Result};
use crate::http::{HttpClient, QueryParams};
use crate::types::{API_NAMESPACE, CONTENT_TYPES_PATH};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ContentTypesResponse {
    #[serde(default)]
    data: Vec<ContentTypeSchema>,
}

/// One selectable content type, as shown in a dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeOption {
    /// Plural name, used as the REST path segment
    pub id: String,
    /// Display name
    pub label: String,
}

impl From<&ContentTypeSchema> for ContentTypeOption {
    fn from(ct: &ContentTypeSchema) -> Self {
        Self {
            id: ct.schema.plural_name.clone(),
            label: ct.schema.display_name.clone(),
        }
    }
}

/// Fetch every content-type schema the instance exposes
pub async fn list_content_types(client: &HttpClient) -> Result<Vec<ContentTypeSchema>> {
    let response: ContentTypesResponse =
        client.get_json(CONTENT_TYPES_PATH, QueryParams::new()).await?;
    debug!("Fetched {} content types", response.data.len());
    Ok(response.data)
}

/// Visible, non-plugin, user-defined collection types only
pub fn is_selectable(ct: &ContentTypeSchema) -> bool {
    ct.schema.kind == ContentTypeKind::CollectionType
        && ct.schema.visible
        && ct.plugin.as_deref().map_or(true, str::is_empty)
        && ct.uid.starts_with(API_NAMESPACE)
}

/// Project schemas to dropdown options, keeping upstream order
pub fn selectable_options(schemas: &[ContentTypeSchema]) -> Vec<ContentTypeOption> {
    schemas
        .iter()
        .filter(|ct| is_selectable(ct))
        .map(ContentTypeOption::from)
        .collect()
}

/// Fetch and project the selectable content types
pub async fn list_selectable_content_types(client: &HttpClient) -> Result<Vec<ContentTypeOption>> {
    let schemas = list_content_types(client).await?;
    Ok(selectable_options(&schemas))
}

/// Resolve a selectable content type by its plural name
pub async fn find_content_type(client: &HttpClient, id: &str) -> Result<ContentTypeSchema> {
    list_content_types(client)
        .await?
        .into_iter()
        .filter(is_selectable)
        .find(|ct| ct.schema.plural_name == id)
        .ok_or_else(|| Error::not_found(format!("Content type '{id}' not found")))
}
