//! Discovery resources
//!
//! Read-only listings the host uses to populate dropdowns and forms.

use super::fields::{content_type_field, schema_input_fields, InputField};
use super::inputs::required_str;
use crate::connector::{Operation, OperationDefinition, OperationKind};
use crate::error::Result;
use crate::http::HttpClient;
use crate::schema::{
    find_content_type, list_selectable_content_types, ContentTypeKind, ContentTypeOption,
    ContentTypeSchema, FieldKind, OutputType,
};
use crate::types::{JsonObject, JsonValue};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Schema summary of one content type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeDetail {
    pub id: String,
    pub uid: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub kind: ContentTypeKind,
    pub fields: Vec<FieldDetail>,
}

/// One attribute in a [`ContentTypeDetail`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDetail {
    pub name: String,
    pub kind: FieldKind,
    pub output_type: OutputType,
    pub required: bool,
    pub unique: bool,
    pub writable: bool,
}

impl From<&ContentTypeSchema> for ContentTypeDetail {
    fn from(ct: &ContentTypeSchema) -> Self {
        Self {
            id: ct.schema.plural_name.clone(),
            uid: ct.uid.clone(),
            label: ct.schema.display_name.clone(),
            description: ct.schema.description.clone(),
            kind: ct.schema.kind,
            fields: ct
                .schema
                .attributes
                .iter()
                .map(|(name, attr)| FieldDetail {
                    name: name.clone(),
                    kind: attr.kind.clone(),
                    output_type: attr.kind.output_type(),
                    required: attr.required,
                    unique: attr.unique,
                    writable: attr.is_writable(),
                })
                .collect(),
        }
    }
}

/// Input fields of a content type, for the advanced create form
pub async fn content_type_fields(client: &HttpClient, input: &JsonObject) -> Result<Vec<InputField>> {
    let content_type = required_str(input, "contentType")?;
    let schema = find_content_type(client, content_type).await?;
    Ok(schema_input_fields(&schema))
}

/// Schema detail of a content type
pub async fn content_type_schema(client: &HttpClient, input: &JsonObject) -> Result<ContentTypeDetail> {
    let content_type = required_str(input, "contentType")?;
    let schema = find_content_type(client, content_type).await?;
    Ok(ContentTypeDetail::from(&schema))
}

/// `content_types`
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentTypes;

#[async_trait]
impl Operation for ContentTypes {
    fn key(&self) -> &'static str {
        "content_types"
    }

    fn definition(&self) -> OperationDefinition {
        OperationDefinition::new(self.key(), OperationKind::Resource, "Content Type")
            .display(
                "Content Types",
                "Lists all available content types in your Strapi instance.",
            )
            .hidden()
            .sample(json!({"id": "articles", "label": "Article"}))
    }

    async fn perform(&self, client: &HttpClient, _input: &JsonObject) -> Result<JsonValue> {
        let options: Vec<ContentTypeOption> = list_selectable_content_types(client).await?;
        Ok(serde_json::to_value(options)?)
    }
}

/// `content_type_fields`
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentTypeFields;

#[async_trait]
impl Operation for ContentTypeFields {
    fn key(&self) -> &'static str {
        "content_type_fields"
    }

    fn definition(&self) -> OperationDefinition {
        OperationDefinition::new(self.key(), OperationKind::Resource, "Content Type Field")
            .display(
                "Content Type Fields",
                "Lists the writable fields of a content type as input fields.",
            )
            .hidden()
            .inputs(vec![content_type_field("Select the content type to describe")])
            .sample(json!({
                "key": "title",
                "type": "string",
                "required": true,
                "label": "Title",
                "helpText": "Strapi string field. Required."
            }))
    }

    async fn perform(&self, client: &HttpClient, input: &JsonObject) -> Result<JsonValue> {
        Ok(serde_json::to_value(content_type_fields(client, input).await?)?)
    }
}

/// `content_type_schema`
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentTypeSchemaResource;

#[async_trait]
impl Operation for ContentTypeSchemaResource {
    fn key(&self) -> &'static str {
        "content_type_schema"
    }

    fn definition(&self) -> OperationDefinition {
        OperationDefinition::new(self.key(), OperationKind::Resource, "Content Type Schema")
            .display(
                "Content Type Schema",
                "Shows the fields and field types of a content type.",
            )
            .inputs(vec![content_type_field("Select the content type to describe")])
            .sample(json!({
                "id": "articles",
                "uid": "api::article.article",
                "label": "Article",
                "kind": "collectionType",
                "fields": [{
                    "name": "title",
                    "kind": "string",
                    "outputType": "string",
                    "required": true,
                    "unique": false,
                    "writable": true
                }]
            }))
    }

    async fn perform(&self, client: &HttpClient, input: &JsonObject) -> Result<JsonValue> {
        Ok(serde_json::to_value(content_type_schema(client, input).await?)?)
    }
}
