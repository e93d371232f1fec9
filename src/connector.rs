//! Connector surface
//!
//! Defines the `Operation` trait every handler implements and the
//! `Connector` that dispatches host invocations to them by key.

use crate::auth::{test_authentication, Credentials};
use crate::config::ConnectorConfig;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::operations::{
    ContentTypeFields, ContentTypeSchemaResource, ContentTypes, CreateEntry,
    CreateEntryAdvanced, FindEntry, InputField, InputType, NewEntry, UpdatedEntry,
};
use crate::types::{JsonObject, JsonValue};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// Invocation
// ============================================================================

/// One host invocation: credentials plus the user's inputs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    pub auth_data: Credentials,

    #[serde(default)]
    pub input_data: JsonObject,
}

impl Bundle {
    /// Create a bundle
    pub fn new(auth_data: Credentials, input_data: JsonObject) -> Self {
        Self {
            auth_data,
            input_data,
        }
    }
}

// ============================================================================
// Operation Definitions (for the host UI)
// ============================================================================

/// Where an operation appears in the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Trigger,
    Search,
    Create,
    Resource,
}

/// Display metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayInfo {
    pub label: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
}

/// Declared shape of one operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDefinition {
    pub key: String,
    pub kind: OperationKind,
    pub noun: String,
    pub display: DisplayInfo,
    #[serde(default)]
    pub input_fields: Vec<InputField>,
    /// Resource that supplies extra inputs once the static ones are filled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_fields: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample: Option<JsonValue>,
}

impl OperationDefinition {
    /// Start a definition
    pub fn new(key: impl Into<String>, kind: OperationKind, noun: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind,
            noun: noun.into(),
            display: DisplayInfo::default(),
            input_fields: Vec::new(),
            dynamic_fields: None,
            sample: None,
        }
    }

    #[must_use]
    pub fn display(mut self, label: impl Into<String>, description: impl Into<String>) -> Self {
        self.display.label = label.into();
        self.display.description = description.into();
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.display.hidden = true;
        self
    }

    #[must_use]
    pub fn inputs(mut self, fields: Vec<InputField>) -> Self {
        self.input_fields = fields;
        self
    }

    #[must_use]
    pub fn dynamic_fields(mut self, resource: impl Into<String>) -> Self {
        self.dynamic_fields = Some(resource.into());
        self
    }

    #[must_use]
    pub fn sample(mut self, sample: JsonValue) -> Self {
        self.sample = Some(sample);
        self
    }
}

/// Authentication section of the app definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthDefinition {
    #[serde(rename = "type")]
    pub auth_type: String,
    pub fields: Vec<InputField>,
    pub connection_label: String,
}

/// Everything the host needs to render the connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppDefinition {
    pub name: String,
    pub version: String,
    pub authentication: AuthDefinition,
    pub triggers: Vec<OperationDefinition>,
    pub searches: Vec<OperationDefinition>,
    pub creates: Vec<OperationDefinition>,
    pub resources: Vec<OperationDefinition>,
}

// ============================================================================
// Operation Trait
// ============================================================================

/// A handler the host can invoke
#[async_trait]
pub trait Operation: Send + Sync {
    /// Unique operation key
    fn key(&self) -> &'static str;

    /// Declared inputs and display metadata
    fn definition(&self) -> OperationDefinition;

    /// Run the operation with the user's inputs
    async fn perform(&self, client: &HttpClient, input: &JsonObject) -> Result<JsonValue>;
}

// ============================================================================
// Connector
// ============================================================================

/// The Strapi connector: a registry of operations plus shared configuration
pub struct Connector {
    config: ConnectorConfig,
    operations: Vec<Box<dyn Operation>>,
}

impl Connector {
    /// Connector with default configuration
    pub fn new() -> Self {
        Self::with_config(ConnectorConfig::default())
    }

    /// Connector with custom configuration
    pub fn with_config(config: ConnectorConfig) -> Self {
        let operations: Vec<Box<dyn Operation>> = vec![
            Box::new(NewEntry),
            Box::new(UpdatedEntry),
            Box::new(FindEntry),
            Box::new(CreateEntry),
            Box::new(CreateEntryAdvanced),
            Box::new(ContentTypes),
            Box::new(ContentTypeFields),
            Box::new(ContentTypeSchemaResource),
        ];
        Self { config, operations }
    }

    /// Keys of all registered operations
    pub fn operation_keys(&self) -> Vec<&'static str> {
        self.operations.iter().map(|op| op.key()).collect()
    }

    /// Look up an operation by key
    pub fn operation(&self, key: &str) -> Option<&dyn Operation> {
        self.operations
            .iter()
            .find(|op| op.key() == key)
            .map(|op| op.as_ref())
    }

    /// Run the operation `key` for one invocation
    pub async fn perform(&self, key: &str, bundle: &Bundle) -> Result<JsonValue> {
        let operation = self
            .operation(key)
            .ok_or_else(|| Error::not_found(format!("Unknown operation '{key}'")))?;

        debug!(operation = key, "Performing operation");
        let client = self.client(&bundle.auth_data)?;
        operation.perform(&client, &bundle.input_data).await
    }

    /// Test the bundle's credentials
    pub async fn test_auth(&self, bundle: &Bundle) -> Result<JsonValue> {
        let client = self.client(&bundle.auth_data)?;
        test_authentication(&client).await
    }

    /// The full app definition
    pub fn definition(&self) -> AppDefinition {
        let mut app = AppDefinition {
            name: "strapi".to_string(),
            version: crate::VERSION.to_string(),
            authentication: auth_definition(),
            triggers: Vec::new(),
            searches: Vec::new(),
            creates: Vec::new(),
            resources: Vec::new(),
        };

        for op in &self.operations {
            let def = op.definition();
            match def.kind {
                OperationKind::Trigger => app.triggers.push(def),
                OperationKind::Search => app.searches.push(def),
                OperationKind::Create => app.creates.push(def),
                OperationKind::Resource => app.resources.push(def),
            }
        }
        app
    }

    fn client(&self, credentials: &Credentials) -> Result<HttpClient> {
        HttpClient::with_config(credentials.clone(), self.config.http.to_client_config())
    }
}

impl Default for Connector {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Connector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connector")
            .field("config", &self.config)
            .field("operations", &self.operation_keys())
            .finish()
    }
}

fn auth_definition() -> AuthDefinition {
    AuthDefinition {
        auth_type: "custom".to_string(),
        fields: vec![
            InputField::new("baseUrl", InputType::String, "Base URL")
                .required()
                .help("Your Strapi instance URL (e.g., https://your-strapi-app.com)")
                .placeholder("https://your-strapi-app.com"),
            InputField::new("apiToken", InputType::Password, "API Token")
                .required()
                .help("Your Strapi API token. You can create one in Settings > API Tokens in your Strapi admin panel.")
                .placeholder("your-api-token-here"),
        ],
        connection_label: "{{baseUrl}}".to_string(),
    }
}
