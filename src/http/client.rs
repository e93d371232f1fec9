//! HTTP client for the Strapi REST API
//!
//! Provides a client that:
//! - Resolves paths against the instance base URL
//! - Runs the auth and status-classification middleware on every call
//! - Decodes JSON bodies
//!
//! No retry or backoff: a failed call surfaces at once.

use super::middleware::{self, ResponseContext};
use super::query::QueryParams;
use crate::auth::Credentials;
use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: format!("strapi-connector/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters
    pub query: QueryParams,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Request body (JSON)
    pub body: Option<Value>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.set(key, value);
        self
    }

    /// Replace all query parameters
    #[must_use]
    pub fn params(mut self, params: QueryParams) -> Self {
        self.query = params;
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// A response that made it through the middleware
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status (always 2xx)
    pub status: StatusCode,
    /// Request URL without query string
    pub url: String,
    /// Raw body text
    pub body: String,
}

impl HttpResponse {
    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// HTTP client bound to one set of credentials
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    credentials: Credentials,
}

impl HttpClient {
    /// Create a client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, HttpClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(credentials: Credentials, config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            config,
            credentials,
        })
    }

    /// Credentials this client authenticates with
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Make a GET request and parse the JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: QueryParams) -> Result<T> {
        self.request_json(Method::GET, path, RequestConfig::new().params(query))
            .await
    }

    /// Make a request and parse the JSON response
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        config: RequestConfig,
    ) -> Result<T> {
        self.request(method, path, config).await?.json()
    }

    /// Make a generic request
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        config: RequestConfig,
    ) -> Result<HttpResponse> {
        let url = self.credentials.url(path)?.to_string();

        let mut headers = HeaderMap::new();
        for (key, value) in self.config.default_headers.iter().chain(&config.headers) {
            insert_header(&mut headers, key, value)?;
        }
        middleware::before_send(&mut headers, &self.credentials)?;

        let mut req = self.client.request(method.clone(), &url).headers(headers);
        if !config.query.is_empty() {
            req = req.query(config.query.as_slice());
        }
        if let Some(ref body) = config.body {
            req = req.json(body);
        }

        debug!("{} {} ({} params)", method, url, config.query.len());
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        let ctx = ResponseContext {
            url: &url,
            params: &config.query,
            body: &body,
        };
        middleware::after_receive(status, &ctx)?;

        if !status.is_success() {
            return Err(Error::upstream(
                status.as_u16(),
                middleware::failure_message(&ctx, status.canonical_reason().unwrap_or("Request failed")),
            ));
        }

        debug!("Request succeeded: {} {} -> {}", method, url, status.as_u16());
        Ok(HttpResponse { status, url, body })
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

fn insert_header(headers: &mut HeaderMap, key: &str, value: &str) -> Result<()> {
    let name = HeaderName::from_bytes(key.as_bytes())
        .map_err(|e| Error::config(format!("Invalid header name '{key}': {e}")))?;
    let value = HeaderValue::from_str(value)
        .map_err(|e| Error::config(format!("Invalid value for header '{key}': {e}")))?;
    headers.insert(name, value);
    Ok(())
}
