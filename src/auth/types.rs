//! Credential types
//!
//! Credentials arrive from the host with every invocation and live only for
//! that invocation.

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use url::Url;

static HTTP_URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://").unwrap());

/// Connection credentials for a Strapi instance
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// Instance URL, e.g. `https://cms.example.com`
    #[serde(default)]
    pub base_url: String,
    /// Bearer API token created in the Strapi admin panel
    #[serde(default)]
    pub api_token: String,
}

impl Credentials {
    /// Create credentials from a base URL and token
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: api_token.into(),
        }
    }

    /// Check the base URL is present and uses an HTTP scheme
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::validation("Base URL is required"));
        }
        if !HTTP_URL.is_match(&self.base_url) {
            return Err(Error::validation(
                "Base URL must start with http:// or https://",
            ));
        }
        Ok(())
    }

    /// The bearer token, if one was supplied
    pub fn token(&self) -> Option<&str> {
        if self.api_token.is_empty() {
            None
        } else {
            Some(&self.api_token)
        }
    }

    /// Join a path onto the base URL, keeping any path prefix the base carries
    pub fn url(&self, path: &str) -> Result<Url> {
        let base = Url::parse(&format!("{}/", self.base_url.trim_end_matches('/')))?;
        Ok(base.join(path.trim_start_matches('/'))?)
    }

    /// Label the host shows for this connection
    pub fn connection_label(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url)
            .field("has_api_token", &!self.api_token.is_empty())
            .finish()
    }
}
