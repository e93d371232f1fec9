//! Credential check
//!
//! Validates the base URL locally, then probes the schema introspection
//! endpoint; a token without access fails there with an authentication
//! error from the middleware.

use crate::error::Result;
use crate::http::{HttpClient, QueryParams};
use crate::types::{JsonValue, CONTENT_TYPES_PATH};
use tracing::debug;

/// Test the client's credentials against the Strapi instance
pub async fn test_authentication(client: &HttpClient) -> Result<JsonValue> {
    client.credentials().validate()?;

    let body: JsonValue = client.get_json(CONTENT_TYPES_PATH, QueryParams::new()).await?;
    debug!(
        base_url = client.credentials().base_url.as_str(),
        "Credentials accepted"
    );
    Ok(body)
}
