//! Request/response middleware
//!
//! Runs around every exchange with Strapi: `before_send` injects the bearer
//! token, `after_receive` turns auth failures, missing resources and server
//! errors into classified errors carrying enough context to self-diagnose.

use super::query::QueryParams;
use crate::auth::Credentials;
use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::warn;

const UNAUTHORIZED_MESSAGE: &str =
    "Your API token is invalid or has expired. Please check your Strapi API token.";
const FORBIDDEN_MESSAGE: &str =
    "You do not have permission to access this resource. Please check your API token permissions.";
const NOT_FOUND_MESSAGE: &str = "The requested resource was not found. Please check your Strapi instance URL and content-type configuration.";
const SERVER_ERROR_MESSAGE: &str = "Strapi server error. Please try again later.";

/// What the response classifier needs to know about the exchange
#[derive(Debug, Clone, Copy)]
pub struct ResponseContext<'a> {
    /// Request URL without the query string
    pub url: &'a str,
    /// Query parameters sent with the request
    pub params: &'a QueryParams,
    /// Raw response body
    pub body: &'a str,
}

/// Inject auth headers when a token is present; other headers are kept
pub fn before_send(headers: &mut HeaderMap, credentials: &Credentials) -> Result<()> {
    let Some(token) = credentials.token() else {
        return Ok(());
    };

    let bearer = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|_| Error::validation("API token contains characters not allowed in a header"))?;
    headers.insert(AUTHORIZATION, bearer);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(())
}

/// Classify the response status; statuses that are not classified pass
pub fn after_receive(status: StatusCode, ctx: &ResponseContext<'_>) -> Result<()> {
    let code = status.as_u16();
    let err = match code {
        401 => Error::authentication(code, failure_message(ctx, UNAUTHORIZED_MESSAGE)),
        403 => Error::authentication(code, failure_message(ctx, FORBIDDEN_MESSAGE)),
        404 => Error::invalid_response(code, failure_message(ctx, NOT_FOUND_MESSAGE)),
        500.. => Error::invalid_response(code, failure_message(ctx, SERVER_ERROR_MESSAGE)),
        _ => return Ok(()),
    };

    warn!(status = code, url = ctx.url, "Strapi request failed");
    Err(err)
}

/// Build the user-facing failure message for an exchange
pub fn failure_message(ctx: &ResponseContext<'_>, fallback: &str) -> String {
    let upstream = upstream_error_message(ctx.body);
    format!(
        "URL: {}\nParams: {}\nError: {}",
        ctx.url,
        ctx.params.to_json(),
        upstream.as_deref().unwrap_or(fallback)
    )
}

/// Pull `error.message` out of a Strapi error body
pub fn upstream_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .pointer("/error/message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(ToString::to_string)
}
