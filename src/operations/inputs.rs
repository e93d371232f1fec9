//! Reading host input data

use crate::error::{Error, Result};
use crate::http::QueryParams;
use crate::types::{JsonObject, JsonValue};

/// A required, non-empty string input
pub fn required_str<'a>(input: &'a JsonObject, key: &str) -> Result<&'a str> {
    optional_str(input, key).ok_or_else(|| Error::validation(format!("Input '{key}' is required")))
}

/// A string input; missing, null and empty all read as `None`
pub fn optional_str<'a>(input: &'a JsonObject, key: &str) -> Option<&'a str> {
    input
        .get(key)
        .and_then(JsonValue::as_str)
        .filter(|s| !s.is_empty())
}

/// A positive count given as a number or numeric string
pub fn limit(input: &JsonObject, default: u32) -> Result<u32> {
    let parsed = match input.get("limit") {
        None | Some(JsonValue::Null) => return Ok(default),
        Some(JsonValue::String(s)) if s.trim().is_empty() => return Ok(default),
        Some(JsonValue::String(s)) => s.trim().parse::<u32>().ok(),
        Some(JsonValue::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(_) => None,
    };

    match parsed {
        Some(n) if n > 0 => Ok(n),
        _ => Err(Error::validation(
            "Input 'limit' must be a positive whole number",
        )),
    }
}

/// A boolean given as a JSON bool or a `true`/`false`-style string
pub fn flag(input: &JsonObject, key: &str, default: bool) -> Result<bool> {
    match input.get(key) {
        None | Some(JsonValue::Null) => Ok(default),
        Some(JsonValue::Bool(b)) => Ok(*b),
        Some(JsonValue::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "" => Ok(default),
            "true" | "yes" | "1" => Ok(true),
            "false" | "no" | "0" => Ok(false),
            _ => Err(Error::validation(format!("Input '{key}' must be true or false"))),
        },
        Some(_) => Err(Error::validation(format!("Input '{key}' must be true or false"))),
    }
}

/// The optional `params` input decoded as URL query parameters
pub fn raw_params(input: &JsonObject) -> Result<QueryParams> {
    match optional_str(input, "params") {
        Some(raw) => QueryParams::parse_raw(raw),
        None => Ok(QueryParams::new()),
    }
}

/// The `fields` input as a JSON object (a JSON-encoded string or an object)
pub fn json_fields(input: &JsonObject) -> Result<JsonObject> {
    let value: JsonValue = match input.get("fields") {
        Some(JsonValue::String(raw)) if !raw.trim().is_empty() => serde_json::from_str(raw)
            .map_err(|e| Error::validation(format!("Entry fields are not valid JSON: {e}")))?,
        Some(JsonValue::Object(map)) => return Ok(map.clone()),
        _ => return Err(Error::validation("Input 'fields' is required")),
    };

    match value {
        JsonValue::Object(map) => Ok(map),
        _ => Err(Error::validation("Entry fields must be a JSON object")),
    }
}
