//! Schema-driven value coercion
//!
//! Host inputs arrive mostly as strings. Each attribute kind owns a rule
//! turning the raw input into the JSON value Strapi expects. Blank inputs
//! are skipped so the field is left out of the write.

use crate::error::{Error, Result};
use crate::schema::{FieldAttribute, FieldKind};
use crate::types::{format_timestamp, JsonValue};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Number;

/// Coerce one input value; `Ok(None)` means the input was blank
pub fn coerce_value(name: &str, attr: &FieldAttribute, value: &JsonValue) -> Result<Option<JsonValue>> {
    if is_blank(value) {
        return Ok(None);
    }

    let coerced = match &attr.kind {
        FieldKind::Boolean => JsonValue::Bool(to_bool(name, value)?),
        FieldKind::Integer => to_integer(name, value, false)?,
        FieldKind::BigInteger => to_integer(name, value, true)?,
        FieldKind::Decimal | FieldKind::Float => to_number(name, value)?,
        FieldKind::Date | FieldKind::DateTime | FieldKind::Timestamp => {
            JsonValue::String(to_timestamp(name, value)?)
        }
        kind if kind.is_structured() => parse_json_lenient(value),
        _ => value.clone(),
    };
    Ok(Some(coerced))
}

fn is_blank(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::String(s) => s.is_empty(),
        _ => false,
    }
}

fn invalid(name: &str, expected: &str, value: &JsonValue) -> Error {
    Error::validation(format!(
        "Field '{name}' expects {expected}, got {value}"
    ))
}

fn to_bool(name: &str, value: &JsonValue) -> Result<bool> {
    match value {
        JsonValue::Bool(b) => Ok(*b),
        JsonValue::Number(n) => Ok(n.as_f64().is_some_and(|f| f != 0.0)),
        JsonValue::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Ok(true),
            "false" | "no" | "0" | "off" => Ok(false),
            _ => Err(invalid(name, "a boolean", value)),
        },
        _ => Err(invalid(name, "a boolean", value)),
    }
}

fn to_integer(name: &str, value: &JsonValue, big: bool) -> Result<JsonValue> {
    match value {
        JsonValue::Number(n) if n.is_i64() || n.is_u64() => Ok(value.clone()),
        JsonValue::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < 9.007_199_254_740_992e15 => {
                Ok(JsonValue::from(f as i64))
            }
            _ => Err(invalid(name, "an integer", value)),
        },
        JsonValue::String(s) => {
            let s = s.trim();
            if let Ok(i) = s.parse::<i64>() {
                return Ok(JsonValue::from(i));
            }
            // Big integers beyond i64 travel as digit strings
            let digits = s.strip_prefix('-').unwrap_or(s);
            if big && !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
                return Ok(JsonValue::String(s.to_string()));
            }
            Err(invalid(name, "an integer", value))
        }
        _ => Err(invalid(name, "an integer", value)),
    }
}

fn to_number(name: &str, value: &JsonValue) -> Result<JsonValue> {
    match value {
        JsonValue::Number(_) => Ok(value.clone()),
        JsonValue::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(JsonValue::Number)
            .ok_or_else(|| invalid(name, "a number", value)),
        _ => Err(invalid(name, "a number", value)),
    }
}

fn to_timestamp(name: &str, value: &JsonValue) -> Result<String> {
    let parsed = match value {
        JsonValue::String(s) => parse_datetime(s.trim()),
        JsonValue::Number(n) => n.as_i64().and_then(DateTime::<Utc>::from_timestamp_millis),
        _ => None,
    };
    parsed
        .map(format_timestamp)
        .ok_or_else(|| invalid(name, "a date or date-time", value))
}

/// Parse RFC 3339, naive date-times (taken as UTC) and plain dates
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parse a string as JSON, keeping the raw string when it isn't JSON
fn parse_json_lenient(value: &JsonValue) -> JsonValue {
    match value {
        JsonValue::String(s) => serde_json::from_str(s).unwrap_or_else(|_| value.clone()),
        other => other.clone(),
    }
}
