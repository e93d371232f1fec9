//! Query-string parameters
//!
//! Strapi filters, sorting and pagination travel as bracketed query keys
//! (`filters[title][$containsi]=x`, `pagination[pageSize]=10`). Order is
//! preserved and a later `set` of the same key replaces the earlier value
//! in place.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue, DEFAULT_PAGE_SIZE, DEFAULT_SORT};

/// Query key for the Strapi page size
pub const PAGE_SIZE_KEY: &str = "pagination[pageSize]";

/// Query key for the Strapi sort order
pub const SORT_KEY: &str = "sort";

/// Ordered query parameters with override-on-collision semantics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter list
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters every entry listing starts from
    pub fn listing_defaults() -> Self {
        Self::new()
            .with(PAGE_SIZE_KEY, DEFAULT_PAGE_SIZE.to_string())
            .with(SORT_KEY, DEFAULT_SORT)
    }

    /// Set a parameter, replacing any existing value for the key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Builder form of [`QueryParams::set`]
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Merge `other` into `self`; keys in `other` win
    pub fn merge(&mut self, other: QueryParams) {
        for (key, value) in other.pairs {
            self.set(key, value);
        }
    }

    /// Look up a parameter value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Parse a raw URL-encoded string such as `populate[author]=*&filters[status][$eq]=published`
    pub fn parse_raw(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let decoded: Vec<(String, String)> = serde_urlencoded::from_str(raw).map_err(|e| {
            Error::validation(format!(
                "Invalid parameters format. Use URL parameters (e.g., populate[transaction]). Error: {e}"
            ))
        })?;

        let mut params = Self::new();
        for (key, value) in decoded {
            params.set(key, value);
        }
        Ok(params)
    }

    /// Parameters as a slice of pairs, in order
    pub fn as_slice(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Iterate over the pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no parameters are set
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// JSON object view, used in error messages
    pub fn to_json(&self) -> JsonValue {
        let map: JsonObject = self
            .pairs
            .iter()
            .map(|(k, v)| (k.clone(), JsonValue::String(v.clone())))
            .collect();
        JsonValue::Object(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.set(key, value);
        }
        params
    }
}
