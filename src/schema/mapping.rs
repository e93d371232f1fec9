//! Field kind mapping
//!
//! Strapi attribute kinds and the narrower set of value types the host
//! platform understands.

use serde::{Deserialize, Serialize};

/// Value type of a host-facing field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    #[default]
    String,
    Number,
    Integer,
    Boolean,
    Datetime,
}

impl std::fmt::Display for OutputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputType::String => write!(f, "string"),
            OutputType::Number => write!(f, "number"),
            OutputType::Integer => write!(f, "integer"),
            OutputType::Boolean => write!(f, "boolean"),
            OutputType::Datetime => write!(f, "datetime"),
        }
    }
}

/// Kind of a Strapi attribute (the `type` key of an attribute definition)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    String,
    Text,
    RichText,
    Email,
    Password,
    Date,
    DateTime,
    Time,
    Timestamp,
    Integer,
    BigInteger,
    Decimal,
    Float,
    Boolean,
    Enumeration,
    Json,
    Media,
    Component,
    DynamicZone,
    Relation,
    /// Any kind this connector has no special handling for (`uid`, `blocks`, ...)
    Other(String),
}

impl FieldKind {
    /// Parse a Strapi kind string; unknown kinds are kept as `Other`
    pub fn parse(kind: &str) -> Self {
        match kind {
            "string" => Self::String,
            "text" => Self::Text,
            "richtext" => Self::RichText,
            "email" => Self::Email,
            "password" => Self::Password,
            "date" => Self::Date,
            "datetime" => Self::DateTime,
            "time" => Self::Time,
            "timestamp" => Self::Timestamp,
            "integer" => Self::Integer,
            "biginteger" => Self::BigInteger,
            "decimal" => Self::Decimal,
            "float" => Self::Float,
            "boolean" => Self::Boolean,
            "enumeration" => Self::Enumeration,
            "json" => Self::Json,
            "media" => Self::Media,
            "component" => Self::Component,
            "dynamiczone" => Self::DynamicZone,
            "relation" => Self::Relation,
            other => Self::Other(other.to_string()),
        }
    }

    /// The Strapi kind string
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Text => "text",
            Self::RichText => "richtext",
            Self::Email => "email",
            Self::Password => "password",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Time => "time",
            Self::Timestamp => "timestamp",
            Self::Integer => "integer",
            Self::BigInteger => "biginteger",
            Self::Decimal => "decimal",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Enumeration => "enumeration",
            Self::Json => "json",
            Self::Media => "media",
            Self::Component => "component",
            Self::DynamicZone => "dynamiczone",
            Self::Relation => "relation",
            Self::Other(kind) => kind,
        }
    }

    /// Host value type for this kind
    pub fn output_type(&self) -> OutputType {
        match self {
            Self::Date | Self::DateTime | Self::Timestamp => OutputType::Datetime,
            Self::Integer | Self::BigInteger => OutputType::Integer,
            Self::Decimal | Self::Float => OutputType::Number,
            Self::Boolean => OutputType::Boolean,
            _ => OutputType::String,
        }
    }

    /// Kinds whose values are structured JSON rather than scalars
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Json | Self::Component | Self::DynamicZone)
    }

    /// Kinds edited as multi-line text
    pub fn is_long_text(&self) -> bool {
        matches!(self, Self::Text | Self::RichText | Self::Json)
    }
}

impl From<String> for FieldKind {
    fn from(kind: String) -> Self {
        Self::parse(&kind)
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a Strapi kind string to a host value type; unknown kinds map to `string`
pub fn map_field_type(kind: &str) -> OutputType {
    FieldKind::parse(kind).output_type()
}
