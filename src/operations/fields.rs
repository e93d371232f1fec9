//! Input field definitions
//!
//! Every operation declares the inputs the host should render. The advanced
//! create derives its inputs from the selected content type's schema.

use crate::schema::{ContentTypeSchema, FieldAttribute, FieldKind, OutputType};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Dynamic source for content-type dropdowns (`resource.value.label`)
pub const CONTENT_TYPES_DYNAMIC: &str = "content_types.id.label";

/// Keys of the static advanced-create inputs; attributes with these names get no input
pub const STATIC_INPUT_KEYS: [&str; 2] = ["contentType", "published"];

/// Whether an attribute gets its own advanced-create input
pub fn is_input_attribute(name: &str, attr: &FieldAttribute) -> bool {
    attr.is_writable() && !STATIC_INPUT_KEYS.contains(&name)
}

/// Input widget type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    #[default]
    String,
    Text,
    Integer,
    Number,
    Boolean,
    Datetime,
    Password,
}

impl From<OutputType> for InputType {
    fn from(output: OutputType) -> Self {
        match output {
            OutputType::String => InputType::String,
            OutputType::Number => InputType::Number,
            OutputType::Integer => InputType::Integer,
            OutputType::Boolean => InputType::Boolean,
            OutputType::Datetime => InputType::Datetime,
        }
    }
}

impl From<&FieldKind> for InputType {
    fn from(kind: &FieldKind) -> Self {
        match kind {
            FieldKind::Password => InputType::Password,
            k if k.is_long_text() || k.is_structured() => InputType::Text,
            k => k.output_type().into(),
        }
    }
}

/// One declared input field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputField {
    pub key: String,

    #[serde(rename = "type")]
    pub field_type: InputType,

    pub required: bool,

    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
}

impl InputField {
    /// An optional field
    pub fn new(key: impl Into<String>, field_type: InputType, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            field_type,
            required: false,
            label: label.into(),
            help_text: None,
            default: None,
            placeholder: None,
            dynamic: None,
            choices: Vec::new(),
        }
    }

    /// Mark the field required
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set help text
    #[must_use]
    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    /// Set default value
    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Set placeholder
    #[must_use]
    pub fn placeholder(mut self, value: impl Into<String>) -> Self {
        self.placeholder = Some(value.into());
        self
    }

    /// Populate from a dynamic resource
    #[must_use]
    pub fn dynamic(mut self, source: impl Into<String>) -> Self {
        self.dynamic = Some(source.into());
        self
    }

    /// Restrict to fixed choices
    #[must_use]
    pub fn choices(mut self, choices: Vec<String>) -> Self {
        self.choices = choices;
        self
    }
}

/// The content-type selector every entry operation starts with
pub fn content_type_field(help: &str) -> InputField {
    InputField::new("contentType", InputType::String, "Content Type")
        .required()
        .help(help)
        .dynamic(CONTENT_TYPES_DYNAMIC)
}

/// Optional `limit` input
pub fn limit_field(default: u32) -> InputField {
    InputField::new("limit", InputType::Integer, "Limit")
        .help(format!(
            "Maximum number of entries to return (default: {default})"
        ))
        .default_value(default.to_string())
}

/// Optional raw query-string input
pub fn params_field(help: &str) -> InputField {
    InputField::new("params", InputType::Text, "Additional Parameters").help(help)
}

/// Inputs for every writable attribute of a content type
pub fn schema_input_fields(schema: &ContentTypeSchema) -> Vec<InputField> {
    schema
        .schema
        .attributes
        .iter()
        .filter(|(name, attr)| is_input_attribute(name, attr))
        .map(|(name, attr)| attribute_input_field(name, attr))
        .collect()
}

/// Input for one attribute, with bounds folded into the help text
pub fn attribute_input_field(name: &str, attr: &FieldAttribute) -> InputField {
    let mut field = InputField::new(name, InputType::from(&attr.kind), humanize(name))
        .help(attribute_help(attr));

    if attr.required {
        field = field.required();
    }
    if let Some(default) = attr.default.as_ref().and_then(default_string) {
        field = field.default_value(default);
    }
    if attr.kind == FieldKind::Enumeration && !attr.enum_values.is_empty() {
        field = field.choices(attr.enum_values.clone());
    }
    field
}

fn attribute_help(attr: &FieldAttribute) -> String {
    let mut parts = vec![format!("Strapi {} field.", attr.kind)];

    if attr.required {
        parts.push("Required.".to_string());
    }
    if attr.unique {
        parts.push("Must be unique.".to_string());
    }
    if let Some(min) = attr.min_length {
        parts.push(format!("Minimum length: {min}."));
    }
    if let Some(max) = attr.max_length {
        parts.push(format!("Maximum length: {max}."));
    }
    if let Some(min) = attr.min.as_ref().and_then(default_string) {
        parts.push(format!("Minimum value: {min}."));
    }
    if let Some(max) = attr.max.as_ref().and_then(default_string) {
        parts.push(format!("Maximum value: {max}."));
    }
    if !attr.enum_values.is_empty() {
        parts.push(format!("Allowed values: {}.", attr.enum_values.join(", ")));
    }
    if let Some(target) = &attr.target {
        parts.push(format!("Relation to {target}; use the related entry id."));
    }
    if attr.kind.is_structured() {
        parts.push("Enter a JSON value.".to_string());
    }

    parts.join(" ")
}

fn default_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// `publishedDate` / `published_date` / `published-date` -> `Published Date`
pub fn humanize(name: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for c in name.chars() {
        if c == '_' || c == '-' || c == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        } else if c.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
            current.push(c);
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
