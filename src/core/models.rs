//! Request and response models for the translation API

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Source language used when the caller does not pick one
pub const DEFAULT_SOURCE_LANGUAGE: &str = "en";

/// Text translation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub source_language: String,
    pub target_languages: Vec<String>,
    pub preserve_placeholders: bool,
}

impl TranslateRequest {
    pub fn new<I, S>(text: impl Into<String>, target_languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            source_language: DEFAULT_SOURCE_LANGUAGE.to_string(),
            target_languages: target_languages.into_iter().map(Into::into).collect(),
            preserve_placeholders: false,
        }
    }

    pub fn with_source_language(mut self, source_language: impl Into<String>) -> Self {
        self.source_language = source_language.into();
        self
    }

    /// Keep `{name}`, `{{count}}`, `%s`, `<tag>` and similar tokens untranslated
    pub fn with_preserve_placeholders(mut self, preserve: bool) -> Self {
        self.preserve_placeholders = preserve;
        self
    }
}

/// Document to translate, either already parsed or as JSON text
#[derive(Debug, Clone, PartialEq)]
pub enum JsonInput {
    Value(Value),
    Text(String),
}

impl JsonInput {
    /// Null and empty text count as missing
    pub fn is_empty(&self) -> bool {
        match self {
            JsonInput::Value(Value::Null) => true,
            JsonInput::Value(Value::String(text)) | JsonInput::Text(text) => text.is_empty(),
            JsonInput::Value(_) => false,
        }
    }

    /// Text payload sent to the service; strings are passed through untouched
    pub fn to_payload(&self) -> serde_json::Result<String> {
        match self {
            JsonInput::Value(Value::String(text)) | JsonInput::Text(text) => Ok(text.clone()),
            JsonInput::Value(value) => serde_json::to_string(value),
        }
    }
}

impl From<Value> for JsonInput {
    fn from(value: Value) -> Self {
        JsonInput::Value(value)
    }
}

impl From<String> for JsonInput {
    fn from(text: String) -> Self {
        JsonInput::Text(text)
    }
}

impl From<&str> for JsonInput {
    fn from(text: &str) -> Self {
        JsonInput::Text(text.to_string())
    }
}

/// Structure-preserving JSON translation request
#[derive(Debug, Clone)]
pub struct JsonTranslateRequest {
    pub json: JsonInput,
    pub source_language: String,
    pub target_languages: Vec<String>,
    pub preserve_placeholders: bool,
}

impl JsonTranslateRequest {
    pub fn new<I, S>(json: impl Into<JsonInput>, target_languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            json: json.into(),
            source_language: DEFAULT_SOURCE_LANGUAGE.to_string(),
            target_languages: target_languages.into_iter().map(Into::into).collect(),
            preserve_placeholders: false,
        }
    }

    pub fn with_source_language(mut self, source_language: impl Into<String>) -> Self {
        self.source_language = source_language.into();
        self
    }

    pub fn with_preserve_placeholders(mut self, preserve: bool) -> Self {
        self.preserve_placeholders = preserve;
        self
    }
}

/// Body of `POST /api/translate`
///
/// The service expects the language list as JSON text and the flag as a
/// `"true"`/`"false"` string.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireRequest<'a> {
    input_method: &'static str,
    text: &'a str,
    source_language: &'a str,
    target_languages: String,
    preserve_placeholders: &'static str,
}

impl<'a> WireRequest<'a> {
    pub(crate) fn new(
        text: &'a str,
        source_language: &'a str,
        target_languages: &[String],
        preserve_placeholders: bool,
    ) -> serde_json::Result<Self> {
        Ok(Self {
            input_method: "text",
            text,
            source_language,
            target_languages: serde_json::to_string(target_languages)?,
            preserve_placeholders: if preserve_placeholders { "true" } else { "false" },
        })
    }
}

/// One translated segment of the source text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslatedSegment {
    pub original: String,
    pub translated: String,
    /// Any further fields the service attached to the segment
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl TranslatedSegment {
    pub fn new(original: impl Into<String>, translated: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            translated: translated.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Advisory message attached to a response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Warning {
    Text(String),
    Detailed {
        message: String,
        #[serde(flatten)]
        extra: serde_json::Map<String, Value>,
    },
    Other(Value),
}

impl Warning {
    /// Human-readable text of the warning
    pub fn message(&self) -> String {
        match self {
            Warning::Text(message) | Warning::Detailed { message, .. } => message.clone(),
            Warning::Other(value) => value.to_string(),
        }
    }
}

/// The `warnings` entry of a response, kept as the service sent it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Warnings {
    List(Vec<Warning>),
    Other(Value),
}

impl Warnings {
    /// Human-readable messages; `null` yields none, any other scalar or object one
    pub fn messages(&self) -> Vec<String> {
        match self {
            Warnings::List(warnings) => warnings.iter().map(Warning::message).collect(),
            Warnings::Other(Value::Null) => Vec::new(),
            Warnings::Other(Value::String(message)) => vec![message.clone()],
            Warnings::Other(Value::Object(object)) => match object.get("message") {
                Some(Value::String(message)) => vec![message.clone()],
                _ => vec![Value::Object(object.clone()).to_string()],
            },
            Warnings::Other(value) => vec![value.to_string()],
        }
    }
}

impl From<Value> for Warnings {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Warnings::List(
                items
                    .into_iter()
                    .map(|item| serde_json::from_value(item.clone()).unwrap_or(Warning::Other(item)))
                    .collect(),
            ),
            other => Warnings::Other(other),
        }
    }
}

/// Keep an explicit `null` as a present entry instead of `None`
fn present_warnings<'de, D>(deserializer: D) -> std::result::Result<Option<Warnings>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|value| Some(Warnings::from(value)))
}

/// Result of a text translation, keyed by target language
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextTranslation {
    #[serde(
        default,
        deserialize_with = "present_warnings",
        skip_serializing_if = "Option::is_none"
    )]
    pub warnings: Option<Warnings>,
    #[serde(flatten)]
    pub translations: BTreeMap<String, Vec<TranslatedSegment>>,
}

impl TextTranslation {
    pub fn get(&self, language: &str) -> Option<&[TranslatedSegment]> {
        self.translations.get(language).map(Vec::as_slice)
    }

    /// Languages in the result; `warnings` is never among them
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.translations.keys().map(String::as_str)
    }

    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.as_ref().map(Warnings::messages).unwrap_or_default()
    }
}

/// Per-language entry of a JSON translation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TranslatedDocument {
    /// Structured document mirroring the input shape
    Parsed(Value),
    /// Text the service returned that did not parse as JSON
    Raw(String),
}

impl TranslatedDocument {
    /// Decode a response entry, falling back to the raw text on a parse failure
    pub fn from_response(value: Value) -> Self {
        match value {
            Value::String(text) => match serde_json::from_str(&text) {
                Ok(parsed) => TranslatedDocument::Parsed(parsed),
                Err(_) => TranslatedDocument::Raw(text),
            },
            other => TranslatedDocument::Parsed(other),
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            TranslatedDocument::Parsed(value) => Some(value),
            TranslatedDocument::Raw(_) => None,
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, TranslatedDocument::Raw(_))
    }
}

/// Result of a JSON translation, keyed by target language
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct JsonTranslation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Warnings>,
    #[serde(flatten)]
    pub translations: BTreeMap<String, TranslatedDocument>,
}

impl JsonTranslation {
    pub fn get(&self, language: &str) -> Option<&TranslatedDocument> {
        self.translations.get(language)
    }

    /// Languages in the result; `warnings` is never among them
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.translations.keys().map(String::as_str)
    }

    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.as_ref().map(Warnings::messages).unwrap_or_default()
    }
}

/// Body of `GET /api/health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Failure body: `{ error: { code, message } }` or the older `{ message }`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ServiceErrorBody {
    #[serde(default)]
    error: Option<ServiceErrorDetail>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ServiceErrorDetail {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ServiceErrorBody {
    /// Message to report, preferring the structured form
    pub(crate) fn message(&self) -> Option<&str> {
        self.error
            .as_ref()
            .and_then(|detail| detail.message.as_deref())
            .filter(|message| !message.is_empty())
            .or_else(|| self.message.as_deref().filter(|message| !message.is_empty()))
    }

    pub(crate) fn code(&self) -> Option<&str> {
        self.error.as_ref().and_then(|detail| detail.code.as_deref())
    }
}
