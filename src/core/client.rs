//! Async client for the Shipi18n translation API

use reqwest::{Response, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::core::config::{ClientConfig, ConfigUpdate};
use crate::core::errors::{ClientError, Result};
use crate::core::models::{
    HealthStatus, JsonTranslateRequest, JsonTranslation, ServiceErrorBody, TextTranslation,
    TranslateRequest, TranslatedDocument, Warnings, WireRequest,
};

const TRANSLATE_PATH: &str = "/api/translate";
const HEALTH_PATH: &str = "/api/health";
const API_KEY_HEADER: &str = "X-API-Key";
const WARNINGS_KEY: &str = "warnings";

const MISSING_KEY_MESSAGE: &str = "SHIPI18N_API_KEY environment variable is not set";
const MISSING_TEXT_MESSAGE: &str = "Text parameter is required and must be a string";
const MISSING_JSON_MESSAGE: &str = "JSON parameter is required";
const MISSING_TARGETS_MESSAGE: &str = "targetLanguages must be a non-empty array";

/// Translation API client
///
/// Each operation performs at most one request. The configuration is owned
/// by the client; [`set_config`](Self::set_config) and
/// [`reset_config`](Self::reset_config) take `&mut self`, so a clone shared
/// with other tasks keeps the configuration it was cloned with.
#[derive(Debug, Clone)]
pub struct Shipi18nClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl Shipi18nClient {
    /// Create a client with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Merge the supplied fields into the configuration used by later calls
    pub fn set_config(&mut self, update: ConfigUpdate) {
        self.config.merge(update);
    }

    /// Return to the unset configuration: no API key, default base URL
    pub fn reset_config(&mut self) {
        self.config = ClientConfig::default();
    }

    /// Translate text into every requested language
    ///
    /// The result maps each language code to the source segments and their
    /// translations, in source order.
    pub async fn translate(&self, request: &TranslateRequest) -> Result<TextTranslation> {
        let api_key = self.require_api_key()?;

        if request.text.is_empty() {
            return Err(ClientError::validation(MISSING_TEXT_MESSAGE));
        }
        validate_targets(&request.target_languages)?;

        let wire = WireRequest::new(
            &request.text,
            &request.source_language,
            &request.target_languages,
            request.preserve_placeholders,
        )?;

        let response = self.post_translate(api_key, &wire).await?;
        Ok(response.json::<TextTranslation>().await?)
    }

    /// Translate the string leaves of a JSON document, keeping its structure
    ///
    /// Per-language entries that do not parse as JSON are returned as
    /// [`TranslatedDocument::Raw`] instead of failing the call.
    pub async fn translate_json(&self, request: &JsonTranslateRequest) -> Result<JsonTranslation> {
        let api_key = self.require_api_key()?;

        if request.json.is_empty() {
            return Err(ClientError::validation(MISSING_JSON_MESSAGE));
        }
        validate_targets(&request.target_languages)?;

        let payload = request.json.to_payload()?;
        let wire = WireRequest::new(
            &payload,
            &request.source_language,
            &request.target_languages,
            request.preserve_placeholders,
        )?;

        let response = self.post_translate(api_key, &wire).await?;
        let body = response.json::<serde_json::Map<String, Value>>().await?;

        Ok(parse_json_translation(body))
    }

    /// Query the service health endpoint; no API key is required
    pub async fn health_check(&self) -> Result<HealthStatus> {
        let url = self.config.endpoint(HEALTH_PATH);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        debug!("Health check responded with {}", status);

        if !status.is_success() {
            return Err(ClientError::service(
                format!("Health check failed: {}", status_text(status)),
                None,
                status.as_u16(),
            ));
        }

        Ok(response.json::<HealthStatus>().await?)
    }

    fn require_api_key(&self) -> Result<&str> {
        self.config
            .api_key()
            .ok_or_else(|| ClientError::configuration(MISSING_KEY_MESSAGE))
    }

    /// Send the translate request, turning a non-success status into an error
    async fn post_translate(&self, api_key: &str, wire: &WireRequest<'_>) -> Result<Response> {
        let url = self.config.endpoint(TRANSLATE_PATH);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .header("Content-Type", "application/json")
            .json(wire)
            .send()
            .await?;

        let status = response.status();
        debug!("Translate responded with {}", status);

        if status.is_success() {
            return Ok(response);
        }

        Err(service_error(status, response).await)
    }
}

fn validate_targets(target_languages: &[String]) -> Result<()> {
    if target_languages.is_empty() {
        return Err(ClientError::validation(MISSING_TARGETS_MESSAGE));
    }
    Ok(())
}

/// Build the error for a failed translate call from its body
async fn service_error(status: StatusCode, response: Response) -> ClientError {
    let body = response
        .bytes()
        .await
        .ok()
        .and_then(|bytes| serde_json::from_slice::<ServiceErrorBody>(&bytes).ok());

    let message = body
        .as_ref()
        .and_then(ServiceErrorBody::message)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Translation failed: {}", status_text(status)));
    let code = body.as_ref().and_then(ServiceErrorBody::code).map(str::to_string);

    ClientError::service(message, code, status.as_u16())
}

fn status_text(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("")
}

/// Split a JSON-mode response into per-language documents and warnings
fn parse_json_translation(body: serde_json::Map<String, Value>) -> JsonTranslation {
    let mut result = JsonTranslation::default();

    for (key, value) in body {
        if key == WARNINGS_KEY {
            result.warnings = Some(Warnings::from(value));
            continue;
        }
        result
            .translations
            .insert(key, TranslatedDocument::from_response(value));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{JsonInput, Warning};
    use serde_json::json;

    fn configured() -> Shipi18nClient {
        let mut client = Shipi18nClient::new(ClientConfig::default()).unwrap();
        client.set_config(
            ConfigUpdate::new()
                .api_key("sk_test_123")
                // Nothing listens here; validation must fail before any request.
                .api_base_url("http://127.0.0.1:9"),
        );
        client
    }

    #[tokio::test]
    async fn test_missing_key_is_checked_first() {
        let client = Shipi18nClient::new(ClientConfig::default()).unwrap();

        let err = client
            .translate(&TranslateRequest::new("", Vec::<String>::new()))
            .await
            .unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(err.message(), MISSING_KEY_MESSAGE);

        let err = client
            .translate_json(&JsonTranslateRequest::new(json!({"greeting": "Hello"}), ["es"]))
            .await
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[tokio::test]
    async fn test_reset_config_clears_key() {
        let mut client = configured();
        client.reset_config();
        assert_eq!(client.config(), &ClientConfig::default());

        let err = client
            .translate(&TranslateRequest::new("Hello", ["es"]))
            .await
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[tokio::test]
    async fn test_empty_text_rejected() {
        let err = configured()
            .translate(&TranslateRequest::new("", ["es"]))
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.message(), MISSING_TEXT_MESSAGE);
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_empty_targets_rejected() {
        let client = configured();

        let err = client
            .translate(&TranslateRequest::new("Hi", Vec::<String>::new()))
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.message(), MISSING_TARGETS_MESSAGE);

        let err = client
            .translate_json(&JsonTranslateRequest::new(json!({"a": "b"}), Vec::<String>::new()))
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_null_json_rejected() {
        let err = configured()
            .translate_json(&JsonTranslateRequest::new(JsonInput::Value(Value::Null), ["es"]))
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.message(), MISSING_JSON_MESSAGE);
    }

    #[test]
    fn test_parse_json_translation() {
        let body = json!({
            "es": "{\"a\":\"b\"}",
            "fr": {"a": "c"},
            "de": "not valid json",
            "warnings": ["w1"]
        });
        let Value::Object(map) = body else { unreachable!() };

        let result = parse_json_translation(map);
        assert_eq!(result.languages().collect::<Vec<_>>(), vec!["de", "es", "fr"]);
        assert_eq!(result.get("es").and_then(TranslatedDocument::as_value), Some(&json!({"a": "b"})));
        assert_eq!(result.get("fr").and_then(TranslatedDocument::as_value), Some(&json!({"a": "c"})));
        assert!(result.get("de").is_some_and(TranslatedDocument::is_raw));
        assert_eq!(result.warnings, Some(Warnings::List(vec![Warning::Text("w1".to_string())])));
    }

    #[test]
    fn test_parse_json_translation_keeps_odd_warnings() {
        for warnings in [json!("partial failure"), json!(null), json!({"detail": 1})] {
            let mut map = serde_json::Map::new();
            map.insert("es".to_string(), json!("{\"a\":\"b\"}"));
            map.insert("warnings".to_string(), warnings.clone());

            let result = parse_json_translation(map);
            assert_eq!(result.languages().collect::<Vec<_>>(), vec!["es"]);
            assert_eq!(result.warnings, Some(Warnings::Other(warnings)));
        }
    }

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(StatusCode::UNAUTHORIZED), "Unauthorized");
        assert_eq!(status_text(StatusCode::SERVICE_UNAVAILABLE), "Service Unavailable");
    }
}
