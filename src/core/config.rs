//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::core::errors::Result;

/// Service endpoint used when no base URL is configured
pub const DEFAULT_API_BASE_URL: &str = "https://shipi18n.com/api";

/// Environment variable prefix, e.g. `SHIPI18N_API_KEY`
pub const ENV_PREFIX: &str = "SHIPI18N";

/// Settings file looked up in the working directory by [`ClientConfig::from_env`]
const DEFAULT_CONFIG_FILE: &str = "shipi18n";

/// Configuration for the translation client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub api_key: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

/// Raw settings as read from files and environment
#[derive(Debug, Default, Deserialize)]
struct Settings {
    api_url: Option<String>,
    api_key: Option<String>,
}

impl ClientConfig {
    /// Load configuration from `shipi18n.{toml,json,yaml}` and `SHIPI18N_*` variables
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Load configuration, reading `path` instead of the default settings file
    ///
    /// Environment variables take precedence over file values. A missing API
    /// key is not an error; operations that need it fail at call time.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings: Settings = config::Config::builder()
            .add_source(file)
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;

        let config = Self::default().merged(ConfigUpdate {
            api_base_url: settings.api_url.filter(|url| !url.is_empty()),
            api_key: settings.api_key.map(Some),
        });

        debug!(
            "Loaded configuration: base URL {}, API key {}",
            config.api_base_url,
            if config.has_api_key() { "present" } else { "absent" }
        );

        Ok(config)
    }

    /// The configured key, treating an empty string as absent
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key().is_some()
    }

    /// Join an `/api/...` path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), path)
    }

    /// Apply the fields set in `update`, keeping the rest
    pub fn merge(&mut self, update: ConfigUpdate) {
        if let Some(api_base_url) = update.api_base_url {
            self.api_base_url = api_base_url;
        }
        if let Some(api_key) = update.api_key {
            self.api_key = api_key;
        }
    }

    fn merged(mut self, update: ConfigUpdate) -> Self {
        self.merge(update);
        self
    }
}

/// Partial configuration applied with [`ClientConfig::merge`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigUpdate {
    api_base_url: Option<String>,
    api_key: Option<Option<String>>,
}

impl ConfigUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(Some(key.into()));
        self
    }

    /// Unset the API key
    pub fn clear_api_key(mut self) -> Self {
        self.api_key = Some(None);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_has_no_key() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_empty_key_is_absent() {
        let config = ClientConfig {
            api_key: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn test_merge_only_touches_supplied_fields() {
        let mut config = ClientConfig::default();
        config.merge(ConfigUpdate::new().api_key("sk_test_123"));
        assert_eq!(config.api_key(), Some("sk_test_123"));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);

        config.merge(ConfigUpdate::new().api_base_url("https://api.test.com"));
        assert_eq!(config.api_key(), Some("sk_test_123"));
        assert_eq!(config.api_base_url, "https://api.test.com");

        config.merge(ConfigUpdate::new().clear_api_key());
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_endpoint() {
        let config = ClientConfig {
            api_base_url: "https://api.test/".to_string(),
            api_key: None,
        };
        assert_eq!(config.endpoint("/api/translate"), "https://api.test/api/translate");
        assert_eq!(
            ClientConfig::default().endpoint("/api/health"),
            "https://shipi18n.com/api/api/health"
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "api_url = \"https://file.test\"").unwrap();
        writeln!(file, "api_key = \"from_file\"").unwrap();

        let config = ClientConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.api_base_url, "https://file.test");
        assert_eq!(config.api_key(), Some("from_file"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = ClientConfig::load(Some(Path::new("/nonexistent/shipi18n.toml"))).unwrap_err();
        assert!(err.is_configuration());
    }
}
