//! Locale file processor: translate an `en.json`-style file into one file per language

use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::client::Shipi18nClient;
use crate::core::errors::{ClientError, Result};
use crate::core::models::{JsonTranslateRequest, TranslatedDocument};

/// Largest locale file accepted, in bytes
pub const MAX_LOCALE_FILE_SIZE: u64 = 1024 * 1024;

/// Files written by [`LocaleFileTranslator::translate_file`]
#[derive(Debug, Clone, Default)]
pub struct LocaleFileReport {
    /// `(language, path)` for every written file
    pub written: Vec<(String, PathBuf)>,
    /// Response keys that were not requested or are not usable as a file name
    pub skipped: Vec<String>,
    pub warnings: Vec<String>,
}

/// Translates whole locale files through [`Shipi18nClient::translate_json`]
#[derive(Debug, Clone)]
pub struct LocaleFileTranslator {
    client: Shipi18nClient,
}

impl LocaleFileTranslator {
    pub fn new(client: Shipi18nClient) -> Self {
        Self { client }
    }

    /// Create from environment configuration
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(Shipi18nClient::from_env()?))
    }

    /// Read and parse a locale file, enforcing extension and size limits
    pub async fn load(&self, path: &Path) -> Result<Value> {
        if !is_json_file(path) {
            return Err(ClientError::validation("Please upload a JSON file"));
        }

        let metadata = tokio::fs::metadata(path).await?;
        if metadata.len() > MAX_LOCALE_FILE_SIZE {
            return Err(ClientError::validation(
                "File is too large. Maximum size is 1MB.",
            ));
        }

        let content = tokio::fs::read_to_string(path).await?;
        serde_json::from_str(&content).map_err(|_| {
            ClientError::validation("Invalid JSON file. Please check the file format.")
        })
    }

    /// Translate `path` and write `<output_dir>/<lang>.json` for each language
    pub async fn translate_file(
        &self,
        path: &Path,
        output_dir: &Path,
        request: LocaleFileRequest,
    ) -> Result<LocaleFileReport> {
        let document = self.load(path).await?;
        info!("Translating {} into {:?}", path.display(), request.target_languages);

        let requested = request.target_languages.clone();
        let mut json_request = JsonTranslateRequest::new(document, request.target_languages)
            .with_preserve_placeholders(request.preserve_placeholders);
        if let Some(source_language) = request.source_language {
            json_request = json_request.with_source_language(source_language);
        }

        let translation = self.client.translate_json(&json_request).await?;

        tokio::fs::create_dir_all(output_dir).await?;

        let mut report = LocaleFileReport {
            warnings: translation.warning_messages(),
            ..Default::default()
        };

        for (language, document) in translation.translations {
            if !requested.contains(&language) || !is_safe_language_key(&language) {
                debug!("Skipping response entry {:?}", language);
                report.skipped.push(language);
                continue;
            }
            let target = output_dir.join(format!("{}.json", language));
            tokio::fs::write(&target, render(&document)?).await?;
            debug!("Wrote {}", target.display());
            report.written.push((language, target));
        }

        Ok(report)
    }
}

/// Languages and options for one locale file
#[derive(Debug, Clone)]
pub struct LocaleFileRequest {
    pub target_languages: Vec<String>,
    pub source_language: Option<String>,
    pub preserve_placeholders: bool,
}

fn is_json_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// A language code that names a file inside the output directory
fn is_safe_language_key(language: &str) -> bool {
    !language.is_empty()
        && language != "."
        && language != ".."
        && !language.contains(['/', '\\', '\0'])
}

/// File contents for one language; raw entries are written untouched
fn render(document: &TranslatedDocument) -> Result<String> {
    match document {
        TranslatedDocument::Parsed(value) => Ok(serde_json::to_string_pretty(value)?),
        TranslatedDocument::Raw(text) => Ok(text.clone()),
    }
}
