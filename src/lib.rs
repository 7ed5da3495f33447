//! Shipi18n client - async Rust client for the Shipi18n translation API
//!
//! This library translates free text and JSON documents into one or more
//! target languages, optionally preserving template placeholders such as
//! `{name}`, `{{count}}`, `%s` and `<tag>`.

#![forbid(unsafe_code)]

pub mod cli;
pub mod core;
pub mod languages;
pub mod processors;

// Re-export key types for convenience
pub use crate::core::{
    client::Shipi18nClient,
    config::{ClientConfig, ConfigUpdate, DEFAULT_API_BASE_URL},
    errors::{ClientError, ErrorKind, Result},
    models::{
        HealthStatus, JsonInput, JsonTranslateRequest, JsonTranslation, TextTranslation,
        TranslateRequest, TranslatedDocument, TranslatedSegment, Warning, Warnings,
    },
};

pub use processors::locale::{LocaleFileReport, LocaleFileRequest, LocaleFileTranslator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
