//! Error type shared by every client operation

use std::fmt;
use thiserror::Error;

/// Broad classification of a [`ClientError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required credential missing, raised before any I/O
    Configuration,
    /// Caller-supplied argument failed a precondition, raised before any I/O
    Validation,
    /// The service answered with a non-success status
    Service,
    /// The request never produced a response
    Network,
    /// A success response whose body was not the expected JSON
    InvalidResponse,
    /// Local file access failed
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Configuration => write!(f, "configuration"),
            ErrorKind::Validation => write!(f, "validation"),
            ErrorKind::Service => write!(f, "service"),
            ErrorKind::Network => write!(f, "network"),
            ErrorKind::InvalidResponse => write!(f, "invalid response"),
            ErrorKind::Io => write!(f, "io"),
        }
    }
}

/// Translation client error
///
/// `code` is the machine-readable identifier the service attached to a
/// failure, `status` the HTTP status of a non-success response. Local
/// failures carry neither.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ClientError {
    kind: ErrorKind,
    message: String,
    code: Option<String>,
    status: Option<u16>,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl ClientError {
    fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            code: None,
            status: None,
            source: None,
        }
    }

    /// Missing or unusable configuration
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Rejected caller input
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Non-success response from the service
    pub fn service(message: impl Into<String>, code: Option<String>, status: u16) -> Self {
        Self {
            code,
            status: Some(status),
            ..Self::new(ErrorKind::Service, message)
        }
    }

    /// Success response with an unusable body
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidResponse, message)
    }

    fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Service-supplied error code, if any
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// HTTP status of the failed response, if any
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn is_configuration(&self) -> bool {
        self.kind == ErrorKind::Configuration
    }

    pub fn is_validation(&self) -> bool {
        self.kind == ErrorKind::Validation
    }

    pub fn is_service(&self) -> bool {
        self.kind == ErrorKind::Service
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_decode() {
            ErrorKind::InvalidResponse
        } else {
            ErrorKind::Network
        };
        Self::new(kind, err.to_string()).with_source(err)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_response(err.to_string()).with_source(err)
    }
}

impl From<config::ConfigError> for ClientError {
    fn from(err: config::ConfigError) -> Self {
        Self::configuration(err.to_string()).with_source(err)
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io, err.to_string()).with_source(err)
    }
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
