use std::path::PathBuf;
use thiserror::Error;

/// Main error type for comment sentiment analysis
#[derive(Error, Debug)]
pub enum SentimentError {
    /// The page yielded no qualifying comments
    #[error("No comments found on this page")]
    NoContentFound,

    /// Classifier call failed: non-2xx status, transport failure or malformed body
    #[error("Classifier call failed{}: {message}", status_suffix(.status))]
    RemoteCallFailed {
        status: Option<u16>,
        message: String,
    },

    /// A batch was submitted with zero comments; callers must short-circuit first
    #[error("Empty batch submitted to classifier")]
    EmptyBatchPrecondition,

    /// A comment matcher could not be compiled
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration validation errors
    #[error("Configuration validation failed: {errors:?}")]
    ConfigValidation { errors: Vec<ValidationError> },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Invalid configuration value
    #[error("Invalid configuration value at {path}: {message}")]
    InvalidConfigValue { path: String, message: String },

    /// IO errors
    #[error("IO error: {context}: {source}")]
    Io {
        source: std::io::Error,
        context: String,
    },

    /// TOML deserialization errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("TOML serialization error: {0}")]
    TomlSerialization(#[from] toml::ser::Error),

    /// JSON errors
    #[error("JSON error: {context}: {source}")]
    Json {
        source: serde_json::Error,
        context: String,
    },

    /// Generic errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SentimentError {
    /// Build a `RemoteCallFailed` without an HTTP status (transport or body failure)
    pub fn remote(message: impl Into<String>) -> Self {
        Self::RemoteCallFailed {
            status: None,
            message: message.into(),
        }
    }

    /// Whether the error should be shown to the user rather than treated as a bug
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, Self::EmptyBatchPrecondition)
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (HTTP {})", code),
        None => String::new(),
    }
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Path to the configuration key that failed validation
    pub path: String,
    /// Error message describing the validation failure
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type for comment sentiment operations
pub type Result<T> = std::result::Result<T, SentimentError>;
