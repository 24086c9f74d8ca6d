//! Configuration management for comment sentiment analysis
//!
//! Loads the TOML configuration, applies `CSENT_` environment overrides and
//! validates the result before anything else sees it.

use crate::error::{Result, SentimentError};
use crate::extractor::{default_matchers, MatcherConfig, DEFAULT_MAX_COMMENTS, DEFAULT_MIN_LENGTH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

mod validator;

pub use validator::ConfigValidator;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "_meta")]
    pub meta: MetaConfig,
    pub classifier: ClassifierConfig,
    pub extraction: ExtractionConfig,
    pub poller: PollerConfig,
    pub export: ExportConfig,
}

/// Metadata about the configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaConfig {
    pub schema_version: String,
    #[serde(default = "current_timestamp")]
    pub created_at: String,
    #[serde(default = "current_timestamp")]
    pub last_modified: String,
}

fn current_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Remote classification service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Base URL; requests go to `<endpoint>/predict_batch`
    pub endpoint: String,
    /// Per-request timeout, e.g. "30s"
    pub timeout: String,
}

/// Comment extraction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Comments must be strictly longer than this after trimming
    pub min_length: usize,
    pub max_comments: usize,
    pub matchers: Vec<MatcherConfig>,
}

/// Growth polling settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollerConfig {
    pub interval: String,
}

/// Export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub csv_file: PathBuf,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SentimentError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| SentimentError::Io {
            source: e,
            context: format!("Failed to read config file: {:?}", path),
        })?;
        let mut config: Config = toml::from_str(&content)?;

        // Apply environment variable overrides
        config.apply_env_overrides();

        ConfigValidator::validate(&config)?;

        Ok(config)
    }

    /// Defaults with environment overrides applied, validated like a loaded file
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars())
    }

    fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Result<Self> {
        let mut config = Self::default();
        config.apply_overrides(vars);
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| SentimentError::Io {
            source: e,
            context: format!("Failed to write config file: {:?}", path),
        })?;
        Ok(())
    }

    /// Apply environment variable overrides
    /// Environment variables in format: CSENT_SECTION__KEY=value
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(std::env::vars());
    }

    fn apply_overrides(&mut self, vars: impl IntoIterator<Item = (String, String)>) {
        for (key, value) in vars {
            if let Some(config_key) = key.strip_prefix("CSENT_") {
                if let Err(e) = self.set_value_from_env(config_key, &value) {
                    tracing::warn!("Failed to apply env override {}: {}", key, e);
                }
            }
        }
    }

    fn set_value_from_env(&mut self, path: &str, value: &str) -> Result<()> {
        match path {
            "CLASSIFIER__ENDPOINT" => {
                self.classifier.endpoint = value.to_string();
            }
            "CLASSIFIER__TIMEOUT" => {
                self.classifier.timeout = value.to_string();
            }
            "POLLER__INTERVAL" => {
                self.poller.interval = value.to_string();
            }
            "EXTRACTION__MAX_COMMENTS" => {
                self.extraction.max_comments =
                    value.parse().map_err(|_| SentimentError::InvalidConfigValue {
                        path: path.to_string(),
                        message: format!("Cannot parse '{}' as integer", value),
                    })?;
            }
            "EXPORT__CSV_FILE" => {
                self.export.csv_file = PathBuf::from(value);
            }
            _ => {
                tracing::debug!("Unknown env config key: {}", path);
            }
        }
        Ok(())
    }

    /// Classifier request timeout
    pub fn classifier_timeout(&self) -> Result<Duration> {
        parse_duration(&self.classifier.timeout).ok_or_else(|| SentimentError::InvalidConfigValue {
            path: "classifier.timeout".to_string(),
            message: format!("Invalid duration format: {}", self.classifier.timeout),
        })
    }

    /// Poller interval
    pub fn poll_interval(&self) -> Result<Duration> {
        parse_duration(&self.poller.interval).ok_or_else(|| SentimentError::InvalidConfigValue {
            path: "poller.interval".to_string(),
            message: format!("Invalid duration format: {}", self.poller.interval),
        })
    }

    /// Poll interval for a watch, preferring an explicit request over the config
    pub fn watch_interval(&self, requested: Option<&str>) -> Result<Duration> {
        let interval = match requested {
            Some(value) => parse_duration(value).ok_or_else(|| SentimentError::InvalidConfigValue {
                path: "interval".to_string(),
                message: format!("Invalid duration format: {}", value),
            })?,
            None => self.poll_interval()?,
        };

        if interval.is_zero() {
            return Err(SentimentError::InvalidConfigValue {
                path: "interval".to_string(),
                message: "Interval must be greater than 0".to_string(),
            });
        }

        Ok(interval)
    }

    /// Get the default configuration file path
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            SentimentError::Config("Cannot determine config directory".to_string())
        })?;

        Ok(config_dir.join("comment-sentiment").join("config.toml"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            meta: MetaConfig {
                schema_version: "1.0.0".to_string(),
                created_at: current_timestamp(),
                last_modified: current_timestamp(),
            },
            classifier: ClassifierConfig {
                endpoint: "http://localhost:8000".to_string(),
                timeout: "30s".to_string(),
            },
            extraction: ExtractionConfig {
                min_length: DEFAULT_MIN_LENGTH,
                max_comments: DEFAULT_MAX_COMMENTS,
                matchers: default_matchers(),
            },
            poller: PollerConfig {
                interval: "2s".to_string(),
            },
            export: ExportConfig {
                csv_file: PathBuf::from(crate::export::CSV_FILENAME),
            },
        }
    }
}

/// Parse a duration string (e.g., "2s", "500ms", "1m"); bare numbers are seconds
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();

    // Check "ms" before "s" because "ms" ends with "s"
    if let Some(ms) = s.strip_suffix("ms") {
        ms.trim().parse().ok().map(Duration::from_millis)
    } else if let Some(secs) = s.strip_suffix('s') {
        secs.trim().parse().ok().map(Duration::from_secs)
    } else if let Some(mins) = s.strip_suffix('m') {
        mins.trim()
            .parse::<u64>()
            .ok()
            .and_then(|m| m.checked_mul(60))
            .map(Duration::from_secs)
    } else {
        s.parse().ok().map(Duration::from_secs)
    }
}
