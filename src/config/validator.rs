use crate::config::{parse_duration, Config};
use crate::error::{Result, SentimentError, ValidationError};
use crate::extractor::{CompiledMatcher, DEFAULT_MAX_COMMENTS, DEFAULT_MIN_LENGTH};
use std::collections::HashSet;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration, collecting every violation
    pub fn validate(config: &Config) -> Result<()> {
        let mut errors = Vec::new();

        Self::validate_schema_version(config, &mut errors);
        Self::validate_classifier(config, &mut errors);
        Self::validate_extraction(config, &mut errors);
        Self::validate_poller(config, &mut errors);
        Self::validate_export(config, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SentimentError::ConfigValidation { errors })
        }
    }

    fn validate_schema_version(config: &Config, errors: &mut Vec<ValidationError>) {
        let version = &config.meta.schema_version;
        if version != "1.0.0" {
            errors.push(ValidationError::new(
                "_meta.schema_version",
                format!("Unsupported schema version: {}", version),
            ));
        }
    }

    fn validate_classifier(config: &Config, errors: &mut Vec<ValidationError>) {
        let endpoint = &config.classifier.endpoint;
        match reqwest::Url::parse(endpoint) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => errors.push(ValidationError::new(
                "classifier.endpoint",
                format!("Endpoint must use http or https, got '{}'", url.scheme()),
            )),
            Err(e) => errors.push(ValidationError::new(
                "classifier.endpoint",
                format!("Invalid endpoint URL '{}': {}", endpoint, e),
            )),
        }

        match parse_duration(&config.classifier.timeout) {
            Some(timeout) if timeout.is_zero() => errors.push(ValidationError::new(
                "classifier.timeout",
                "Timeout must be greater than 0",
            )),
            Some(_) => {}
            None => errors.push(ValidationError::new(
                "classifier.timeout",
                format!("Invalid duration format: {}", config.classifier.timeout),
            )),
        }
    }

    fn validate_extraction(config: &Config, errors: &mut Vec<ValidationError>) {
        let extraction = &config.extraction;

        if extraction.min_length < DEFAULT_MIN_LENGTH {
            errors.push(ValidationError::new(
                "extraction.min_length",
                format!("Minimum length must be at least {}", DEFAULT_MIN_LENGTH),
            ));
        }

        if extraction.max_comments == 0 || extraction.max_comments > DEFAULT_MAX_COMMENTS {
            errors.push(ValidationError::new(
                "extraction.max_comments",
                format!("Max comments must be between 1 and {}", DEFAULT_MAX_COMMENTS),
            ));
        }

        if extraction.matchers.is_empty() {
            errors.push(ValidationError::new(
                "extraction.matchers",
                "At least one matcher is required",
            ));
        }

        let mut names = HashSet::new();
        for (i, matcher) in extraction.matchers.iter().enumerate() {
            if !names.insert(matcher.name.as_str()) {
                errors.push(ValidationError::new(
                    format!("extraction.matchers[{}].name", i),
                    format!("Duplicate matcher name: {}", matcher.name),
                ));
            }

            if let Err(e) = CompiledMatcher::compile(matcher) {
                errors.push(ValidationError::new(
                    format!("extraction.matchers[{}].selector", i),
                    e.to_string(),
                ));
            }
        }
    }

    fn validate_poller(config: &Config, errors: &mut Vec<ValidationError>) {
        match parse_duration(&config.poller.interval) {
            Some(interval) if interval.is_zero() => errors.push(ValidationError::new(
                "poller.interval",
                "Interval must be greater than 0",
            )),
            Some(_) => {}
            None => errors.push(ValidationError::new(
                "poller.interval",
                format!("Invalid duration format: {}", config.poller.interval),
            )),
        }
    }

    fn validate_export(config: &Config, errors: &mut Vec<ValidationError>) {
        if config.export.csv_file.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "export.csv_file",
                "CSV file path cannot be empty",
            ));
        }
    }
}
