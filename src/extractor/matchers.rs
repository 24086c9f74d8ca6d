// Named structural matchers for locating comment text in a page
use crate::error::{Result, SentimentError};
use scraper::Selector;
use serde::{Deserialize, Serialize};

/// Matcher definition as it appears in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherConfig {
    pub name: String,
    pub selector: String,
}

impl MatcherConfig {
    pub fn new(name: impl Into<String>, selector: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selector: selector.into(),
        }
    }
}

/// Default matchers, broad to narrow renderings of a comment's text node
pub fn default_matchers() -> Vec<MatcherConfig> {
    vec![
        MatcherConfig::new("comment_thread", "ytd-comment-thread-renderer #content-text"),
        MatcherConfig::new("comment", "ytd-comment-renderer #content-text"),
        MatcherConfig::new("content_text", "#content-text"),
        MatcherConfig::new("formatted_string", "yt-formatted-string#content-text"),
    ]
}

/// Matcher with a pre-compiled selector
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    pub name: String,
    pub selector: Selector,
}

impl CompiledMatcher {
    pub fn compile(config: &MatcherConfig) -> Result<Self> {
        let selector =
            Selector::parse(&config.selector).map_err(|e| SentimentError::InvalidSelector {
                selector: config.selector.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            name: config.name.clone(),
            selector,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matchers_compile() {
        for matcher in default_matchers() {
            assert!(CompiledMatcher::compile(&matcher).is_ok(), "{}", matcher.name);
        }
    }

    #[test]
    fn test_invalid_selector() {
        let config = MatcherConfig::new("broken", "div[");
        let err = CompiledMatcher::compile(&config).unwrap_err();
        assert!(matches!(err, SentimentError::InvalidSelector { .. }));
    }
}
