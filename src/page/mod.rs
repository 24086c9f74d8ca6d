//! Page content sources
//!
//! A `PageSource` hands out the current rendered markup of a page. Sources are
//! read-only: taking a snapshot never changes what the next snapshot returns.

use crate::error::{Result, SentimentError};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Read-only access to the current state of a rendered page
pub trait PageSource: Send + Sync {
    /// Current markup of the page
    fn snapshot(&self) -> Result<String>;

    /// Short description for logging
    fn describe(&self) -> String;
}

/// Page saved to disk, re-read on every snapshot
#[derive(Debug, Clone)]
pub struct FilePage {
    path: PathBuf,
}

impl FilePage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PageSource for FilePage {
    fn snapshot(&self) -> Result<String> {
        std::fs::read_to_string(&self.path).map_err(|e| SentimentError::Io {
            source: e,
            context: format!("Failed to read page: {}", self.path.display()),
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fixed in-memory markup
#[derive(Debug, Clone)]
pub struct StaticPage {
    html: String,
}

impl StaticPage {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

impl PageSource for StaticPage {
    fn snapshot(&self) -> Result<String> {
        Ok(self.html.clone())
    }

    fn describe(&self) -> String {
        "static page".to_string()
    }
}

/// In-memory markup that the owner can swap out between snapshots
#[derive(Debug, Clone, Default)]
pub struct SharedPage {
    html: Arc<RwLock<String>>,
}

impl SharedPage {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: Arc::new(RwLock::new(html.into())),
        }
    }

    /// Replace the page content (e.g. after more comments were rendered)
    pub fn replace(&self, html: impl Into<String>) {
        let mut guard = self.html.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = html.into();
    }
}

impl PageSource for SharedPage {
    fn snapshot(&self) -> Result<String> {
        let guard = self
            .html
            .read()
            .map_err(|_| SentimentError::Other(anyhow::anyhow!("Shared page lock poisoned")))?;
        Ok(guard.clone())
    }

    fn describe(&self) -> String {
        "shared page".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_page_rereads() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("page.html");
        std::fs::write(&path, "<p>one</p>").unwrap();

        let page = FilePage::new(&path);
        assert_eq!(page.snapshot().unwrap(), "<p>one</p>");

        std::fs::write(&path, "<p>two</p>").unwrap();
        assert_eq!(page.snapshot().unwrap(), "<p>two</p>");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let page = FilePage::new("/nonexistent/page.html");
        assert!(matches!(page.snapshot(), Err(SentimentError::Io { .. })));
    }

    #[test]
    fn test_shared_page_replace() {
        let page = SharedPage::new("<p>before</p>");
        let handle = page.clone();
        handle.replace("<p>after</p>");
        assert_eq!(page.snapshot().unwrap(), "<p>after</p>");
    }
}
