//! Analysis session
//!
//! Holds the state behind the trigger surface: the active result set and the
//! current filter. A completed analysis replaces the result set wholesale and
//! resets the filter; a failed one leaves both untouched.
use crate::analysis::{filter, Prediction, ResultSet, SentimentFilter};
use crate::client::Classifier;
use crate::error::{Result, SentimentError};
use crate::export;
use crate::extractor::Extractor;
use crate::page::PageSource;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Analysis session owned by the control surface
#[derive(Debug, Clone)]
pub struct Session {
    /// Unique session identifier
    pub id: Uuid,

    /// When the session was started
    pub started_at: DateTime<Utc>,

    /// When the active result set was produced
    pub analyzed_at: Option<DateTime<Utc>>,

    current: Option<ResultSet>,
    filter: SentimentFilter,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            analyzed_at: None,
            current: None,
            filter: SentimentFilter::All,
        }
    }

    /// Run one full analysis cycle: extract, classify, aggregate.
    ///
    /// Taking `&mut self` keeps at most one analysis in flight per session.
    pub async fn analyze<C: Classifier>(
        &mut self,
        source: &dyn PageSource,
        extractor: &Extractor,
        classifier: &C,
    ) -> Result<&ResultSet> {
        let comments = extractor.extract_from(source)?;

        if comments.is_empty() {
            tracing::info!("No comments found in {}", source.describe());
            return Err(SentimentError::NoContentFound);
        }

        tracing::info!("Extracted {} comments from {}", comments.len(), source.describe());

        let results = classifier.submit(&comments).await?;

        tracing::info!(
            "Analysis complete: {} positive, {} neutral, {} negative",
            results.statistics.positive,
            results.statistics.neutral,
            results.statistics.negative
        );

        self.filter = SentimentFilter::All;
        self.analyzed_at = Some(Utc::now());
        Ok(&*self.current.insert(results))
    }

    /// Active result set, if an analysis has completed
    pub fn results(&self) -> Option<&ResultSet> {
        self.current.as_ref()
    }

    pub fn current_filter(&self) -> SentimentFilter {
        self.filter
    }

    /// Select a filter and return the matching predictions
    pub fn filter(&mut self, tag: SentimentFilter) -> Option<Vec<&Prediction>> {
        let results = self.current.as_ref()?;
        self.filter = tag;
        Some(filter(results, tag))
    }

    /// Predictions matching the current filter
    pub fn visible(&self) -> Option<Vec<&Prediction>> {
        self.current.as_ref().map(|results| filter(results, self.filter))
    }

    /// CSV export of the active result set
    pub fn export_csv(&self) -> Option<String> {
        self.current.as_ref().map(export::to_csv)
    }

    /// Clipboard summary of the active result set
    pub fn copy_summary(&self) -> Option<String> {
        self.current.as_ref().map(export::summary_text)
    }
}
