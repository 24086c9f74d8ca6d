//! Remote sentiment classifier client
//!
//! `BatchClient` sends a whole `CommentSet` to `POST <endpoint>/predict_batch` in one
//! request and turns the response into a `ResultSet`. Any failure (status, transport,
//! body) ends the call with a single `RemoteCallFailed`; there are no retries.

use crate::analysis::{aggregate, Prediction, ResultSet, Stats};
use crate::config::Config;
use crate::error::{Result, SentimentError};
use crate::extractor::CommentSet;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

/// Seam between an analysis session and the classification transport
pub trait Classifier: Send + Sync {
    /// Classify a non-empty batch; one prediction per comment, in order
    fn submit(&self, comments: &CommentSet) -> impl Future<Output = Result<ResultSet>> + Send;
}

/// Request body for /predict_batch
#[derive(Serialize)]
struct PredictBatchRequest<'a> {
    comments: &'a [String],
}

/// Response body from /predict_batch
#[derive(Deserialize)]
struct PredictBatchResponse {
    predictions: Vec<Prediction>,
    statistics: Stats,
}

/// Response body from /health
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy" && self.model_loaded
    }
}

/// HTTP client for the batch classification service
#[derive(Debug, Clone)]
pub struct BatchClient {
    base_url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl BatchClient {
    /// Create a client for the service at `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SentimentError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.classifier.endpoint, config.classifier_timeout()?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe the service health endpoint
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = format!("{}/health", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SentimentError::RemoteCallFailed {
                status: Some(status.as_u16()),
                message: body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| SentimentError::remote(format!("Malformed health response: {}", e)))
    }

    fn transport_error(&self, e: reqwest::Error) -> SentimentError {
        if e.is_connect() {
            SentimentError::remote(format!("Cannot connect to classifier at {}", self.base_url))
        } else if e.is_timeout() {
            SentimentError::remote(format!(
                "Request timed out after {}s",
                self.timeout.as_secs_f64()
            ))
        } else {
            SentimentError::remote(e.to_string())
        }
    }
}

impl Classifier for BatchClient {
    async fn submit(&self, comments: &CommentSet) -> Result<ResultSet> {
        if comments.is_empty() {
            return Err(SentimentError::EmptyBatchPrecondition);
        }

        let url = format!("{}/predict_batch", self.base_url);
        let body = PredictBatchRequest {
            comments: comments.as_slice(),
        };

        tracing::info!("Submitting {} comments to {}", comments.len(), url);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SentimentError::RemoteCallFailed {
                status: Some(status.as_u16()),
                message: if body.is_empty() {
                    status.to_string()
                } else {
                    body
                },
            });
        }

        let parsed: PredictBatchResponse = response
            .json()
            .await
            .map_err(|e| SentimentError::remote(format!("Malformed response body: {}", e)))?;

        into_result_set(comments, parsed)
    }
}

/// Check a decoded response against the submitted batch
fn into_result_set(comments: &CommentSet, response: PredictBatchResponse) -> Result<ResultSet> {
    if response.predictions.len() != comments.len() {
        return Err(SentimentError::remote(format!(
            "Prediction count mismatch: submitted {}, got {}",
            comments.len(),
            response.predictions.len()
        )));
    }

    if let Some(bad) = response
        .predictions
        .iter()
        .find(|p| !(0.0..=1.0).contains(&p.confidence))
    {
        return Err(SentimentError::remote(format!(
            "Confidence out of range: {}",
            bad.confidence
        )));
    }

    let statistics = aggregate(&response.predictions);
    if statistics != response.statistics {
        tracing::warn!(
            "Service statistics {:?} disagree with predictions, using {:?}",
            response.statistics,
            statistics
        );
    }

    Ok(ResultSet {
        predictions: response.predictions,
        statistics,
    })
}
