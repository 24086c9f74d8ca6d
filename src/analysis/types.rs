// Shared types for classifier results
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentiment class assigned by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
}

impl Sentiment {
    /// All classes in report order
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    /// Wire value: 1, 0 or -1
    pub fn value(self) -> i8 {
        match self {
            Sentiment::Negative => -1,
            Sentiment::Neutral => 0,
            Sentiment::Positive => 1,
        }
    }

    /// Display label used in reports and CSV
    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
            Sentiment::Positive => "Positive",
        }
    }

    /// Short marker for terminal listings
    pub fn marker(self) -> &'static str {
        match self {
            Sentiment::Negative => "👎",
            Sentiment::Neutral => "😐",
            Sentiment::Positive => "👍",
        }
    }
}

impl TryFrom<i8> for Sentiment {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Sentiment::Negative),
            0 => Ok(Sentiment::Neutral),
            1 => Ok(Sentiment::Positive),
            other => Err(format!("sentiment must be -1, 0 or 1, got {}", other)),
        }
    }
}

impl From<Sentiment> for i8 {
    fn from(sentiment: Sentiment) -> Self {
        sentiment.value()
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifier output for a single comment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Comment text as submitted
    pub text: String,
    /// Predicted class
    pub sentiment: Sentiment,
    /// Probability of the predicted class (0.0 - 1.0)
    pub confidence: f64,
}

/// Per-class counts for one batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total: usize,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl Stats {
    /// Count for a single class
    pub fn count(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    /// Share of a class as a whole percentage, rounded half up.
    ///
    /// `total` must be at least 1; a ResultSet never holds an empty batch.
    pub fn percentage(&self, sentiment: Sentiment) -> u32 {
        debug_assert!(self.total > 0, "percentage of an empty batch");
        (self.count(sentiment) as f64 / self.total as f64 * 100.0).round() as u32
    }

    /// Whether the class counts add up to the total
    pub fn is_consistent(&self) -> bool {
        self.positive + self.neutral + self.negative == self.total
    }
}

/// Predictions and statistics from one completed analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub predictions: Vec<Prediction>,
    pub statistics: Stats,
}

impl ResultSet {
    /// Build a result set, deriving statistics from the predictions
    pub fn from_predictions(predictions: Vec<Prediction>) -> Self {
        let statistics = super::aggregate(&predictions);
        Self {
            predictions,
            statistics,
        }
    }

    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }
}
