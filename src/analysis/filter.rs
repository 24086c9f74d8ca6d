//! Sentiment filtering of a result set

use super::types::{Prediction, ResultSet, Sentiment};
use crate::error::SentimentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which subset of the active result set is displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentFilter {
    #[default]
    All,
    Only(Sentiment),
}

impl FromStr for SentimentFilter {
    type Err = SentimentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "1" | "positive" => Ok(Self::Only(Sentiment::Positive)),
            "0" | "neutral" => Ok(Self::Only(Sentiment::Neutral)),
            "-1" | "negative" => Ok(Self::Only(Sentiment::Negative)),
            other => Err(SentimentError::InvalidConfigValue {
                path: "filter".to_string(),
                message: format!(
                    "Filter must be one of all, 1, 0, -1 (or positive, neutral, negative), got '{}'",
                    other
                ),
            }),
        }
    }
}

impl fmt::Display for SentimentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(sentiment) => write!(f, "{}", sentiment.value()),
        }
    }
}

/// Predictions matching `tag`, in their original relative order
pub fn filter(result_set: &ResultSet, tag: SentimentFilter) -> Vec<&Prediction> {
    match tag {
        SentimentFilter::All => result_set.predictions.iter().collect(),
        SentimentFilter::Only(sentiment) => result_set
            .predictions
            .iter()
            .filter(|p| p.sentiment == sentiment)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResultSet {
        let rows = [
            ("first positive", Sentiment::Positive),
            ("a negative one", Sentiment::Negative),
            ("second positive", Sentiment::Positive),
            ("just neutral", Sentiment::Neutral),
        ];
        ResultSet::from_predictions(
            rows.iter()
                .map(|(text, sentiment)| Prediction {
                    text: text.to_string(),
                    sentiment: *sentiment,
                    confidence: 0.9,
                })
                .collect(),
        )
    }

    #[test]
    fn test_filter_all_keeps_everything() {
        let results = sample();
        let all: Vec<Prediction> = filter(&results, SentimentFilter::All)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(all, results.predictions);
    }

    #[test]
    fn test_filter_by_class_preserves_order() {
        let results = sample();
        let positives = filter(&results, SentimentFilter::Only(Sentiment::Positive));
        let texts: Vec<&str> = positives.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["first positive", "second positive"]);

        for sentiment in Sentiment::ALL {
            let subset = filter(&results, SentimentFilter::Only(sentiment));
            assert_eq!(subset.len(), results.statistics.count(sentiment));
            assert!(subset.iter().all(|p| p.sentiment == sentiment));
        }
    }

    #[test]
    fn test_parse_filter_tags() {
        assert_eq!("all".parse::<SentimentFilter>().unwrap(), SentimentFilter::All);
        assert_eq!(
            "-1".parse::<SentimentFilter>().unwrap(),
            SentimentFilter::Only(Sentiment::Negative)
        );
        assert_eq!(
            "Positive".parse::<SentimentFilter>().unwrap(),
            SentimentFilter::Only(Sentiment::Positive)
        );
        assert!("2".parse::<SentimentFilter>().is_err());
        assert_eq!(SentimentFilter::Only(Sentiment::Neutral).to_string(), "0");
    }
}
