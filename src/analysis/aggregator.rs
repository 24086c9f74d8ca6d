//! Per-class counting of predictions

use super::types::{Prediction, Sentiment, Stats};

/// Count predictions per sentiment class; `total` is the batch length
pub fn aggregate(predictions: &[Prediction]) -> Stats {
    predictions.iter().fold(
        Stats {
            total: predictions.len(),
            ..Stats::default()
        },
        |mut stats, prediction| {
            match prediction.sentiment {
                Sentiment::Positive => stats.positive += 1,
                Sentiment::Neutral => stats.neutral += 1,
                Sentiment::Negative => stats.negative += 1,
            }
            stats
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(sentiment: Sentiment) -> Prediction {
        Prediction {
            text: "some comment".to_string(),
            sentiment,
            confidence: 0.5,
        }
    }

    #[test]
    fn test_aggregate_counts() {
        let predictions = vec![
            prediction(Sentiment::Positive),
            prediction(Sentiment::Negative),
            prediction(Sentiment::Positive),
            prediction(Sentiment::Neutral),
            prediction(Sentiment::Positive),
        ];

        let stats = aggregate(&predictions);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.positive, 3);
        assert_eq!(stats.neutral, 1);
        assert_eq!(stats.negative, 1);
        assert!(stats.is_consistent());
    }

    #[test]
    fn test_aggregate_single_prediction() {
        let stats = aggregate(&[prediction(Sentiment::Neutral)]);
        assert_eq!(stats.total, 1);
        assert_eq!(stats.neutral, 1);
        assert!(stats.is_consistent());
        assert_eq!(stats.percentage(Sentiment::Neutral), 100);
    }
}
