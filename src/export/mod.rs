//! Serialization of a result set for the clipboard, CSV files and terminal listings
//!
//! These are pure formatters: they assume a well-formed, non-empty `ResultSet`.

use crate::analysis::{Prediction, ResultSet, Sentiment};
use crate::error::{Result, SentimentError};
use std::fmt::Write as _;
use std::path::Path;

/// Default CSV artifact name
pub const CSV_FILENAME: &str = "youtube_sentiment.csv";

/// MIME type of the CSV artifact
pub const CSV_MIME: &str = "text/csv";

const CSV_HEADER: &str = "Text,Sentiment,Confidence";

const SUMMARY_TITLE: &str = "YouTube Sentiment Analysis";

/// Clipboard-friendly summary: title, blank line, then one line per class
pub fn summary_text(results: &ResultSet) -> String {
    let stats = &results.statistics;
    let lines: Vec<String> = Sentiment::ALL
        .iter()
        .map(|&sentiment| {
            format!(
                "{}: {} ({}%)",
                sentiment.label(),
                stats.count(sentiment),
                stats.percentage(sentiment)
            )
        })
        .collect();

    format!("{}\n\n{}", SUMMARY_TITLE, lines.join("\n"))
}

/// Quote a field for CSV, doubling embedded quotes
fn quote_field(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

/// One CSV row, without line terminator
pub fn csv_row(prediction: &Prediction) -> String {
    format!(
        "{},{},{}",
        quote_field(&prediction.text),
        prediction.sentiment.label(),
        prediction.confidence
    )
}

/// Full CSV document; every row, including the last, ends with a newline
pub fn to_csv(results: &ResultSet) -> String {
    let mut csv = String::with_capacity(64 * (results.len() + 1));
    csv.push_str(CSV_HEADER);
    csv.push('\n');

    for prediction in &results.predictions {
        // Writing to a String cannot fail
        let _ = writeln!(csv, "{}", csv_row(prediction));
    }

    csv
}

/// Write the CSV document to `path`
pub fn write_csv(results: &ResultSet, path: &Path) -> Result<()> {
    std::fs::write(path, to_csv(results)).map_err(|e| SentimentError::Io {
        source: e,
        context: format!("Failed to write CSV export: {}", path.display()),
    })?;

    tracing::info!(
        "Exported {} predictions to {} ({})",
        results.len(),
        path.display(),
        CSV_MIME
    );
    Ok(())
}

/// Terminal listing line: marker, text and confidence percentage
pub fn listing_line(prediction: &Prediction) -> String {
    format!(
        "{} {} (confidence: {}%)",
        prediction.sentiment.marker(),
        prediction.text,
        (prediction.confidence * 100.0).round() as u32
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(text: &str, sentiment: Sentiment, confidence: f64) -> Prediction {
        Prediction {
            text: text.to_string(),
            sentiment,
            confidence,
        }
    }

    fn sample() -> ResultSet {
        ResultSet::from_predictions(vec![
            prediction("Great video!", Sentiment::Positive, 0.91),
            prediction("Loved it, thanks", Sentiment::Positive, 0.8),
            prediction("It was fine I guess", Sentiment::Neutral, 0.55),
            prediction("Audio was awful", Sentiment::Negative, 0.7),
        ])
    }

    #[test]
    fn test_csv_row_escapes_quotes_and_commas() {
        let row = csv_row(&prediction("He said \"hi\", ok", Sentiment::Positive, 0.87));
        assert_eq!(row, r#""He said ""hi"", ok",Positive,0.87"#);
    }

    #[test]
    fn test_csv_keeps_newlines_inside_quotes() {
        let row = csv_row(&prediction("line one\nline two", Sentiment::Negative, 1.0));
        assert_eq!(row, "\"line one\nline two\",Negative,1");
    }

    #[test]
    fn test_to_csv_document() {
        let csv = to_csv(&sample());
        let expected = "Text,Sentiment,Confidence\n\
                        \"Great video!\",Positive,0.91\n\
                        \"Loved it, thanks\",Positive,0.8\n\
                        \"It was fine I guess\",Neutral,0.55\n\
                        \"Audio was awful\",Negative,0.7\n";
        assert_eq!(csv, expected);
    }

    #[test]
    fn test_summary_text() {
        let summary = summary_text(&sample());
        assert_eq!(
            summary,
            "YouTube Sentiment Analysis\n\nPositive: 2 (50%)\nNeutral: 1 (25%)\nNegative: 1 (25%)"
        );
    }

    #[test]
    fn test_write_csv() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join(CSV_FILENAME);

        write_csv(&sample(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("Text,Sentiment,Confidence\n"));
        assert_eq!(written.lines().count(), 5);
    }

    #[test]
    fn test_listing_line() {
        let line = listing_line(&prediction("Great video!", Sentiment::Positive, 0.876));
        assert_eq!(line, "👍 Great video! (confidence: 88%)");
    }
}
