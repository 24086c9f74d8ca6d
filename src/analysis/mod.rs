//! Post-processing of classifier output
//!
//! - `types`: predictions, statistics and the result set they form
//! - `aggregator`: per-class counts
//! - `filter`: sentiment subsets of a result set

mod aggregator;
mod filter;
mod types;

pub use aggregator::aggregate;
pub use filter::{filter, SentimentFilter};
pub use types::{Prediction, ResultSet, Sentiment, Stats};
