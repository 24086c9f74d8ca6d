//! Comment Sentiment - page comment collection and sentiment reporting
//!
//! Collects comment text from rendered pages, classifies it in one batch through a
//! remote sentiment service, and turns the predictions into statistics, filtered
//! listings, clipboard summaries and CSV exports.

pub mod analysis;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod extractor;
pub mod page;
pub mod poller;
pub mod session;

pub use error::{Result, SentimentError};
