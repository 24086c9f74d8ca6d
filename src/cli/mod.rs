//! CLI command definitions and parsing
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "comment-sentiment",
    version,
    author = "neur0map",
    about = "Sentiment reports for the comments on a rendered page",
    long_about = "Extracts the comments from a rendered page, classifies them in a single batch \
                  through a sentiment service, and reports per-class statistics with filtered \
                  listings, clipboard summaries and CSV export."
)]
pub struct Cli {
    /// Global config file path (defaults to ~/.config/comment-sentiment/config.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract and print the comments found on a page
    Extract {
        /// Rendered HTML page
        #[arg(short, long, value_name = "FILE")]
        page: PathBuf,

        /// Print comments as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Run a full analysis of a page's comments
    Analyze {
        /// Rendered HTML page
        #[arg(short, long, value_name = "FILE")]
        page: PathBuf,

        /// Classifier base URL (overrides config)
        #[arg(short, long)]
        endpoint: Option<String>,

        /// Show only one class: all, 1, 0, -1 (or positive, neutral, negative)
        #[arg(short, long, default_value = "all")]
        filter: String,

        /// Export predictions as CSV (defaults to the configured file name)
        #[arg(long, value_name = "PATH", num_args = 0..=1)]
        csv: Option<Option<PathBuf>>,

        /// Print the clipboard summary instead of the listing
        #[arg(long)]
        summary: bool,

        /// Print the result set as JSON
        #[arg(long)]
        json: bool,
    },

    /// Watch a page file and report when more comments appear
    Watch {
        /// Rendered HTML page, re-read on every poll
        #[arg(short, long, value_name = "FILE")]
        page: PathBuf,

        /// Poll interval, e.g. "2s" or "500ms" (overrides config)
        #[arg(short, long)]
        interval: Option<String>,
    },

    /// Check that the classifier service is up
    Health {
        /// Classifier base URL (overrides config)
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Validate configuration file
    Validate {
        /// Path to config file (defaults to standard location)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
