use comment_sentiment::analysis::SentimentFilter;
use comment_sentiment::cli::{Cli, Commands, ConfigAction};
use comment_sentiment::client::BatchClient;
use comment_sentiment::config::Config;
use comment_sentiment::error::{Result, SentimentError};
use comment_sentiment::export;
use comment_sentiment::extractor::Extractor;
use comment_sentiment::page::{FilePage, PageSource};
use comment_sentiment::poller::Poller;
use comment_sentiment::session::Session;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

fn main() {
    let cli = Cli::parse_args();

    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Extract { page, json } => cmd_extract(cli.config, &page, json),
        Commands::Analyze {
            page,
            endpoint,
            filter,
            csv,
            summary,
            json,
        } => {
            let options = AnalyzeOptions {
                endpoint,
                filter: filter.parse()?,
                csv,
                summary,
                json,
            };
            cmd_analyze(cli.config, &page, options)
        }
        Commands::Watch { page, interval } => cmd_watch(cli.config, &page, interval),
        Commands::Health { endpoint } => cmd_health(cli.config, endpoint),
        Commands::Config { action } => cmd_config(cli.config, action),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose {
        "comment_sentiment=debug"
    } else {
        "comment_sentiment=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new().map_err(|e| SentimentError::Io {
        source: e,
        context: "Failed to create tokio runtime".to_string(),
    })
}

fn cmd_extract(config_path: Option<PathBuf>, page: &Path, json: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let extractor = Extractor::from_config(&config.extraction)?;
    tracing::debug!(
        "Matchers: {}",
        extractor.matcher_names().collect::<Vec<_>>().join(", ")
    );

    let comments = extractor.extract_from(&FilePage::new(page))?;

    if json {
        let out = serde_json::to_string_pretty(&comments).map_err(|e| SentimentError::Json {
            source: e,
            context: "Failed to serialize comments".to_string(),
        })?;
        println!("{}", out);
        return Ok(());
    }

    println!("{} comments found", comments.len());
    for (i, comment) in comments.iter().enumerate() {
        println!("{:>4}. {}", i + 1, comment);
    }

    Ok(())
}

struct AnalyzeOptions {
    endpoint: Option<String>,
    filter: SentimentFilter,
    csv: Option<Option<PathBuf>>,
    summary: bool,
    json: bool,
}

fn cmd_analyze(config_path: Option<PathBuf>, page: &Path, options: AnalyzeOptions) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(endpoint) = options.endpoint {
        config.classifier.endpoint = endpoint;
    }

    let extractor = Extractor::from_config(&config.extraction)?;
    let client = BatchClient::from_config(&config)?;
    let source = FilePage::new(page);
    let mut session = Session::new();

    let rt = runtime()?;
    rt.block_on(session.analyze(&source, &extractor, &client))?;

    if options.json {
        let out = serde_json::to_string_pretty(&session.results()).map_err(|e| {
            SentimentError::Json {
                source: e,
                context: "Failed to serialize results".to_string(),
            }
        })?;
        println!("{}", out);
    } else if options.summary {
        if let Some(summary) = session.copy_summary() {
            println!("{}", summary);
        }
    } else {
        if let Some(summary) = session.copy_summary() {
            println!("{}\n", summary);
        }
        if let Some(predictions) = session.filter(options.filter) {
            println!("Showing {} comments (filter: {})", predictions.len(), options.filter);
            for prediction in predictions {
                println!("  {}", export::listing_line(prediction));
            }
        }
    }

    if let Some(csv) = options.csv {
        let path = csv.unwrap_or_else(|| config.export.csv_file.clone());
        if let Some(results) = session.results() {
            export::write_csv(results, &path)?;
            println!("✓ CSV exported to {}", path.display());
        }
    }

    Ok(())
}

fn cmd_watch(config_path: Option<PathBuf>, page: &Path, interval: Option<String>) -> Result<()> {
    let config = load_config(config_path)?;

    let interval = config.watch_interval(interval.as_deref())?;

    let extractor = Arc::new(Extractor::from_config(&config.extraction)?);
    let source: Arc<dyn PageSource> = Arc::new(FilePage::new(page));

    println!(
        "Watching {} every {:?} (Ctrl-C to stop)",
        source.describe(),
        interval
    );

    let rt = runtime()?;
    rt.block_on(watch_until_interrupted(source, extractor, interval))
}

async fn watch_until_interrupted(
    source: Arc<dyn PageSource>,
    extractor: Arc<Extractor>,
    interval: Duration,
) -> Result<()> {
    let poller = Poller::start(source, extractor, interval, |count| {
        println!("  {} comments visible", count);
    })?;

    let signal = tokio::signal::ctrl_c().await;

    let seen = poller.last_seen_count();
    poller.shutdown().await;
    println!("✓ Stopped watching ({} comments seen)", seen);

    signal.map_err(|e| SentimentError::Io {
        source: e,
        context: "Failed to listen for Ctrl-C".to_string(),
    })
}

fn cmd_health(config_path: Option<PathBuf>, endpoint: Option<String>) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(endpoint) = endpoint {
        config.classifier.endpoint = endpoint;
    }

    let client = BatchClient::from_config(&config)?;
    let rt = runtime()?;
    let health = rt.block_on(client.health())?;

    if health.is_healthy() {
        println!("✓ Classifier at {} is healthy", client.base_url());
    } else {
        println!(
            "⚠ Classifier at {} reports status '{}' (model loaded: {})",
            client.base_url(),
            health.status,
            health.model_loaded
        );
    }

    Ok(())
}

fn cmd_config(config_path: Option<PathBuf>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = load_config(config_path)?;
            let out = toml::to_string_pretty(&config)?;
            println!("{}", out);
        }
        ConfigAction::Validate { file } => {
            let path = match file.or(config_path) {
                Some(path) => path,
                None => Config::default_path()?,
            };
            let config = Config::load(&path)?;
            println!("✓ Configuration is valid");
            println!("  Schema version: {}", config.meta.schema_version);
        }
        ConfigAction::Init { force } => {
            let path = match config_path {
                Some(path) => path,
                None => Config::default_path()?,
            };

            if path.exists() && !force {
                println!("Configuration file already exists at: {}", path.display());
                println!("Use --force to overwrite");
                return Ok(());
            }

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| SentimentError::Io {
                    source: e,
                    context: format!("Failed to create config directory: {:?}", parent),
                })?;
            }

            Config::default().save(&path)?;
            println!("✓ Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

fn load_config(config_path: Option<PathBuf>) -> Result<Config> {
    let path = match config_path {
        Some(path) => path,
        None => Config::default_path()?,
    };

    if !path.exists() {
        tracing::warn!(
            "Config file not found, using defaults. Run 'comment-sentiment config init' to create one."
        );
        return Config::from_env();
    }

    Config::load(&path)
}
