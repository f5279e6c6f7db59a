//! Binary entry point: wires the CLI to the digest pipeline.
//!
//! Stage order follows the data flow: ingest feeds, scan the resource
//! listing, assemble the digest, generate the article, persist it, generate
//! the tweet, persist it, and print the tweet to stdout. Per-source problems
//! are logged and skipped; generation and filesystem failures abort the run.

use ai_digest::api::{self, GenerationClient};
use ai_digest::cli::Cli;
use ai_digest::config::{self, DigestConfig};
use ai_digest::models::RecencyWindow;
use ai_digest::utils::ensure_writable_dir;
use ai_digest::{digest, outputs, scrapers};
use chrono::Utc;
use clap::Parser;
use reqwest::Client;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

/// Bounded timeout for feed and page fetches, well below the generation
/// client's.
const FETCH_TIMEOUT: Duration = Duration::from_secs(8);

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("ai_digest starting up");

    // Parse CLI and resolve configuration
    let args = Cli::parse();
    debug!(?args.output_dir, ?args.config, "Parsed CLI arguments");

    let mut config = match args.config.as_deref() {
        Some(path) => {
            let loaded = config::load_config(path)?;
            info!(config_path = path, "Loaded configuration");
            loaded
        }
        None => DigestConfig::default(),
    };
    if let Some(url) = args.generation_url {
        config.generation_url = url;
    }
    if let Some(model) = args.model {
        config.model = model;
    }

    // Early check: ensure the output dir is writable before any network work
    ensure_writable_dir(&args.output_dir).await?;

    // Captured exactly once; every feed is filtered against the same window
    let window = RecencyWindow::last_days(config.lookback_days);
    let run_date = Utc::now().format("%Y-%m-%d").to_string();
    info!(%run_date, window_start = %window.start(), "Run window captured");

    let http = Client::builder()
        .user_agent(concat!("ai_digest/", env!("CARGO_PKG_VERSION")))
        .timeout(FETCH_TIMEOUT)
        .build()?;

    // ---- Ingest ----
    info!(feeds = config.feed_urls.len(), "Fetching feed updates");
    let entries = scrapers::feeds::fetch_feed_updates(&http, &config.feed_urls, &window).await;

    info!(page = %config.listing_url, "Scanning resource listing");
    let resources = scrapers::listing::scan_resource_listing(&http, &config.listing_url).await;

    // ---- Assemble ----
    let digest_text = digest::assemble_digest(&entries, &resources, &config, &run_date);
    info!(
        entries = entries.len(),
        resources = resources.len(),
        digest_bytes = digest_text.len(),
        "Assembled digest"
    );

    // ---- Generate and persist ----
    let generator = GenerationClient::new(&config.generation_url, &config.model);

    info!(model = %config.model, "Generating article");
    let article = api::generate_article(&generator, &digest_text, &run_date).await?;
    outputs::write_article_artifacts(&args.output_dir, &run_date, &article).await?;

    info!("Generating tweet from article");
    let tweet = api::generate_tweet(&generator, &article).await?;
    outputs::write_tweet(&args.output_dir, &run_date, &tweet).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        path = %outputs::dated_dir(&args.output_dir, &run_date).display(),
        "Saved digest artifacts"
    );

    println!("\nSuggested tweet:\n{}", tweet.trim());

    Ok(())
}
