//! # Article Roundup
//!
//! Fetches a user's published articles from Zenn and Qiita, merges them into
//! one newest-first record set, and writes the result to a CSV or JSON file
//! in the working directory.
//!
//! ## Usage
//!
//! ```sh
//! article_roundup -c config.json
//! ```
//!
//! ## Pipeline
//!
//! 1. **Config**: load usernames and the output format from a JSON file
//! 2. **Fetch**: request each platform's first page of articles, one after
//!    the other; a failed source contributes zero records
//! 3. **Merge**: normalize both payload shapes into one record type and
//!    sort by publication timestamp, newest first
//! 4. **Output**: write `combined_articles.csv` or `combined_articles.json`

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod merge;
mod models;
mod outputs;
mod sources;

use cli::Cli;
use sources::{ArticleSource, qiita::Qiita, zenn::Zenn};

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
    info!("article_roundup starting up");

    let args = Cli::parse();
    debug!(?args.config, "Parsed CLI arguments");

    let config = match config::load_config(&args.config).await {
        Ok(config) => config,
        Err(e) => {
            error!(path = %args.config, error = %e, "Configuration file could not be loaded");
            return Ok(());
        }
    };

    // Strictly sequential: the Zenn fetch completes before Qiita starts.
    let zenn_articles = Zenn.fetch_articles(&config.zenn_username).await;
    let qiita_articles = Qiita.fetch_articles(&config.qiita_username).await;

    if zenn_articles.is_empty() && qiita_articles.is_empty() {
        warn!("No articles found");
        return Ok(());
    }

    let combined = merge::merge_articles(zenn_articles, qiita_articles)?;

    match config.output_format.as_str() {
        "csv" => outputs::csv::write_articles(&combined, outputs::CSV_FILENAME).await?,
        "json" => {
            if let Err(e) = outputs::json::write_articles(&combined, outputs::JSON_FILENAME).await {
                error!(error = %e, "An error occurred while saving JSON");
            }
        }
        other => warn!(output_format = %other, "No output method specified; nothing written"),
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
