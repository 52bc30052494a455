//! # Article Metrics
//!
//! A two-stage batch pipeline over a table of `(URL_ID, URL)` rows:
//!
//! 1. **Scrape**: fetch each URL, extract the title and body text, and store
//!    it as `<articles_dir>/<URL_ID>.txt`
//! 2. **Analyze**: score every stored article (sentiment, subjectivity, fog
//!    index, syllables, personal pronouns, ...) and write the input table
//!    left-joined with the scores
//!
//! ## Usage
//!
//! ```sh
//! article_metrics run --input Input.csv --output "Output Data Structure.csv"
//! ```
//!
//! Rows are processed one at a time. A row that fails to fetch, or whose text
//! has nothing to score, is logged and skipped; missing inputs abort the run
//! before any output is written.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod analysis;
mod cli;
mod config;
mod error;
mod input;
mod models;
mod outputs;
mod pipeline;
mod scrapers;
mod utils;

use cli::{Cli, Command};

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
    info!("article_metrics starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = match config::load_config(args.config.as_deref()).await {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            return Err(e.into());
        }
    };

    let result = match &args.command {
        Command::Scrape(fetch) => {
            pipeline::run_scrape(&args.input, &args.articles_dir, &config, fetch)
                .await
                .map(|_| ())
        }
        Command::Rescrape { ids, fetch } => {
            pipeline::run_rescrape(&args.input, &args.articles_dir, &config, ids, fetch)
                .await
                .map(|summary| {
                    if summary.is_none() {
                        warn!("Re-scrape had nothing to do");
                    }
                })
        }
        Command::Analyze(analyze) => {
            pipeline::run_analyze(&args.input, &args.articles_dir, &config, analyze)
                .await
                .map(|_| ())
        }
        Command::Run { fetch, analyze } => {
            pipeline::run_all(&args.input, &args.articles_dir, &config, fetch, analyze)
                .await
                .map(|_| ())
        }
    };

    if let Err(e) = result {
        error!(error = %e, "Run aborted");
        return Err(e);
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
