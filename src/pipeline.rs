//! Stage drivers behind each subcommand.
//!
//! Every driver validates its inputs (table, word lists, output dir) before
//! touching the first row, so a setup failure never leaves partial output.

use crate::analysis::{self, lexicon};
use crate::cli::{AnalyzeArgs, FetchArgs};
use crate::config::PipelineConfig;
use crate::error::SetupError;
use crate::input::{load_input_rows, select_rows};
use crate::models::InputRow;
use crate::outputs::{json, table};
use crate::scrapers::fetch::{Fetcher, RESCRAPE_TIMEOUT_SECS, SCRAPE_TIMEOUT_SECS};
use crate::scrapers::{self, ScrapeSummary};
use crate::utils::ensure_writable_dir;
use itertools::Itertools;
use std::error::Error;
use std::path::Path;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Full scrape pass over every input row.
#[instrument(level = "info", skip_all)]
pub async fn run_scrape(
    input: &Path,
    articles_dir: &Path,
    config: &PipelineConfig,
    fetch: &FetchArgs,
) -> Result<ScrapeSummary, Box<dyn Error>> {
    let rows = load_input_rows(input)?;
    let timeout = fetch.timeout.unwrap_or(SCRAPE_TIMEOUT_SECS);
    scrape(&rows, articles_dir, config, timeout).await
}

/// Re-fetch only the listed identifiers, with the shorter default timeout.
///
/// Returns `None` when none of the identifiers appear in the input table.
#[instrument(level = "info", skip_all)]
pub async fn run_rescrape(
    input: &Path,
    articles_dir: &Path,
    config: &PipelineConfig,
    ids: &[String],
    fetch: &FetchArgs,
) -> Result<Option<ScrapeSummary>, Box<dyn Error>> {
    let all_rows = load_input_rows(input)?;

    let wanted: Vec<String> = ids
        .iter()
        .chain(config.retry_ids.iter())
        .cloned()
        .unique()
        .collect();
    let rows = select_rows(&all_rows, &wanted);

    for id in wanted.iter().filter(|id| !rows.iter().any(|r| &r.url_id == *id)) {
        warn!(url_id = %id, "Requested URL_ID not in input table");
    }
    if rows.is_empty() {
        warn!(requested = wanted.len(), "No matching URL_IDs found in the input table; nothing to re-scrape");
        return Ok(None);
    }

    let timeout = fetch.timeout.unwrap_or(RESCRAPE_TIMEOUT_SECS);
    scrape(&rows, articles_dir, config, timeout).await.map(Some)
}

async fn scrape(
    rows: &[InputRow],
    articles_dir: &Path,
    config: &PipelineConfig,
    timeout_secs: u64,
) -> Result<ScrapeSummary, Box<dyn Error>> {
    ensure_writable_dir(articles_dir).await?;
    let fetcher = Fetcher::new(&config.user_agent, Duration::from_secs(timeout_secs))?;
    Ok(scrapers::scrape_rows(rows, &fetcher, articles_dir).await)
}

/// Analyze pass: score stored articles and write the results table.
#[instrument(level = "info", skip_all)]
pub async fn run_analyze(
    input: &Path,
    articles_dir: &Path,
    config: &PipelineConfig,
    args: &AnalyzeArgs,
) -> Result<analysis::AnalysisOutcome, Box<dyn Error>> {
    let rows = load_input_rows(input)?;
    let (stop_words, sentiment) = load_word_lists(config, args).await?;
    analyze_and_write(&rows, articles_dir, &stop_words, &sentiment, args).await
}

/// Scrape, then analyze, with every input checked before the first fetch.
#[instrument(level = "info", skip_all)]
pub async fn run_all(
    input: &Path,
    articles_dir: &Path,
    config: &PipelineConfig,
    fetch: &FetchArgs,
    args: &AnalyzeArgs,
) -> Result<(ScrapeSummary, analysis::AnalysisOutcome), Box<dyn Error>> {
    let rows = load_input_rows(input)?;
    let (stop_words, sentiment) = load_word_lists(config, args).await?;

    let timeout = fetch.timeout.unwrap_or(SCRAPE_TIMEOUT_SECS);
    let summary = scrape(&rows, articles_dir, config, timeout).await?;
    let outcome = analyze_and_write(&rows, articles_dir, &stop_words, &sentiment, args).await?;
    Ok((summary, outcome))
}

async fn load_word_lists(
    config: &PipelineConfig,
    args: &AnalyzeArgs,
) -> Result<(lexicon::StopWords, lexicon::SentimentLexicon), SetupError> {
    let stop_words = lexicon::load_stop_words(&args.stop_words_dir, config).await?;
    let sentiment = lexicon::load_sentiment_lexicon(&args.master_dictionary_dir, config).await?;
    if stop_words.is_empty() {
        warn!("Stop-word lists are empty; every alphabetic token will be scored");
    }
    Ok((stop_words, sentiment))
}

async fn analyze_and_write(
    rows: &[InputRow],
    articles_dir: &Path,
    stop_words: &lexicon::StopWords,
    sentiment: &lexicon::SentimentLexicon,
    args: &AnalyzeArgs,
) -> Result<analysis::AnalysisOutcome, Box<dyn Error>> {
    let outcome = analysis::analyze_rows(rows, articles_dir, stop_words, sentiment).await;

    let merged = table::merge_results(rows, &outcome.records);
    table::write_results(&args.output, &merged)?;
    info!(path = %args.output.display(), rows = merged.len(), "Results table saved");

    if let Some(json_path) = &args.json_output {
        let report = json::MetricsReport::new(&outcome.records, outcome.missing, outcome.skipped);
        json::write_report(&report, json_path).await?;
    }

    Ok(outcome)
}
