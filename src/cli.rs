//! Command-line interface definitions.
//!
//! Every option can also be set through an environment variable.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Scrape articles listed in a URL table and score their text.
///
/// # Examples
///
/// ```sh
/// # Fetch every row of Input.csv into Extracted_Data/
/// article_metrics scrape
///
/// # Re-fetch two rows that failed earlier, with the shorter timeout
/// article_metrics rescrape --id Netclan20241034 --id Netclan20241162
///
/// # Score the stored articles
/// article_metrics analyze --output "Output Data Structure.csv"
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Input table with URL_ID and URL columns
    #[arg(short, long, global = true, env = "ARTICLE_METRICS_INPUT", default_value = "Input.csv")]
    pub input: PathBuf,

    /// Directory holding one <URL_ID>.txt per article
    #[arg(short, long, global = true, env = "ARTICLE_METRICS_ARTICLES_DIR", default_value = "Extracted_Data")]
    pub articles_dir: PathBuf,

    /// Optional path to a YAML config file
    #[arg(short, long, global = true, env = "ARTICLE_METRICS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch every row and store its article text
    Scrape(FetchArgs),
    /// Re-fetch a hand-picked list of identifiers
    Rescrape {
        /// URL_ID to re-fetch (repeatable; merged with retry_ids from the config)
        #[arg(long = "id")]
        ids: Vec<String>,

        #[command(flatten)]
        fetch: FetchArgs,
    },
    /// Score the stored articles and write the results table
    Analyze(AnalyzeArgs),
    /// Scrape, then analyze
    Run {
        #[command(flatten)]
        fetch: FetchArgs,

        #[command(flatten)]
        analyze: AnalyzeArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct FetchArgs {
    /// Request timeout in seconds (default: 60 for scrape/run, 20 for rescrape)
    #[arg(long, env = "ARTICLE_METRICS_TIMEOUT")]
    pub timeout: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Directory with the stop-word lists
    #[arg(long, env = "ARTICLE_METRICS_STOP_WORDS_DIR", default_value = "StopWords")]
    pub stop_words_dir: PathBuf,

    /// Directory with the positive/negative word lists
    #[arg(long, env = "ARTICLE_METRICS_MASTER_DICTIONARY_DIR", default_value = "MasterDictionary")]
    pub master_dictionary_dir: PathBuf,

    /// Results table to write
    #[arg(short, long, env = "ARTICLE_METRICS_OUTPUT", default_value = "Output Data Structure.csv")]
    pub output: PathBuf,

    /// Also write a JSON report of the computed records
    #[arg(long, env = "ARTICLE_METRICS_JSON_OUTPUT")]
    pub json_output: Option<PathBuf>,
}
