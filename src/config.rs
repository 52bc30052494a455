//! Optional YAML configuration.
//!
//! Every field has a default, so a missing file and a partial file are both
//! valid. A path that is given but cannot be read or parsed is a
//! [`SetupError::Config`].
//!
//! ```yaml
//! stop_word_files:
//!   - StopWords_Generic.txt
//! positive_words_file: positive-words.txt
//! negative_words_file: negative-words.txt
//! retry_ids:
//!   - Netclan20241034
//! ```

use crate::error::SetupError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, instrument};

/// Browser-like user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// File names inside the stop-word directory, unioned into one set.
    pub stop_word_files: Vec<String>,
    /// Positive lexicon file inside the master dictionary directory.
    pub positive_words_file: String,
    /// Negative lexicon file inside the master dictionary directory.
    pub negative_words_file: String,
    pub user_agent: String,
    /// Identifiers re-fetched by `rescrape` in addition to any `--id` flags.
    pub retry_ids: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            stop_word_files: [
                "StopWords_Auditor.txt",
                "StopWords_Currencies.txt",
                "StopWords_DatesandNumbers.txt",
                "StopWords_Generic.txt",
                "StopWords_GenericLong.txt",
                "StopWords_Geographic.txt",
                "StopWords_Names.txt",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            positive_words_file: "positive-words.txt".to_string(),
            negative_words_file: "negative-words.txt".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            retry_ids: Vec::new(),
        }
    }
}

/// Load the config at `path`, or the defaults when no path is given.
#[instrument(level = "info")]
pub async fn load_config(path: Option<&Path>) -> Result<PipelineConfig, SetupError> {
    let Some(path) = path else {
        return Ok(PipelineConfig::default());
    };

    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SetupError::Config {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
    let config = parse_config(&raw).map_err(|e| SetupError::Config {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    info!(
        path = %path.display(),
        stop_word_files = config.stop_word_files.len(),
        retry_ids = config.retry_ids.len(),
        "Loaded configuration"
    );
    Ok(config)
}

fn parse_config(raw: &str) -> Result<PipelineConfig, serde_yaml::Error> {
    // An empty document deserializes to unit, not to a struct.
    if raw.trim().is_empty() {
        return Ok(PipelineConfig::default());
    }
    serde_yaml::from_str(raw)
}
