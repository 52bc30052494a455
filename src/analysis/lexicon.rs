//! Stop-word and sentiment word lists.
//!
//! Both are loaded once before any article is read and then only borrowed.
//! List files hold one entry per line. Entries are lowercased, and anything
//! after a `|` is dropped because the currency and geographic lists annotate
//! entries that way (`EURO | Europe`). Files are decoded lossily since the
//! published lists are not all UTF-8.

use crate::config::PipelineConfig;
use crate::error::SetupError;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, instrument};

/// Union of every stop-word list.
#[derive(Debug, Default, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        StopWords {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Positive and negative word sets.
#[derive(Debug, Default, Clone)]
pub struct SentimentLexicon {
    pub positive: HashSet<String>,
    pub negative: HashSet<String>,
}

impl SentimentLexicon {
    pub fn new<P, N, S>(positive: P, negative: N) -> Self
    where
        P: IntoIterator<Item = S>,
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SentimentLexicon {
            positive: positive.into_iter().map(Into::into).collect(),
            negative: negative.into_iter().map(Into::into).collect(),
        }
    }
}

/// Split a list file into normalized entries.
pub fn parse_word_list(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.lines()
        .map(|line| line.split('|').next().unwrap_or_default().trim())
        .filter(|entry| !entry.is_empty())
        .map(str::to_lowercase)
}

async fn read_list(path: &Path) -> Result<String, SetupError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(SetupError::MissingLexiconFile(path.to_path_buf()))
        }
        Err(e) => Err(e.into()),
    }
}

fn require_dir(dir: &Path) -> Result<(), SetupError> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(SetupError::MissingLexiconDir(dir.to_path_buf()))
    }
}

/// Load and union the configured stop-word files from `dir`.
#[instrument(level = "info", skip_all, fields(dir = %dir.display()))]
pub async fn load_stop_words(dir: &Path, config: &PipelineConfig) -> Result<StopWords, SetupError> {
    require_dir(dir)?;

    let mut words = HashSet::new();
    for file in &config.stop_word_files {
        let raw = read_list(&dir.join(file)).await?;
        words.extend(parse_word_list(&raw));
    }

    info!(files = config.stop_word_files.len(), words = words.len(), "Loaded stop words");
    Ok(StopWords { words })
}

/// Load the positive and negative lists from `dir`.
#[instrument(level = "info", skip_all, fields(dir = %dir.display()))]
pub async fn load_sentiment_lexicon(
    dir: &Path,
    config: &PipelineConfig,
) -> Result<SentimentLexicon, SetupError> {
    require_dir(dir)?;

    let positive = read_list(&dir.join(&config.positive_words_file)).await?;
    let negative = read_list(&dir.join(&config.negative_words_file)).await?;
    let lexicon = SentimentLexicon::new(parse_word_list(&positive), parse_word_list(&negative));

    info!(
        positive = lexicon.positive.len(),
        negative = lexicon.negative.len(),
        "Loaded sentiment lexicon"
    );
    Ok(lexicon)
}
