//! Data models shared by the scrape and analyze stages.
//!
//! - [`InputRow`]: one `(URL_ID, URL)` pair from the input table
//! - [`ArticleText`]: title and body extracted from one fetched page
//! - [`MetricsRecord`]: the scores computed for one stored article
//! - [`OutputRow`]: an input row left-joined with its record, in output column order
//!
//! Column names follow the spreadsheet headers, hence the `serde(rename)` attributes.

use serde::{Deserialize, Serialize};

/// Placeholder title written when a page has no heading element.
pub const TITLE_NOT_FOUND: &str = "Title Not Found";

/// Placeholder body written when no content container matched.
pub const BODY_NOT_FOUND: &str = "Body Content Not Found";

/// A row of the input table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct InputRow {
    /// Unique key shared by the row, its stored article and its record.
    #[serde(rename = "URL_ID")]
    pub url_id: String,
    /// Page to fetch.
    #[serde(rename = "URL")]
    pub url: String,
}

/// Title and body extracted from one HTML document.
///
/// Either field may hold a sentinel ([`TITLE_NOT_FOUND`], [`BODY_NOT_FOUND`]);
/// that is degraded output, not an error, and it is stored like any other text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleText {
    pub url_id: String,
    pub title: String,
    pub body: String,
}

impl ArticleText {
    /// Text as stored on disk: title, blank line, body.
    pub fn to_file_contents(&self) -> String {
        format!("{}\n\n{}", self.title, self.body)
    }
}

/// Scores for one article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub url_id: String,
    pub positive_score: usize,
    pub negative_score: usize,
    pub polarity_score: f64,
    pub subjectivity_score: f64,
    pub avg_sentence_length: f64,
    pub percentage_complex_words: f64,
    pub fog_index: f64,
    pub avg_number_of_words_per_sentence: f64,
    pub complex_word_count: usize,
    pub word_count: usize,
    pub syllable_per_word: f64,
    pub personal_pronouns: usize,
    pub avg_word_length: f64,
}

/// One line of the output table.
///
/// Field order is the column order. Metric cells are `None` (written empty)
/// for rows whose article produced no record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputRow {
    #[serde(rename = "URL_ID")]
    pub url_id: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "POSITIVE SCORE")]
    pub positive_score: Option<usize>,
    #[serde(rename = "NEGATIVE SCORE")]
    pub negative_score: Option<usize>,
    #[serde(rename = "POLARITY SCORE")]
    pub polarity_score: Option<f64>,
    #[serde(rename = "SUBJECTIVITY SCORE")]
    pub subjectivity_score: Option<f64>,
    #[serde(rename = "AVG SENTENCE LENGTH")]
    pub avg_sentence_length: Option<f64>,
    #[serde(rename = "PERCENTAGE OF COMPLEX WORDS")]
    pub percentage_complex_words: Option<f64>,
    #[serde(rename = "FOG INDEX")]
    pub fog_index: Option<f64>,
    #[serde(rename = "AVG NUMBER OF WORDS PER SENTENCE")]
    pub avg_number_of_words_per_sentence: Option<f64>,
    #[serde(rename = "COMPLEX WORD COUNT")]
    pub complex_word_count: Option<usize>,
    #[serde(rename = "WORD COUNT")]
    pub word_count: Option<usize>,
    #[serde(rename = "SYLLABLE PER WORD")]
    pub syllable_per_word: Option<f64>,
    #[serde(rename = "PERSONAL PRONOUNS")]
    pub personal_pronouns: Option<usize>,
    #[serde(rename = "AVG WORD LENGTH")]
    pub avg_word_length: Option<f64>,
}

impl OutputRow {
    /// Join an input row with its (possibly absent) record.
    pub fn join(row: &InputRow, record: Option<&MetricsRecord>) -> Self {
        OutputRow {
            url_id: row.url_id.clone(),
            url: row.url.clone(),
            positive_score: record.map(|r| r.positive_score),
            negative_score: record.map(|r| r.negative_score),
            polarity_score: record.map(|r| r.polarity_score),
            subjectivity_score: record.map(|r| r.subjectivity_score),
            avg_sentence_length: record.map(|r| r.avg_sentence_length),
            percentage_complex_words: record.map(|r| r.percentage_complex_words),
            fog_index: record.map(|r| r.fog_index),
            avg_number_of_words_per_sentence: record.map(|r| r.avg_number_of_words_per_sentence),
            complex_word_count: record.map(|r| r.complex_word_count),
            word_count: record.map(|r| r.word_count),
            syllable_per_word: record.map(|r| r.syllable_per_word),
            personal_pronouns: record.map(|r| r.personal_pronouns),
            avg_word_length: record.map(|r| r.avg_word_length),
        }
    }
}
