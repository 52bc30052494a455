//! Per-article scores.
//!
//! Counting conventions:
//! - *word tokens* are every non-whitespace token (punctuation included)
//! - *cleaned words* are alphabetic tokens, lowercased, minus stop words
//!
//! Sentiment and complexity use cleaned words. Sentence length uses word
//! tokens. Personal pronouns are matched on the raw text.

use super::lexicon::{SentimentLexicon, StopWords};
use super::syllables::count_syllables;
use super::tokenize::{clean_words, sentences, word_tokens};
use crate::models::MetricsRecord;
use once_cell::sync::Lazy;
use regex::Regex;

/// Added to denominators that can be zero.
const EPSILON: f64 = 0.000001;

// Case-insensitive, so the country abbreviation "US" also counts.
static PERSONAL_PRONOUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(I|we|my|ours|us)\b").unwrap());

/// Whole-word matches of I / we / my / ours / us in `text`.
pub fn count_personal_pronouns(text: &str) -> usize {
    PERSONAL_PRONOUN_RE.find_iter(text).count()
}

/// Score one article.
///
/// Returns `None` when the text has no sentences or no cleaned words; such
/// articles get no record at all.
pub fn compute_metrics(
    url_id: &str,
    text: &str,
    stop_words: &StopWords,
    lexicon: &SentimentLexicon,
) -> Option<MetricsRecord> {
    let sentence_count = sentences(text).len();
    let tokens = word_tokens(text);
    let cleaned = clean_words(&tokens, stop_words);

    let word_count = cleaned.len();
    if word_count == 0 || sentence_count == 0 {
        return None;
    }
    let words = word_count as f64;

    let positive_score = cleaned.iter().filter(|w| lexicon.positive.contains(*w)).count();
    let negative_score = cleaned.iter().filter(|w| lexicon.negative.contains(*w)).count();
    let sentiment_total = (positive_score + negative_score) as f64;

    let polarity_score = (positive_score as f64 - negative_score as f64) / (sentiment_total + EPSILON);
    let subjectivity_score = sentiment_total / (words + EPSILON);

    let avg_sentence_length = tokens.len() as f64 / sentence_count as f64;

    let syllables: Vec<usize> = cleaned.iter().map(|w| count_syllables(w)).collect();
    let complex_word_count = syllables.iter().filter(|&&s| s > 2).count();
    let percentage_complex_words = complex_word_count as f64 / words;

    let fog_index = 0.4 * (avg_sentence_length + percentage_complex_words);
    let syllable_per_word = syllables.iter().sum::<usize>() as f64 / words;
    let personal_pronouns = count_personal_pronouns(text);
    let avg_word_length = cleaned.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / words;

    Some(MetricsRecord {
        url_id: url_id.to_string(),
        positive_score,
        negative_score,
        polarity_score,
        subjectivity_score,
        avg_sentence_length,
        percentage_complex_words,
        fog_index,
        avg_number_of_words_per_sentence: avg_sentence_length,
        complex_word_count,
        word_count,
        syllable_per_word,
        personal_pronouns,
        avg_word_length,
    })
}
