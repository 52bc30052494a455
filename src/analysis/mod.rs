//! Analyze stage: score every stored article.
//!
//! The word lists ([`lexicon`]) are loaded once up front and borrowed for the
//! whole pass. Each article is read, segmented ([`tokenize`]) and scored
//! ([`metrics`], [`syllables`]). Rows with no stored file, or whose text has no
//! usable words, produce no record and are logged.

pub mod lexicon;
pub mod metrics;
pub mod syllables;
pub mod tokenize;

use crate::models::{InputRow, MetricsRecord};
use crate::scrapers::store;
use lexicon::{SentimentLexicon, StopWords};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Records produced by one analyze pass, in input order.
#[derive(Debug, Default)]
pub struct AnalysisOutcome {
    pub records: Vec<MetricsRecord>,
    pub missing: usize,
    pub skipped: usize,
}

#[instrument(level = "info", skip_all, fields(rows = rows.len(), articles_dir = %articles_dir.display()))]
pub async fn analyze_rows(
    rows: &[InputRow],
    articles_dir: &Path,
    stop_words: &StopWords,
    lexicon: &SentimentLexicon,
) -> AnalysisOutcome {
    let mut outcome = AnalysisOutcome::default();
    debug!(stop_words = stop_words.len(), "Starting analyze pass");

    for row in rows {
        debug!(url_id = %row.url_id, "Analyzing");

        let text = match store::load_article(articles_dir, &row.url_id).await {
            Ok(text) => text,
            Err(e) => {
                warn!(url_id = %row.url_id, error = %e, "Article file not readable; skipping");
                outcome.missing += 1;
                continue;
            }
        };

        match metrics::compute_metrics(&row.url_id, &text, stop_words, lexicon) {
            Some(record) => {
                debug!(url_id = %row.url_id, word_count = record.word_count, fog_index = record.fog_index, "Scored article");
                outcome.records.push(record);
            }
            None => {
                warn!(url_id = %row.url_id, "No valid words found; skipping calculations");
                outcome.skipped += 1;
            }
        }
    }

    info!(
        analyzed = outcome.records.len(),
        missing = outcome.missing,
        skipped = outcome.skipped,
        "Analyze pass complete"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn row(id: &str) -> InputRow {
        InputRow {
            url_id: id.to_string(),
            url: format!("https://example.com/{id}"),
        }
    }

    #[tokio::test]
    async fn test_analyze_rows_mixed_outcomes() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("A1.txt"), "Hello\n\nWorld test sentence.").unwrap();
        fs::write(dir.path().join("EMPTY.txt"), "The of and.").unwrap();
        let stop: StopWords = ["the", "of", "and"].into_iter().collect();
        let lexicon = SentimentLexicon::default();

        let rows = vec![row("A1"), row("EMPTY"), row("MISSING")];
        let outcome = analyze_rows(&rows, dir.path(), &stop, &lexicon).await;

        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].url_id, "A1");
        assert_eq!(outcome.skipped, 1);
        assert_eq!(outcome.missing, 1);
    }

    #[tokio::test]
    async fn test_analyze_rows_keeps_input_order() {
        let dir = tempfile::tempdir().unwrap();
        for id in ["Z", "A", "M"] {
            fs::write(dir.path().join(format!("{id}.txt")), "Some words here.").unwrap();
        }
        let rows = vec![row("Z"), row("A"), row("M")];
        let outcome =
            analyze_rows(&rows, dir.path(), &StopWords::default(), &SentimentLexicon::default()).await;

        let ids: Vec<&str> = outcome.records.iter().map(|r| r.url_id.as_str()).collect();
        assert_eq!(ids, vec!["Z", "A", "M"]);
    }
}
