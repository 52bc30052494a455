//! Results table: input rows left-joined with their metrics.

use crate::models::{InputRow, MetricsRecord, OutputRow};
use std::collections::HashMap;
use std::error::Error;
use std::path::Path;
use tracing::{info, instrument};

/// Left-join `rows` with `records` on `URL_ID`, keeping input order.
pub fn merge_results(rows: &[InputRow], records: &[MetricsRecord]) -> Vec<OutputRow> {
    let by_id: HashMap<&str, &MetricsRecord> =
        records.iter().map(|r| (r.url_id.as_str(), r)).collect();

    rows.iter()
        .map(|row| OutputRow::join(row, by_id.get(row.url_id.as_str()).copied()))
        .collect()
}

/// Write the output table as CSV with a header row.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn write_results(path: &Path, rows: &[OutputRow]) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!(rows = rows.len(), "Wrote results table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(id: &str) -> InputRow {
        InputRow {
            url_id: id.to_string(),
            url: format!("https://example.com/{id}"),
        }
    }

    fn record(id: &str) -> MetricsRecord {
        MetricsRecord {
            url_id: id.to_string(),
            positive_score: 2,
            negative_score: 1,
            polarity_score: 0.3333,
            subjectivity_score: 0.25,
            avg_sentence_length: 10.5,
            percentage_complex_words: 0.5,
            fog_index: 4.4,
            avg_number_of_words_per_sentence: 10.5,
            complex_word_count: 6,
            word_count: 12,
            syllable_per_word: 2.25,
            personal_pronouns: 1,
            avg_word_length: 6.0,
        }
    }

    #[test]
    fn test_merge_is_left_join_in_input_order() {
        let rows = vec![input("B"), input("A"), input("C")];
        let records = vec![record("A"), record("B")];

        let merged = merge_results(&rows, &records);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].url_id, "B");
        assert_eq!(merged[0].word_count, Some(12));
        assert_eq!(merged[1].url_id, "A");
        assert_eq!(merged[2].url_id, "C");
        assert_eq!(merged[2].positive_score, None);
    }

    #[test]
    fn test_write_results_header_and_empty_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("Output.csv");
        let merged = merge_results(&[input("A"), input("E")], &[record("A")]);

        write_results(&path, &merged).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(
            lines[0],
            "URL_ID,URL,POSITIVE SCORE,NEGATIVE SCORE,POLARITY SCORE,SUBJECTIVITY SCORE,\
             AVG SENTENCE LENGTH,PERCENTAGE OF COMPLEX WORDS,FOG INDEX,\
             AVG NUMBER OF WORDS PER SENTENCE,COMPLEX WORD COUNT,WORD COUNT,\
             SYLLABLE PER WORD,PERSONAL PRONOUNS,AVG WORD LENGTH"
        );
        assert_eq!(
            lines[1],
            "A,https://example.com/A,2,1,0.3333,0.25,10.5,0.5,4.4,10.5,6,12,2.25,1,6.0"
        );
        assert_eq!(lines[2], "E,https://example.com/E,,,,,,,,,,,,,");
    }
}
