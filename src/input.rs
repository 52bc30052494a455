//! Row source: reads `(URL_ID, URL)` pairs from the input table.

use crate::error::SetupError;
use crate::models::InputRow;
use csv::ReaderBuilder;
use itertools::Itertools;
use std::path::Path;
use tracing::{info, instrument, warn};

/// Load every row of the input table, in file order.
///
/// The table needs a header row with `URL_ID` and `URL`; other columns are
/// ignored. Duplicate identifiers are reported but kept.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn load_input_rows(path: &Path) -> Result<Vec<InputRow>, SetupError> {
    if !path.is_file() {
        return Err(SetupError::MissingInput(path.to_path_buf()));
    }

    let table_err = |source| SetupError::Table {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(table_err)?;

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: InputRow = result.map_err(table_err)?;
        rows.push(row);
    }

    for dup in rows.iter().map(|r| r.url_id.as_str()).duplicates() {
        warn!(url_id = %dup, "Duplicate URL_ID in input table");
    }

    info!(count = rows.len(), "Loaded input rows");
    Ok(rows)
}

/// Keep only the rows whose identifier is listed, preserving table order.
pub fn select_rows(rows: &[InputRow], ids: &[String]) -> Vec<InputRow> {
    rows.iter()
        .filter(|r| ids.iter().any(|id| *id == r.url_id))
        .cloned()
        .collect()
}
