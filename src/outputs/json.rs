//! JSON report of an analyze pass.
//!
//! ```text
//! {
//!   "generated_at": "2025-05-06T20:30:00+02:00",
//!   "analyzed": 98,
//!   "missing": 1,
//!   "skipped": 1,
//!   "records": [ { "url_id": "...", "positive_score": 3, ... } ]
//! }
//! ```

use crate::models::MetricsRecord;
use chrono::Local;
use serde::Serialize;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

#[derive(Debug, Serialize)]
pub struct MetricsReport<'a> {
    /// RFC 3339, local time.
    pub generated_at: String,
    pub analyzed: usize,
    pub missing: usize,
    pub skipped: usize,
    pub records: &'a [MetricsRecord],
}

impl<'a> MetricsReport<'a> {
    pub fn new(records: &'a [MetricsRecord], missing: usize, skipped: usize) -> Self {
        MetricsReport {
            generated_at: Local::now().to_rfc3339(),
            analyzed: records.len(),
            missing,
            skipped,
            records,
        }
    }
}

/// Serialize `report` to `path`, creating parent directories as needed.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_report(report: &MetricsReport<'_>, path: &Path) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(report)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent).await {
            error!(dir = %parent.display(), error = %e, "Failed to create report dir");
            return Err(e.into());
        }
    }

    fs::write(path, json).await?;
    info!(records = report.analyzed, "Wrote JSON report");
    Ok(())
}
