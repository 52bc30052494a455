//! Fetch stage: download each listed page, extract its article, store it.
//!
//! Rows are processed strictly one at a time:
//!
//! 1. **Fetch** ([`fetch`]): one GET with timeout and user agent
//! 2. **Extract** ([`extract`]): title and body from the HTML, pure
//! 3. **Store** ([`store`]): `<articles_dir>/<URL_ID>.txt`
//!
//! A failed fetch or write is logged with the row's identifier and the row is
//! skipped; no file is written for it.

pub mod extract;
pub mod fetch;
pub mod store;

use crate::models::InputRow;
use crate::utils::truncate_for_log;
use fetch::Fetcher;
use std::path::Path;
use tracing::{debug, error, info, instrument, warn};

/// Outcome counts of one scrape pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeSummary {
    pub total: usize,
    pub saved: usize,
    pub failed: usize,
}

/// Fetch, extract and store every row in order.
#[instrument(level = "info", skip_all, fields(rows = rows.len(), articles_dir = %articles_dir.display()))]
pub async fn scrape_rows(rows: &[InputRow], fetcher: &Fetcher, articles_dir: &Path) -> ScrapeSummary {
    let mut summary = ScrapeSummary {
        total: rows.len(),
        ..Default::default()
    };
    info!(timeout_secs = fetcher.timeout().as_secs(), "Starting scrape pass");

    for row in rows {
        info!(url_id = %row.url_id, url = %row.url, "Scraping");

        let html = match fetcher.fetch_html(&row.url).await {
            Ok(html) => html,
            Err(e) => {
                warn!(url_id = %row.url_id, url = %row.url, error = %e, "Failed to fetch URL; skipping row");
                summary.failed += 1;
                continue;
            }
        };

        let article = extract::extract_article(&row.url_id, &html);
        debug!(
            url_id = %row.url_id,
            title = %truncate_for_log(&article.title, 80),
            body_bytes = article.body.len(),
            "Extracted article"
        );

        match store::save_article(articles_dir, &article).await {
            Ok(path) => {
                info!(url_id = %row.url_id, path = %path.display(), "Saved article");
                summary.saved += 1;
            }
            Err(e) => {
                error!(url_id = %row.url_id, error = %e, "Failed to write article; skipping row");
                summary.failed += 1;
            }
        }
    }

    info!(
        total = summary.total,
        saved = summary.saved,
        failed = summary.failed,
        "Scrape pass complete"
    );
    summary
}
