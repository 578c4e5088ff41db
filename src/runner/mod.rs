//! One scraping run, start to finish
//!
//! [`run`] executes the four stages in a fixed order: fetch the page, parse
//! it, save the prettified HTML, then extract and persist tables and
//! document links as requested. Only the fetch can fail the run; every
//! later failure is logged, counted in the [`RunReport`], and stepped over.

use crate::config::RunConfig;
use crate::extract::{extract_links, extract_tables};
use crate::{fetcher, persist, Result};
use scraper::Html;
use std::path::PathBuf;

/// What one run produced, including what it skipped
#[derive(Debug, Default)]
pub struct RunReport {
    /// Where the prettified HTML landed, if the write succeeded
    pub html_path: Option<PathBuf>,

    /// CSV files written
    pub tables_written: usize,

    /// Tables excluded during extraction (unparsable or empty)
    pub tables_skipped: usize,

    /// Tables whose CSV write failed
    pub tables_failed: usize,

    /// Document links surviving the extension filter
    pub links_found: usize,

    /// Anchor hrefs that could not be resolved
    pub links_skipped: usize,

    /// Documents written to disk
    pub documents_downloaded: usize,

    /// Document links whose download failed
    pub documents_failed: usize,
}

/// Runs one scrape
///
/// Returns `Err` only when the initial fetch fails (or the HTTP client or
/// output directory cannot be set up); in that case nothing has been
/// written. All later failures are recorded in the report.
pub async fn run(config: &RunConfig) -> Result<RunReport> {
    let client = fetcher::build_http_client(config.timeout)?;
    let markup = fetcher::fetch_page(&client, &config.url).await?;

    std::fs::create_dir_all(&config.output_dir)?;

    let mut report = RunReport::default();

    // The parsed tree is read-only after this point and dropped before any
    // download starts; only owned strings and URLs cross the await below.
    let links = {
        let document = Html::parse_document(&markup);

        match persist::save_html(&document, &config.output_dir) {
            Ok(path) => {
                tracing::info!("Saved HTML content to {}", path.display());
                report.html_path = Some(path);
            }
            Err(e) => tracing::error!("Failed to save HTML content: {}", e),
        }

        if config.download_tables {
            let extraction = extract_tables(&document);
            report.tables_skipped = extraction.skipped.len();
            let outcome = persist::save_tables(&extraction.tables, &config.output_dir);
            report.tables_written = outcome.written.len();
            report.tables_failed = outcome.failed;
        }

        if config.find_download_links || config.download_documents {
            let extraction = extract_links(&document, &config.url, &config.extensions);
            report.links_skipped = extraction.skipped;
            if config.find_download_links {
                tracing::info!("Found download links:");
                for link in &extraction.links {
                    tracing::info!("{}", link);
                }
            }
            extraction.links
        } else {
            Vec::new()
        }
    };

    report.links_found = links.len();

    if config.download_documents && !links.is_empty() {
        let outcome = persist::download_documents(&client, &links, &config.output_dir).await;
        report.documents_downloaded = outcome.downloaded.len();
        report.documents_failed = outcome.failed;
    }

    Ok(report)
}
