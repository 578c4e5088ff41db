//! Pagescrape main entry point
//!
//! Command-line interface for the single-page scraper: one URL in, a
//! handful of files out under the output directory.

use clap::Parser;
use pagescrape::config::{self, RunConfig};
use pagescrape::{logging, runner};
use std::path::PathBuf;
use url::Url;

/// Scrape tables and documents from a website
#[derive(Parser, Debug)]
#[command(name = "pagescrape")]
#[command(version)]
#[command(about = "Scrape tables and documents from a website.", long_about = None)]
struct Cli {
    /// The URL of the website to scrape
    #[arg(value_name = "URL")]
    url: String,

    /// Directory to save scraped data
    #[arg(long, value_name = "DIR", default_value = config::DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Find and log download links for documents
    #[arg(long)]
    find_download_links: bool,

    /// Extract and save tables as CSV files
    #[arg(long)]
    download_tables: bool,

    /// Download the found document links to the output directory
    #[arg(long)]
    download_documents: bool,

    /// Also log to the console in addition to the log file
    #[arg(long)]
    log_to_console: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // A malformed URL is a setup failure and crashes before any work starts.
    let url = Url::parse(&cli.url)?;

    let _guard = logging::init(&cli.output, cli.log_to_console)?;

    let mut config = RunConfig::new(url, cli.output);
    config.find_download_links = cli.find_download_links;
    config.download_tables = cli.download_tables;
    config.download_documents = cli.download_documents;

    tracing::info!("Webscraping utility is running.");
    tracing::info!("URL to scrape: {}", config.url);
    tracing::info!("Output directory: {}", config.output_dir.display());

    // A fetch failure aborts the run but the process still exits zero;
    // everything after the fetch is skip-and-log.
    match runner::run(&config).await {
        Ok(report) => {
            tracing::info!(
                "Run finished: {} tables written, {} links found, {} documents downloaded",
                report.tables_written,
                report.links_found,
                report.documents_downloaded,
            );
        }
        Err(e) => tracing::error!("Aborting: {}", e),
    }

    Ok(())
}
