//! Pagescrape: a single-page table and document scraper
//!
//! This crate fetches one web page, extracts its HTML tables and document
//! links, and persists the prettified HTML, the tables as CSV files, and the
//! linked documents to an output directory. Everything runs once, in order:
//! fetch, parse, extract, persist.

pub mod config;
pub mod extract;
pub mod fetcher;
pub mod logging;
pub mod persist;
pub mod runner;

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for pagescrape operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the initial page fetch. These are fatal to the run: the
/// caller must abort without writing any output.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },
}

/// Errors from writing the HTML file or a CSV table. Recoverable: the
/// caller logs them and keeps going.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors from downloading a single document link. Recoverable: a failed
/// link is logged and the rest of the batch still runs.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("cannot derive a file name from {url}")]
    NoFilename { url: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for pagescrape operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

// Re-export commonly used types
pub use config::RunConfig;
pub use extract::{extract_links, extract_tables, LinkExtraction, TableExtraction, TableRecord};
pub use runner::{run, RunReport};
