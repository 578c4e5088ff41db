//! Run configuration for pagescrape
//!
//! A [`RunConfig`] is assembled once from the command line at process start
//! and stays immutable for the rest of the run. There is no config file and
//! nothing persists across runs.

use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Default output directory when `--output` is not given
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Timeout shared by the page fetch and every document download
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Extensions a link must end with to count as a document link
pub const DEFAULT_EXTENSIONS: &[&str] = &[".pdf"];

/// Immutable settings for one scraping run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// The page to scrape
    pub url: Url,

    /// Directory receiving every artifact, including the log file
    pub output_dir: PathBuf,

    /// Log each discovered document link at info level
    pub find_download_links: bool,

    /// Extract tables and write them as CSV files
    pub download_tables: bool,

    /// Download each discovered document link
    pub download_documents: bool,

    /// Path suffixes (lowercase, dot included) that mark a document link
    pub extensions: Vec<String>,

    /// Request timeout for the fetch and for each download
    pub timeout: Duration,
}

impl RunConfig {
    /// Creates a config with all optional stages disabled and default
    /// extensions and timeout.
    pub fn new(url: Url, output_dir: PathBuf) -> Self {
        Self {
            url,
            output_dir,
            find_download_links: false,
            download_tables: false,
            download_documents: false,
            extensions: default_extensions(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// The default extension filter as owned strings
pub fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}
