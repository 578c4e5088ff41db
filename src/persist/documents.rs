//! Sequential document downloads
//!
//! Downloads each extracted link in order, streaming the body to disk
//! through a fixed-size buffer. The destination file name is the URL's
//! final path segment, taken as-is: no sanitization and no collision
//! handling, so two links sharing a final segment overwrite each other.
//! A failed link is logged and counted; the batch always runs to the end.

use crate::DownloadError;
use reqwest::Client;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use url::Url;

/// Buffer size for streaming a response body to disk
pub const CHUNK_SIZE: usize = 8192;

/// What happened while downloading a batch of links
#[derive(Debug, Default)]
pub struct DownloadOutcome {
    /// Paths of the files that were written
    pub downloaded: Vec<PathBuf>,

    /// Number of links that failed
    pub failed: usize,
}

/// Derives the destination file name from a URL's final path segment
///
/// Returns `None` when the path ends with `/` or has no segments, since
/// there is nothing to name the file after.
pub fn filename_from_url(url: &Url) -> Option<&str> {
    url.path_segments()
        .and_then(|segments| segments.last())
        .filter(|segment| !segment.is_empty())
}

/// Downloads one document into `dir`, streaming the body to disk
///
/// The file handle is scoped to this function and closed on every exit
/// path, including errors mid-stream.
pub async fn download_document(
    client: &Client,
    url: &Url,
    dir: &Path,
) -> Result<PathBuf, DownloadError> {
    let filename = filename_from_url(url).ok_or_else(|| DownloadError::NoFilename {
        url: url.to_string(),
    })?;
    let path = dir.join(filename);

    let mut response =
        client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| DownloadError::Transport {
                url: url.to_string(),
                source,
            })?;

    let status = response.status();
    if !status.is_success() {
        return Err(DownloadError::Status {
            url: url.to_string(),
            status,
        });
    }

    let file = File::create(&path).await?;
    let mut writer = BufWriter::with_capacity(CHUNK_SIZE, file);

    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|source| DownloadError::Transport {
            url: url.to_string(),
            source,
        })?
    {
        writer.write_all(&chunk).await?;
    }
    writer.flush().await?;

    Ok(path)
}

/// Downloads every link into `dir`, one at a time, in order
///
/// At-most-once per link: no retry, no resumption, no integrity check.
pub async fn download_documents(client: &Client, links: &[Url], dir: &Path) -> DownloadOutcome {
    let mut outcome = DownloadOutcome::default();

    if let Err(e) = std::fs::create_dir_all(dir) {
        tracing::error!("Cannot create download directory {}: {}", dir.display(), e);
        outcome.failed = links.len();
        return outcome;
    }

    for url in links {
        match download_document(client, url, dir).await {
            Ok(path) => {
                tracing::info!(
                    "Downloaded: {}",
                    path.file_name().unwrap_or_default().to_string_lossy()
                );
                outcome.downloaded.push(path);
            }
            Err(e) => {
                tracing::error!("Failed to download {}: {}", url, e);
                outcome.failed += 1;
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_is_final_segment() {
        let url = Url::parse("http://example.com/files/report.pdf").unwrap();
        assert_eq!(filename_from_url(&url), Some("report.pdf"));
    }

    #[test]
    fn test_filename_ignores_query() {
        let url = Url::parse("http://example.com/report.pdf?v=2").unwrap();
        assert_eq!(filename_from_url(&url), Some("report.pdf"));
    }

    #[test]
    fn test_trailing_slash_has_no_filename() {
        let url = Url::parse("http://example.com/files/").unwrap();
        assert_eq!(filename_from_url(&url), None);
    }

    #[test]
    fn test_root_url_has_no_filename() {
        let url = Url::parse("http://example.com/").unwrap();
        assert_eq!(filename_from_url(&url), None);
    }

    // Streaming behavior and the skip-and-continue policy are covered by
    // the wiremock integration tests in tests/scrape_tests.rs.
}
