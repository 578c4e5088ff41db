//! HTTP fetcher
//!
//! This module builds the HTTP client and performs the single page fetch
//! that starts a run. One attempt only: a transport failure or a non-success
//! status is a [`FetchError`], which is fatal to the run. The same client
//! (and therefore the same timeout) is reused for document downloads.

use crate::FetchError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds the HTTP client shared by the page fetch and all downloads
///
/// The timeout applies to each request as a whole, covering connection,
/// headers, and body.
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    let user_agent = format!("pagescrape/{}", env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its raw markup
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - Absolute URL of the page to fetch
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(FetchError)` - Transport failure or non-success HTTP status;
///   the caller must abort the run without writing any output
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String, FetchError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    response.text().await.map_err(|source| FetchError::Transport {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(Duration::from_secs(10));
        assert!(client.is_ok());
    }

    // Fetch behavior against live responses is covered by the wiremock
    // integration tests in tests/scrape_tests.rs.
}
