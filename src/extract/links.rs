//! Document link extraction
//!
//! Walks every anchor with an `href`, resolves it against the page URL, and
//! keeps the ones whose path ends with a configured extension. Matching is
//! case-insensitive on the resolved URL's path. Nothing is deduplicated and
//! nothing is fetched here; reachability is the downloader's problem.

use scraper::{Html, Selector};
use url::Url;

/// Result of walking all anchors on a page
#[derive(Debug, Clone, Default)]
pub struct LinkExtraction {
    /// Absolute document URLs, in document order, duplicates included
    pub links: Vec<Url>,

    /// Count of hrefs that could not be resolved against the base URL
    pub skipped: usize,
}

/// Extracts document links from the page
///
/// Each `href` is resolved against `base_url` with standard relative-URL
/// resolution; the link is retained iff the resolved URL's path, lowercased,
/// ends with one of `extensions` (e.g. `[".pdf"]`). Hrefs that fail to
/// resolve are counted in [`LinkExtraction::skipped`].
pub fn extract_links(document: &Html, base_url: &Url, extensions: &[String]) -> LinkExtraction {
    let mut extraction = LinkExtraction::default();

    let Ok(anchor_selector) = Selector::parse("a[href]") else {
        return extraction;
    };

    for anchor in document.select(&anchor_selector) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };

        match base_url.join(href) {
            Ok(resolved) => {
                if matches_extension(&resolved, extensions) {
                    extraction.links.push(resolved);
                }
            }
            Err(e) => {
                tracing::debug!("Could not resolve href {:?}: {}", href, e);
                extraction.skipped += 1;
            }
        }
    }

    extraction
}

fn matches_extension(url: &Url, extensions: &[String]) -> bool {
    let path = url.path().to_lowercase();
    extensions.iter().any(|ext| path.ends_with(&ext.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_extensions;

    fn base_url() -> Url {
        Url::parse("http://example.com").unwrap()
    }

    fn extract(html: &str, extensions: &[String]) -> Vec<String> {
        let document = Html::parse_document(html);
        extract_links(&document, &base_url(), extensions)
            .links
            .iter()
            .map(Url::to_string)
            .collect()
    }

    #[test]
    fn test_relative_and_absolute_resolution() {
        let html = r#"<a href="doc1.pdf">a</a>
                      <a href="/files/doc2.pdf">b</a>
                      <a href="not_a_doc.txt">c</a>"#;
        let links = extract(html, &default_extensions());

        assert_eq!(
            links,
            vec![
                "http://example.com/doc1.pdf".to_string(),
                "http://example.com/files/doc2.pdf".to_string(),
            ]
        );
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let html = r#"<a href="REPORT.PDF">r</a>"#;
        let links = extract(html, &default_extensions());

        assert_eq!(links, vec!["http://example.com/REPORT.PDF".to_string()]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let html = r#"<a href="doc.pdf">one</a><a href="doc.pdf">two</a>"#;
        let links = extract(html, &default_extensions());

        assert_eq!(links.len(), 2);
        assert_eq!(links[0], links[1]);
    }

    #[test]
    fn test_custom_extensions() {
        let html = r#"<a href="sheet.xlsx">x</a><a href="doc.pdf">p</a>"#;
        let links = extract(html, &[".xlsx".to_string()]);

        assert_eq!(links, vec!["http://example.com/sheet.xlsx".to_string()]);
    }

    #[test]
    fn test_query_string_does_not_break_match() {
        let html = r#"<a href="/dl/file.pdf?version=2">q</a>"#;
        let links = extract(html, &default_extensions());

        assert_eq!(
            links,
            vec!["http://example.com/dl/file.pdf?version=2".to_string()]
        );
    }

    #[test]
    fn test_anchor_without_href_ignored() {
        let html = r#"<a name="top">anchor</a><a href="doc.pdf">p</a>"#;
        let links = extract(html, &default_extensions());

        assert_eq!(links.len(), 1);
    }

    #[test]
    fn test_cross_host_link_kept() {
        let html = r#"<a href="https://cdn.example.org/big.pdf">c</a>"#;
        let links = extract(html, &default_extensions());

        assert_eq!(links, vec!["https://cdn.example.org/big.pdf".to_string()]);
    }

    #[test]
    fn test_document_order() {
        let html = r#"<a href="z.pdf">z</a><a href="a.pdf">a</a>"#;
        let links = extract(html, &default_extensions());

        assert_eq!(
            links,
            vec![
                "http://example.com/z.pdf".to_string(),
                "http://example.com/a.pdf".to_string(),
            ]
        );
    }
}
