//! Prettified HTML serialization
//!
//! Serializes the parsed document back to indented, human-readable markup
//! and writes it to a fixed file name in the output directory. The walk
//! covers doctype, elements, text, and comments; scripts and styles keep
//! their text as-is. Attributes are written in sorted order so the output
//! is stable across runs.

use crate::PersistError;
use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::Html;
use std::path::{Path, PathBuf};

/// Fixed name of the saved page inside the output directory
pub const HTML_FILE_NAME: &str = "scraped_content.html";

/// Elements with no closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Writes the prettified document to `scraped_content.html` in `dir`
///
/// Creates `dir` if absent. This runs once per scrape regardless of which
/// optional stages were requested.
pub fn save_html(document: &Html, dir: &Path) -> Result<PathBuf, PersistError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(HTML_FILE_NAME);
    std::fs::write(&path, prettify(document))?;
    Ok(path)
}

/// Renders the document as indented markup, one node per line
pub fn prettify(document: &Html) -> String {
    let mut out = String::new();
    for child in document.tree.root().children() {
        write_node(child, 0, &mut out);
    }
    out
}

fn write_node(node: NodeRef<'_, Node>, depth: usize, out: &mut String) {
    match node.value() {
        Node::Doctype(doctype) => {
            indent(depth, out);
            out.push_str("<!DOCTYPE ");
            out.push_str(doctype.name());
            out.push_str(">\n");
        }
        Node::Comment(comment) => {
            indent(depth, out);
            out.push_str("<!--");
            out.push_str(comment);
            out.push_str("-->\n");
        }
        Node::Text(text) => {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                indent(depth, out);
                if in_raw_text_element(&node) {
                    out.push_str(trimmed);
                } else {
                    out.push_str(&escape_text(trimmed));
                }
                out.push('\n');
            }
        }
        Node::Element(element) => {
            indent(depth, out);
            out.push('<');
            out.push_str(element.name());

            let mut attrs: Vec<(&str, &str)> = element.attrs().collect();
            attrs.sort_by_key(|(name, _)| *name);
            for (name, value) in attrs {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&escape_attr(value));
                out.push('"');
            }
            out.push_str(">\n");

            if VOID_ELEMENTS.contains(&element.name()) {
                return;
            }

            for child in node.children() {
                write_node(child, depth + 1, out);
            }

            indent(depth, out);
            out.push_str("</");
            out.push_str(element.name());
            out.push_str(">\n");
        }
        _ => {}
    }
}

/// True when the node's parent is a raw-text element, whose content has no
/// markup to escape
fn in_raw_text_element(node: &NodeRef<'_, Node>) -> bool {
    node.parent()
        .and_then(|parent| parent.value().as_element())
        .map(|element| matches!(element.name(), "script" | "style"))
        .unwrap_or(false)
}

fn indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push(' ');
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_body_text_preserved() {
        let html = "<html><head><title>Report Index</title></head>\
                    <body><p>Quarterly figures</p></body></html>";
        let pretty = prettify(&Html::parse_document(html));

        assert!(pretty.contains("Report Index"));
        assert!(pretty.contains("Quarterly figures"));
    }

    #[test]
    fn test_output_is_indented() {
        let html = "<html><body><p>text</p></body></html>";
        let pretty = prettify(&Html::parse_document(html));

        assert!(pretty.contains("\n <body>"));
        assert!(pretty.contains("\n  <p>"));
        assert!(pretty.contains("\n   text"));
    }

    #[test]
    fn test_void_element_has_no_closing_tag() {
        let html = "<html><body><br></body></html>";
        let pretty = prettify(&Html::parse_document(html));

        assert!(pretty.contains("<br>"));
        assert!(!pretty.contains("</br>"));
    }

    #[test]
    fn test_doctype_rendered() {
        let html = "<!DOCTYPE html><html><body></body></html>";
        let pretty = prettify(&Html::parse_document(html));

        assert!(pretty.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let html = "<html><body><p>a &amp; b</p></body></html>";
        let pretty = prettify(&Html::parse_document(html));

        assert!(pretty.contains("a &amp; b"));
    }

    #[test]
    fn test_script_text_is_not_escaped() {
        let html = "<html><head><script>if (a < b && c > 0) { run(); }</script></head>\
                    <body></body></html>";
        let pretty = prettify(&Html::parse_document(html));

        assert!(pretty.contains("if (a < b && c > 0) { run(); }"));
        assert!(!pretty.contains("&lt;"));
    }

    #[test]
    fn test_style_text_is_not_escaped() {
        let html = "<html><head><style>a > b { color: red; }</style></head>\
                    <body></body></html>";
        let pretty = prettify(&Html::parse_document(html));

        assert!(pretty.contains("a > b { color: red; }"));
        assert!(!pretty.contains("&gt;"));
    }

    #[test]
    fn test_save_html_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out");
        let document = Html::parse_document("<html><body>hi</body></html>");

        let path = save_html(&document, &nested).unwrap();

        assert_eq!(path.file_name().unwrap(), HTML_FILE_NAME);
        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.contains("hi"));
    }
}
