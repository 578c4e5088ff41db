//! HTML table extraction
//!
//! Walks every `<table>` element in document order and converts each into a
//! [`TableRecord`]: an optional header row plus zero or more data rows of
//! cell text. Conversion is all-or-nothing per table; a table that cannot be
//! converted, or that converts to no data rows, is skipped without affecting
//! its siblings.

use scraper::{ElementRef, Html, Selector};

/// One table extracted from the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRecord {
    /// Header cells, present when the table's first row is all `<th>`
    pub header: Option<Vec<String>>,

    /// Data rows, in source order
    pub rows: Vec<Vec<String>>,
}

/// Why a table was excluded from the result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The table markup has no rows to convert
    Unparsable,

    /// Conversion succeeded but produced no data rows
    Empty,
}

/// Result of walking all tables on a page
#[derive(Debug, Clone, Default)]
pub struct TableExtraction {
    /// Successfully converted, non-empty tables in document order
    pub tables: Vec<TableRecord>,

    /// 1-based source positions of the tables that were skipped, with why
    pub skipped: Vec<(usize, SkipReason)>,
}

/// Extracts every usable table from the document
///
/// Tables appear in the result in document order. A table with no rows is
/// logged as a warning and skipped; a table that yields no data rows is
/// logged as informational and skipped. Positions in logs and in
/// [`TableExtraction::skipped`] are 1-based, matching the CSV file names
/// written later.
pub fn extract_tables(document: &Html) -> TableExtraction {
    let mut extraction = TableExtraction::default();

    let Ok(table_selector) = Selector::parse("table") else {
        return extraction;
    };

    for (idx, table) in document.select(&table_selector).enumerate() {
        let position = idx + 1;
        match convert_table(table) {
            Ok(record) => extraction.tables.push(record),
            Err(SkipReason::Empty) => {
                tracing::info!("Table {} is empty or could not be parsed.", position);
                extraction.skipped.push((position, SkipReason::Empty));
            }
            Err(SkipReason::Unparsable) => {
                tracing::warn!("Skipping table {}: no rows found", position);
                extraction.skipped.push((position, SkipReason::Unparsable));
            }
        }
    }

    extraction
}

/// Converts one `<table>` element into a record
///
/// The first row counts as the header when every one of its cells is a
/// `<th>`. A table without any `<tr>` is unparsable; a table whose rows all
/// end up outside the data section (e.g. header only) is empty.
fn convert_table(table: ElementRef) -> Result<TableRecord, SkipReason> {
    let row_selector = Selector::parse("tr").map_err(|_| SkipReason::Unparsable)?;
    let cell_selector = Selector::parse("th, td").map_err(|_| SkipReason::Unparsable)?;

    let rows: Vec<ElementRef> = table.select(&row_selector).collect();
    if rows.is_empty() {
        return Err(SkipReason::Unparsable);
    }

    let mut header = None;
    let mut data = Vec::new();

    for (i, row) in rows.iter().enumerate() {
        let cells: Vec<ElementRef> = row.select(&cell_selector).collect();
        if cells.is_empty() {
            continue;
        }

        let texts: Vec<String> = cells.iter().map(|c| cell_text(*c)).collect();

        if i == 0 && cells.iter().all(|c| c.value().name() == "th") {
            header = Some(texts);
        } else {
            data.push(texts);
        }
    }

    if data.is_empty() {
        return Err(SkipReason::Empty);
    }

    Ok(TableRecord { header, rows: data })
}

/// Collects a cell's text content with whitespace collapsed
fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<String>().split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn test_header_and_data_row() {
        let html = "<table><tr><th>Col1</th><th>Col2</th></tr>\
                    <tr><td>A</td><td>1</td></tr></table>";
        let extraction = extract_tables(&parse(html));

        assert_eq!(extraction.tables.len(), 1);
        assert!(extraction.skipped.is_empty());

        let table = &extraction.tables[0];
        assert_eq!(
            table.header,
            Some(vec!["Col1".to_string(), "Col2".to_string()])
        );
        assert_eq!(table.rows, vec![vec!["A".to_string(), "1".to_string()]]);
    }

    #[test]
    fn test_table_without_header() {
        let html = "<table><tr><td>A</td><td>1</td></tr><tr><td>B</td><td>2</td></tr></table>";
        let extraction = extract_tables(&parse(html));

        assert_eq!(extraction.tables.len(), 1);
        let table = &extraction.tables[0];
        assert_eq!(table.header, None);
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn test_rowless_table_is_skipped() {
        let html = "<table></table>";
        let extraction = extract_tables(&parse(html));

        assert!(extraction.tables.is_empty());
        assert_eq!(extraction.skipped, vec![(1, SkipReason::Unparsable)]);
    }

    #[test]
    fn test_header_only_table_is_empty() {
        let html = "<table><tr><th>Col1</th></tr></table>";
        let extraction = extract_tables(&parse(html));

        assert!(extraction.tables.is_empty());
        assert_eq!(extraction.skipped, vec![(1, SkipReason::Empty)]);
    }

    #[test]
    fn test_skip_does_not_abort_siblings() {
        let html = "<table></table>\
                    <table><tr><td>X</td></tr></table>\
                    <table><tr><th>Only</th></tr></table>";
        let extraction = extract_tables(&parse(html));

        assert_eq!(extraction.tables.len(), 1);
        assert_eq!(extraction.tables[0].rows, vec![vec!["X".to_string()]]);
        assert_eq!(
            extraction.skipped,
            vec![(1, SkipReason::Unparsable), (3, SkipReason::Empty)]
        );
    }

    #[test]
    fn test_document_order_preserved() {
        let html = "<table><tr><td>first</td></tr></table>\
                    <p>between</p>\
                    <table><tr><td>second</td></tr></table>";
        let extraction = extract_tables(&parse(html));

        assert_eq!(extraction.tables.len(), 2);
        assert_eq!(extraction.tables[0].rows[0][0], "first");
        assert_eq!(extraction.tables[1].rows[0][0], "second");
    }

    #[test]
    fn test_cell_whitespace_collapsed() {
        let html = "<table><tr><td>  a\n   b  </td></tr></table>";
        let extraction = extract_tables(&parse(html));

        assert_eq!(extraction.tables[0].rows[0][0], "a b");
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let html = "<table><tr><th>H</th></tr><tr><td>v</td></tr></table>\
                    <table><tr><td>w</td></tr></table>";
        let first = extract_tables(&parse(html));
        let second = extract_tables(&parse(html));

        assert_eq!(first.tables, second.tables);
        assert_eq!(first.skipped, second.skipped);
    }
}
