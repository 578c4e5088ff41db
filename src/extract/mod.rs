//! Extraction of tables and document links from a parsed page
//!
//! Both extractors walk the document tree in document order and never touch
//! the network. Items that fail to convert are skipped and logged, and the
//! skips are also reported back to the caller so a run can account for them
//! without grepping the log.

mod links;
mod tables;

pub use links::{extract_links, LinkExtraction};
pub use tables::{extract_tables, SkipReason, TableExtraction, TableRecord};
