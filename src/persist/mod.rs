//! Persistence of scraped artifacts
//!
//! Everything a run writes to disk lives here: the prettified page HTML,
//! one CSV per extracted table, and one file per downloaded document. Each
//! write is independent; a failure is logged and reported in the returned
//! outcome without stopping the writes that follow it.

mod documents;
mod html;
mod tables;

pub use documents::{
    download_document, download_documents, filename_from_url, DownloadOutcome, CHUNK_SIZE,
};
pub use html::{prettify, save_html, HTML_FILE_NAME};
pub use tables::{save_table, save_tables, SaveOutcome};
