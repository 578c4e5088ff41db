//! CSV export of extracted tables
//!
//! Each table becomes `table_{i}.csv` (1-based, matching its position in
//! the extraction result), header row first when present, no index column.
//! Rows may be ragged; the writer is flexible on record length.

use crate::extract::TableRecord;
use crate::PersistError;
use std::path::{Path, PathBuf};

/// What happened while writing a batch of tables
#[derive(Debug, Default)]
pub struct SaveOutcome {
    /// Paths of the CSV files that were written
    pub written: Vec<PathBuf>,

    /// Number of tables whose write failed
    pub failed: usize,
}

/// Writes one table to `path` as CSV
pub fn save_table(table: &TableRecord, path: &Path) -> Result<(), PersistError> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_path(path)?;

    if let Some(header) = &table.header {
        writer.write_record(header)?;
    }
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes every table to `dir`, one CSV per table
///
/// A failing table is logged and counted in the outcome; the remaining
/// tables are still written.
pub fn save_tables(tables: &[TableRecord], dir: &Path) -> SaveOutcome {
    let mut outcome = SaveOutcome::default();

    for (idx, table) in tables.iter().enumerate() {
        let position = idx + 1;
        let path = dir.join(format!("table_{}.csv", position));
        match save_table(table, &path) {
            Ok(()) => {
                tracing::info!("Saved table {} to {}", position, path.display());
                outcome.written.push(path);
            }
            Err(e) => {
                tracing::error!("Failed to save table {} to {}: {}", position, path.display(), e);
                outcome.failed += 1;
            }
        }
    }

    outcome
}
