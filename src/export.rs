//! CSV export of the extracted result set.

use crate::error::Result;
use crate::record::Transaction;
use std::io::Write;
use std::path::Path;

/// Writes the result set as CSV to an arbitrary writer.
///
/// Column order is fixed by the `Transaction` field order: operation date,
/// category, description, amount, balance. The header row carries the
/// localized column labels from the serde renames.
pub fn write_csv<W: Write>(records: &[Transaction], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the result set as CSV to a file at `path`.
pub fn write_csv_path(records: &[Transaction], path: &Path) -> Result<()> {
    let mut csv_writer = csv::Writer::from_path(path)?;
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}
