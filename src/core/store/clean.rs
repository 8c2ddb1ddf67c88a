//! Clean CSV store

use super::{ensure_dir, write_atomically};
use crate::core::transform::Table;
use crate::domain::{Result, RunDate};
use std::io::Write;
use std::path::{Path, PathBuf};

/// `data-YYYYMMDD.csv`
pub fn data_file_name(date: RunDate) -> String {
    format!("data-{}.csv", date.stamp())
}

/// Writes the header row and every data row, no index column
pub fn write_table<W: Write>(writer: W, table: &Table, delimiter: u8) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    csv_writer.write_record(table.columns())?;
    for row in table.rows() {
        csv_writer.write_record(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes `table` to `<dir>/data-<date>.csv`, replacing a same-day file
pub fn save(dir: &Path, date: RunDate, table: &Table, delimiter: u8) -> Result<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(data_file_name(date));

    write_atomically(&path, |writer| write_table(writer, table, delimiter))?;

    tracing::info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.columns().len(),
        "Data stored in data folder"
    );
    Ok(path)
}
