//! In-memory table of string cells
//!
//! Every cell is already rendered as text: the table is only ever written out
//! as CSV, so there is no need to carry JSON types past flattening.

use crate::domain::{PindicaError, Result};

/// Named columns plus rows of equal width
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates an empty table with the given header
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of `name` in the header
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All values of one column, top to bottom
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    /// Single cell lookup by row number and column name
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|r| r[idx].as_str())
    }

    /// Appends a row; it must have one cell per column
    pub fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(PindicaError::Schema(format!(
                "row has {} cells but the table has {} columns",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Sets `name` to `value` on every row
    ///
    /// An existing column of that name is overwritten in place, otherwise the
    /// column is appended.
    pub fn add_constant_column(&mut self, name: &str, value: &str) {
        match self.column_index(name) {
            Some(idx) => {
                for row in &mut self.rows {
                    row[idx] = value.to_string();
                }
            }
            None => {
                self.columns.push(name.to_string());
                for row in &mut self.rows {
                    row.push(value.to_string());
                }
            }
        }
    }

    /// Removes the named columns
    ///
    /// # Errors
    ///
    /// [`PindicaError::Schema`] if any name is not a column. The table is left
    /// untouched in that case.
    pub fn drop_columns<S: AsRef<str>>(&mut self, names: &[S]) -> Result<()> {
        let missing: Vec<&str> = names
            .iter()
            .map(|n| n.as_ref())
            .filter(|name| self.column_index(name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(PindicaError::Schema(format!(
                "cannot drop missing column(s): {}",
                missing.join(", ")
            )));
        }

        let keep: Vec<bool> = self
            .columns
            .iter()
            .map(|c| !names.iter().any(|n| n.as_ref() == c))
            .collect();

        retain_by_mask(&mut self.columns, &keep);
        for row in &mut self.rows {
            retain_by_mask(row, &keep);
        }
        Ok(())
    }

    /// Renames columns in place, keeping their position
    ///
    /// # Errors
    ///
    /// [`PindicaError::Schema`] if a source column is missing or a target name
    /// is already taken by another column.
    pub fn rename_columns<S: AsRef<str>>(&mut self, renames: &[(S, S)]) -> Result<()> {
        let mut renamed = self.columns.clone();

        for (from, to) in renames {
            let (from, to) = (from.as_ref(), to.as_ref());
            let idx = renamed.iter().position(|c| c == from).ok_or_else(|| {
                PindicaError::Schema(format!("cannot rename missing column '{from}'"))
            })?;
            if from != to && renamed.iter().any(|c| c == to) {
                return Err(PindicaError::Schema(format!(
                    "cannot rename '{from}' to '{to}': column already exists"
                )));
            }
            renamed[idx] = to.to_string();
        }

        self.columns = renamed;
        Ok(())
    }
}

fn retain_by_mask(values: &mut Vec<String>, keep: &[bool]) {
    let mut flags = keep.iter();
    values.retain(|_| flags.next().copied().unwrap_or(true));
}
