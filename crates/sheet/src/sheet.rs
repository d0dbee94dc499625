use crate::cell::CellValue;
use crate::error::{Result, SheetError};
use std::collections::BTreeMap;

/// Maximum number of rows in a worksheet (Excel 2007+ limit).
pub const MAX_ROWS: usize = 1_048_576;
/// Maximum number of columns in a worksheet (Excel 2007+ limit).
pub const MAX_COLS: usize = 16_384;

fn check_bounds(row: usize, col: usize) -> Result<()> {
    if row >= MAX_ROWS || col >= MAX_COLS {
        return Err(SheetError::IndexOutOfBounds {
            row,
            col,
            max_rows: MAX_ROWS,
            max_cols: MAX_COLS,
        });
    }
    Ok(())
}

/// A single sparse row. Columns that were never written are absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: BTreeMap<usize, CellValue>,
}

impl Row {
    /// Create a new empty row
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cell at `col`, if it exists
    #[must_use]
    pub fn cell(&self, col: usize) -> Option<&CellValue> {
        self.cells.get(&col)
    }

    /// Get a mutable cell at `col`, if it exists
    pub fn cell_mut(&mut self, col: usize) -> Option<&mut CellValue> {
        self.cells.get_mut(&col)
    }

    /// Write a value, creating the cell if needed
    pub fn set<T: Into<CellValue>>(&mut self, col: usize, value: T) -> Result<()> {
        check_bounds(0, col)?;
        self.cells.insert(col, value.into());
        Ok(())
    }

    /// Remove the cell at `col`, returning its value
    pub fn remove(&mut self, col: usize) -> Option<CellValue> {
        self.cells.remove(&col)
    }

    /// Number of existing cells
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over existing cells in column order
    pub fn cells(&self) -> impl Iterator<Item = (usize, &CellValue)> {
        self.cells.iter().map(|(col, value)| (*col, value))
    }
}

/// A sheet representing a sparse grid of cells (row-major storage).
///
/// Rows and cells only exist once written, so "absent" and "blank" are
/// distinguishable: [`Sheet::get`] returns `None` for a cell that was never
/// created and `Some(&CellValue::Null)` for a blank one.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    name: String,
    rows: BTreeMap<usize, Row>,
}

impl Sheet {
    /// Create a new empty sheet
    #[must_use]
    pub fn new() -> Self {
        Self::with_name("Sheet1")
    }

    /// Create a new empty sheet with a name
    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Sheet {
            name: name.to_string(),
            rows: BTreeMap::new(),
        }
    }

    /// Create a sheet from a 2D vector of values, one inner vector per row
    #[must_use]
    pub fn from_data<T: Into<CellValue>>(data: Vec<Vec<T>>) -> Self {
        let rows = data
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                let cells = row.into_iter().map(Into::<CellValue>::into).enumerate().collect();
                (index, Row { cells })
            })
            .collect();

        Sheet {
            name: "Sheet1".to_string(),
            rows,
        }
    }

    /// Get the sheet name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Number of rows up to and including the last existing one
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.keys().next_back().map_or(0, |last| last + 1)
    }

    /// Check if the sheet has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    // ===== Row Access =====

    /// Get a row by index (0-based), if it exists
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(&index)
    }

    /// Get a mutable row by index (0-based), if it exists
    pub fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(&index)
    }

    /// Create an empty row at `index`, replacing any existing row
    pub fn create_row(&mut self, index: usize) -> Result<&mut Row> {
        check_bounds(index, 0)?;
        let row = self.rows.entry(index).or_default();
        *row = Row::new();
        Ok(row)
    }

    /// Get the row at `index`, creating it if absent
    pub fn ensure_row(&mut self, index: usize) -> Result<&mut Row> {
        check_bounds(index, 0)?;
        Ok(self.rows.entry(index).or_default())
    }

    /// Remove a row, returning it if it existed
    pub fn remove_row(&mut self, index: usize) -> Option<Row> {
        self.rows.remove(&index)
    }

    /// Iterate over existing rows in order
    pub fn rows(&self) -> impl Iterator<Item = (usize, &Row)> {
        self.rows.iter().map(|(index, row)| (*index, row))
    }

    /// Remove every row
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    // ===== Cell Access =====

    /// Get a cell value by row and column index (0-based).
    ///
    /// Returns `Ok(None)` when the row or cell does not exist and an error
    /// when the coordinate lies outside the worksheet limits.
    pub fn get(&self, row: usize, col: usize) -> Result<Option<&CellValue>> {
        check_bounds(row, col)?;
        Ok(self.rows.get(&row).and_then(|r| r.cell(col)))
    }

    /// Set a cell value by row and column index (0-based), creating the row
    /// and cell on demand
    pub fn set<T: Into<CellValue>>(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        check_bounds(row, col)?;
        self.rows.entry(row).or_default().set(col, value)
    }

    /// Collect the existing cells of a row as a dense vector, filling gaps
    /// with `Null`
    #[must_use]
    pub fn row_values(&self, index: usize) -> Vec<CellValue> {
        let Some(row) = self.rows.get(&index) else {
            return Vec::new();
        };
        let width = row.cells.keys().next_back().map_or(0, |last| last + 1);
        (0..width)
            .map(|col| row.cell(col).cloned().unwrap_or_default())
            .collect()
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new()
    }
}
