//! Storage seam between the schema binder and a concrete workbook.
//!
//! The binder only needs to read a cell, write a cell (creating the row and
//! cell on demand) and replace a sheet inside its workbook. Both traits are
//! implemented for the in-memory [`Sheet`] and [`Book`].

use spdxsheet_workbook::{Book, CellValue, Result, Sheet};

/// Cell-level access to one worksheet.
pub trait SheetStore {
    fn name(&self) -> &str;

    /// `Ok(None)` when the row or the cell does not exist.
    fn cell(&self, row: usize, col: usize) -> Result<Option<&CellValue>>;

    /// Write a value, creating the row and cell when absent.
    fn set_cell(&mut self, row: usize, col: usize, value: CellValue) -> Result<()>;
}

/// Sheet-level access to a workbook.
pub trait BookStore {
    type Sheet: SheetStore;

    fn sheet_mut(&mut self, name: &str) -> Option<&mut Self::Sheet>;

    /// Remove a sheet, returning whether it existed.
    fn remove_sheet(&mut self, name: &str) -> Result<bool>;

    /// Create a new, empty sheet.
    fn create_sheet(&mut self, name: &str) -> Result<&mut Self::Sheet>;
}

impl SheetStore for Sheet {
    fn name(&self) -> &str {
        Sheet::name(self)
    }

    fn cell(&self, row: usize, col: usize) -> Result<Option<&CellValue>> {
        self.get(row, col)
    }

    fn set_cell(&mut self, row: usize, col: usize, value: CellValue) -> Result<()> {
        self.set(row, col, value)
    }
}

impl BookStore for Book {
    type Sheet = Sheet;

    fn sheet_mut(&mut self, name: &str) -> Option<&mut Sheet> {
        Book::sheet_mut(self, name)
    }

    fn remove_sheet(&mut self, name: &str) -> Result<bool> {
        if !self.has_sheet(name) {
            return Ok(false);
        }
        Book::remove_sheet(self, name)?;
        Ok(true)
    }

    fn create_sheet(&mut self, name: &str) -> Result<&mut Sheet> {
        self.add_empty_sheet(name)
    }
}
