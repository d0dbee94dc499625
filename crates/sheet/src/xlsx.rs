use crate::book::Book;
use crate::cell::{to_excel_serial, CellValue};
use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use calamine::{open_workbook, Data, Range, Reader, Xlsx, XlsxError};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Options for writing Excel files
#[derive(Debug, Clone)]
pub struct XlsxWriteOptions {
    /// Number format applied to date cells
    pub date_format: String,
}

impl Default for XlsxWriteOptions {
    fn default() -> Self {
        Self {
            date_format: "yyyy-mm-dd hh:mm:ss".to_string(),
        }
    }
}

impl XlsxWriteOptions {
    /// Set the number format used for date cells
    #[must_use]
    pub fn with_date_format(mut self, format: &str) -> Self {
        self.date_format = format.to_string();
        self
    }
}

fn xlsx_error(e: impl std::fmt::Display) -> SheetError {
    SheetError::Xlsx(e.to_string())
}

/// Convert calamine Data to CellValue. Empty cells have no counterpart.
fn data_to_cell_value(data: &Data) -> Option<CellValue> {
    let value = match data {
        Data::Empty => return None,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::String(s.clone()),
        Data::DateTime(dt) => {
            let serial = dt.as_f64();
            crate::cell::from_excel_serial(serial).map_or(CellValue::Float(serial), CellValue::Date)
        }
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::String(format!("#ERROR: {e:?}")),
    };
    Some(value)
}

/// Build a sheet from a calamine range, keeping absolute cell positions.
fn range_to_sheet(name: &str, range: &Range<Data>) -> Result<Sheet> {
    let mut sheet = Sheet::with_name(name);
    let (first_row, first_col) = range.start().unwrap_or((0, 0));

    for (row, col, data) in range.used_cells() {
        if let Some(value) = data_to_cell_value(data) {
            sheet.set(first_row as usize + row, first_col as usize + col, value)?;
        }
    }

    Ok(sheet)
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &Sheet, date_format: &Format) -> Result<()> {
    for (row_idx, row) in sheet.rows() {
        let row_num = u32::try_from(row_idx).map_err(|_| xlsx_error("Row index overflow"))?;
        for (col_idx, cell) in row.cells() {
            let col_num =
                u16::try_from(col_idx).map_err(|_| xlsx_error("Column index overflow"))?;

            match cell {
                CellValue::Null => {}
                CellValue::Bool(b) => {
                    worksheet
                        .write_boolean(row_num, col_num, *b)
                        .map_err(xlsx_error)?;
                }
                CellValue::Int(i) => {
                    // Note: Excel stores all numbers as f64, so integers > 2^53
                    // may lose precision
                    worksheet
                        .write_number(row_num, col_num, *i as f64)
                        .map_err(xlsx_error)?;
                }
                CellValue::Float(f) => {
                    worksheet
                        .write_number(row_num, col_num, *f)
                        .map_err(xlsx_error)?;
                }
                CellValue::String(s) => {
                    worksheet
                        .write_string(row_num, col_num, s)
                        .map_err(xlsx_error)?;
                }
                CellValue::Date(dt) => {
                    worksheet
                        .write_number_with_format(row_num, col_num, to_excel_serial(dt), date_format)
                        .map_err(xlsx_error)?;
                }
            }
        }
    }

    Ok(())
}

impl Sheet {
    /// Load a specific sheet from an Excel file by name
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be opened, sheet not found, or read fails.
    pub fn from_xlsx_sheet<P: AsRef<Path>>(path: P, sheet_name: &str) -> Result<Self> {
        let mut workbook: Xlsx<BufReader<File>> =
            open_workbook(path.as_ref()).map_err(|e: XlsxError| xlsx_error(e))?;

        if !workbook.sheet_names().iter().any(|name| name == sheet_name) {
            return Err(SheetError::SheetNotFound {
                name: sheet_name.to_string(),
            });
        }

        let range = workbook
            .worksheet_range(sheet_name)
            .map_err(|e: XlsxError| xlsx_error(e))?;

        range_to_sheet(sheet_name, &range)
    }
}

impl Book {
    /// Load a book from an Excel file (all sheets)
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be opened or read.
    pub fn from_xlsx<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut workbook: Xlsx<BufReader<File>> =
            open_workbook(path.as_ref()).map_err(|e: XlsxError| xlsx_error(e))?;

        let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
        let mut book = Book::new();

        for sheet_name in sheet_names {
            let range = workbook
                .worksheet_range(&sheet_name)
                .map_err(|e: XlsxError| xlsx_error(e))?;

            book.add_sheet(&sheet_name, range_to_sheet(&sheet_name, &range)?)?;
        }

        Ok(book)
    }

    /// Save the book to an Excel file
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be created or written.
    pub fn save_as_xlsx<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.save_as_xlsx_with_options(path, &XlsxWriteOptions::default())
    }

    /// Save the book to an Excel file with options
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be created or written.
    pub fn save_as_xlsx_with_options<P: AsRef<Path>>(
        &self,
        path: P,
        options: &XlsxWriteOptions,
    ) -> Result<()> {
        let mut workbook = Workbook::new();
        let date_format = Format::new().set_num_format(&options.date_format);

        for (name, sheet) in self.sheets() {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(name).map_err(xlsx_error)?;
            write_sheet(worksheet, sheet, &date_format)?;
        }

        workbook.save(path.as_ref()).map_err(xlsx_error)?;

        Ok(())
    }

    /// Get sheet names from an Excel file without loading data
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be opened.
    pub fn xlsx_sheet_names<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
        let workbook: Xlsx<BufReader<File>> =
            open_workbook(path.as_ref()).map_err(|e: XlsxError| xlsx_error(e))?;

        Ok(workbook.sheet_names().to_vec())
    }
}
