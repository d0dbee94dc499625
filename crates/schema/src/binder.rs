//! Binding of a [`SheetSchema`] to one physical worksheet.
//!
//! Layout:
//! - row 0 holds the column display names,
//! - row 1 (the primary data row) holds the format version and the first
//!   value of every field,
//! - rows below hold further elements of list-valued fields, one per row,
//!   in the same column, ending at the first absent or empty cell.
//!
//! Callers run [`BoundSheet::verify`] once and then trust the accessors,
//! which do not re-check the header or version.

use crate::error::ValidationError;
use crate::schema::{ColumnSpec, SheetSchema, ValueKind};
use crate::store::{BookStore, SheetStore};
use chrono::NaiveDateTime;
use spdxsheet_workbook::{CellKind, CellValue, SheetError};

/// Physical row holding the column display names.
pub const HEADER_ROW: usize = 0;
/// Physical row holding the version and first value of each field.
pub const DATA_ROW: usize = 1;

type StoreResult<T> = spdxsheet_workbook::Result<T>;

/// A schema paired with a borrowed, possibly absent, worksheet.
///
/// The worksheet is borrowed mutably for the binder's lifetime, so no other
/// writer can interleave with a multi-row list update.
#[derive(Debug)]
pub struct BoundSheet<'a, S: SheetStore> {
    schema: &'static SheetSchema,
    origin: Option<&'a mut S>,
}

impl<'a, S: SheetStore> BoundSheet<'a, S> {
    /// Wrap a worksheet handle. `None` stands for a sheet that does not exist.
    pub fn new(schema: &'static SheetSchema, origin: Option<&'a mut S>) -> Self {
        debug_assert!(schema.is_consistent(), "inconsistent schema {}", schema.title());
        Self { schema, origin }
    }

    /// Bind the sheet called `name` inside `book`, if any.
    pub fn open<B>(schema: &'static SheetSchema, book: &'a mut B, name: &str) -> Self
    where
        B: BookStore<Sheet = S>,
    {
        Self::new(schema, book.sheet_mut(name))
    }

    #[must_use]
    pub fn schema(&self) -> &'static SheetSchema {
        self.schema
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.origin.is_some()
    }

    /// The underlying worksheet, if it exists
    #[must_use]
    pub fn sheet(&self) -> Option<&S> {
        self.origin.as_deref()
    }

    // ===== Validation =====

    /// Check the sheet against the schema, stopping at the first problem.
    ///
    /// Checks, in order: the sheet exists, every header cell matches its
    /// column name, the version cell holds a supported version, and every
    /// populated record row has its required cells with the right kinds.
    pub fn verify(&self) -> Result<(), ValidationError> {
        let title = self.schema.title();
        let outcome = match self.sheet() {
            None => Err(ValidationError::SheetMissing { title }),
            Some(sheet) => self
                .verify_headers(sheet)
                .and_then(|()| self.verify_version(sheet))
                .and_then(|()| self.verify_rows(sheet)),
        };

        match &outcome {
            Ok(()) => tracing::debug!(sheet = title, "worksheet verified"),
            Err(err) => tracing::warn!(sheet = title, error = %err, "worksheet failed verification"),
        }
        outcome
    }

    /// Diagnostic message for the first problem found, `None` if valid
    #[must_use]
    pub fn verify_message(&self) -> Option<String> {
        self.verify().err().map(|err| err.to_string())
    }

    fn read<'s>(
        &self,
        sheet: &'s S,
        row: usize,
        col: usize,
    ) -> Result<Option<&'s CellValue>, ValidationError> {
        sheet.cell(row, col).map_err(|source| ValidationError::Storage {
            title: self.schema.title(),
            source,
        })
    }

    fn verify_headers(&self, sheet: &S) -> Result<(), ValidationError> {
        for (offset, column) in self.schema.positioned() {
            let matches = matches!(
                self.read(sheet, HEADER_ROW, offset)?,
                Some(CellValue::String(name)) if name == column.name
            );
            if !matches {
                return Err(ValidationError::HeaderMismatch {
                    title: self.schema.title(),
                    column: column.name,
                });
            }
        }
        Ok(())
    }

    fn verify_version(&self, sheet: &S) -> Result<(), ValidationError> {
        let title = self.schema.title();
        let missing = || ValidationError::VersionMissing { title };

        let offset = self
            .schema
            .position(self.schema.version_column())
            .ok_or_else(missing)?;
        let version = match self.read(sheet, DATA_ROW, offset)? {
            Some(cell) if !cell.is_blank() => cell.as_str(),
            _ => return Err(missing()),
        };

        let version = version.trim();
        if version.is_empty() {
            return Err(missing());
        }
        if !self.schema.is_supported(version) {
            return Err(ValidationError::UnsupportedVersion {
                version: version.to_string(),
            });
        }
        Ok(())
    }

    fn verify_rows(&self, sheet: &S) -> Result<(), ValidationError> {
        let Some(presence) = self.schema.position(self.schema.presence_column()) else {
            return Ok(());
        };

        let mut row = DATA_ROW;
        while self
            .read(sheet, row, presence)?
            .is_some_and(|cell| !cell.is_blank())
        {
            self.verify_row(sheet, row)?;
            row += 1;
        }
        tracing::trace!(rows = row - DATA_ROW, "record rows checked");
        Ok(())
    }

    fn verify_row(&self, sheet: &S, row: usize) -> Result<(), ValidationError> {
        let title = self.schema.title();
        for (offset, column) in self.schema.positioned() {
            match self.read(sheet, row, offset)? {
                Some(cell) if !cell.is_blank() => {
                    if column.kind == ValueKind::Date && cell.kind() != CellKind::Numeric {
                        return Err(ValidationError::CellType {
                            title,
                            column: column.name,
                            row: row + 1,
                            expected: column.kind,
                        });
                    }
                }
                _ if column.required => {
                    return Err(ValidationError::MissingRequiredCell {
                        title,
                        column: column.name,
                        row: row + 1,
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }

    // ===== Scalar accessors =====

    fn column(&self, name: &str) -> StoreResult<(usize, &'static ColumnSpec)> {
        self.schema
            .column(name)
            .ok_or_else(|| SheetError::ColumnNotFound {
                name: name.to_string(),
            })
    }

    fn sheet_mut(&mut self) -> StoreResult<&mut S> {
        let title = self.schema.title();
        self.origin
            .as_deref_mut()
            .ok_or_else(|| SheetError::SheetNotFound {
                name: title.to_string(),
            })
    }

    fn data_cell(&self, col: usize) -> StoreResult<Option<&CellValue>> {
        match self.sheet() {
            Some(sheet) => sheet.cell(DATA_ROW, col),
            None => Ok(None),
        }
    }

    fn write_data_cell(
        &mut self,
        column: &ColumnSpec,
        col: usize,
        kind: ValueKind,
        value: CellValue,
    ) -> StoreResult<()> {
        if column.kind != kind {
            return Err(SheetError::CellType {
                row: DATA_ROW,
                col,
                expected: column.kind.cell_kind(),
                found: kind.cell_kind(),
            });
        }
        self.sheet_mut()?.set_cell(DATA_ROW, col, value)
    }

    /// Text of a field on the primary data row, `None` if absent
    pub fn string(&self, column: &str) -> StoreResult<Option<String>> {
        let (col, _) = self.column(column)?;
        Ok(self.data_cell(col)?.map(CellValue::as_str))
    }

    /// Date of a field on the primary data row, `None` if absent or blank.
    ///
    /// Date cells and numeric (serial) cells are accepted; any other kind is
    /// a [`SheetError::CellType`] error.
    pub fn date(&self, column: &str) -> StoreResult<Option<NaiveDateTime>> {
        let (col, _) = self.column(column)?;
        match self.data_cell(col)? {
            None => Ok(None),
            Some(cell) if cell.is_blank() => Ok(None),
            Some(cell) => cell
                .as_datetime()
                .map(Some)
                .ok_or_else(|| SheetError::CellType {
                    row: DATA_ROW,
                    col,
                    expected: CellKind::Numeric,
                    found: cell.kind(),
                }),
        }
    }

    /// Write a string field on the primary data row
    pub fn set_string(&mut self, column: &str, value: &str) -> StoreResult<()> {
        let (col, spec) = self.column(column)?;
        self.write_data_cell(spec, col, ValueKind::String, CellValue::from(value))
    }

    /// Write a date field on the primary data row
    pub fn set_date(&mut self, column: &str, value: NaiveDateTime) -> StoreResult<()> {
        let (col, spec) = self.column(column)?;
        self.write_data_cell(spec, col, ValueKind::Date, CellValue::Date(value))
    }

    // ===== List accessors =====

    /// Values of a list-valued field, read downward from the primary data
    /// row until the first absent or empty cell
    pub fn list(&self, column: &str) -> StoreResult<Vec<String>> {
        let (col, _) = self.column(column)?;
        let Some(sheet) = self.sheet() else {
            return Ok(Vec::new());
        };

        let mut values = Vec::new();
        let mut row = DATA_ROW;
        while let Some(cell) = sheet.cell(row, col)? {
            if cell.is_blank() {
                break;
            }
            values.push(cell.as_str());
            row += 1;
        }
        Ok(values)
    }

    /// Replace a list-valued field.
    ///
    /// The first value (or an empty string for an empty list) goes on the
    /// primary data row and the rest on the rows below. Cells of a previously
    /// longer list are blanked so the stored run ends where `values` ends.
    /// Only this column is touched. An empty element ends the list on read.
    pub fn set_list<T: AsRef<str>>(&mut self, column: &str, values: &[T]) -> StoreResult<()> {
        let (col, spec) = self.column(column)?;
        if spec.kind != ValueKind::String {
            return Err(SheetError::CellType {
                row: DATA_ROW,
                col,
                expected: spec.kind.cell_kind(),
                found: CellKind::String,
            });
        }

        let sheet = self.sheet_mut()?;
        let first = values.first().map_or("", AsRef::as_ref);
        sheet.set_cell(DATA_ROW, col, CellValue::from(first))?;
        for (offset, value) in values.iter().enumerate().skip(1) {
            sheet.set_cell(DATA_ROW + offset, col, CellValue::from(value.as_ref()))?;
        }

        let mut row = DATA_ROW + values.len().max(1);
        while sheet.cell(row, col)?.is_some_and(|cell| !cell.is_blank()) {
            sheet.set_cell(row, col, CellValue::from(""))?;
            row += 1;
        }

        tracing::debug!(
            column,
            values = values.len(),
            cleared = row - (DATA_ROW + values.len().max(1)),
            "list field written"
        );
        Ok(())
    }
}
