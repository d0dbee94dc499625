use crate::binder::{DATA_ROW, HEADER_ROW};
use crate::schema::SheetSchema;
use crate::store::{BookStore, SheetStore};
use spdxsheet_workbook::{CellValue, Result};

/// Create a fresh sheet laid out for `schema`, replacing any sheet with the
/// same name.
///
/// Writes every column name into the header row and the schema's current
/// version into the version cell of the primary data row. Storage failures
/// are returned unchanged.
pub fn create_sheet<B: BookStore>(
    book: &mut B,
    name: &str,
    schema: &'static SheetSchema,
) -> Result<()> {
    if book.remove_sheet(name)? {
        tracing::warn!(sheet = name, "replacing existing worksheet");
    }

    let sheet = book.create_sheet(name)?;
    for (offset, column) in schema.positioned() {
        sheet.set_cell(HEADER_ROW, offset, CellValue::from(column.name))?;
    }

    if let Some(offset) = schema.position(schema.version_column()) {
        sheet.set_cell(DATA_ROW, offset, CellValue::from(schema.current_version()))?;
    }

    tracing::debug!(
        sheet = name,
        schema = schema.title(),
        version = schema.current_version(),
        "worksheet created"
    );
    Ok(())
}
