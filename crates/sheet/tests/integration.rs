use chrono::NaiveDate;
use spdxsheet_workbook::{
    to_excel_serial, Book, CellKind, CellValue, Sheet, SheetError, XlsxWriteOptions, MAX_COLS,
    MAX_ROWS,
};
use tempfile::tempdir;

// ===== Sheet Creation Tests =====

#[test]
fn test_sheet_from_data() {
    let sheet = Sheet::from_data(vec![vec![1, 2, 3], vec![4, 5, 6]]);

    assert_eq!(sheet.row_count(), 2);
    assert_eq!(sheet.get(0, 0).unwrap(), Some(&CellValue::Int(1)));
    assert_eq!(sheet.get(1, 2).unwrap(), Some(&CellValue::Int(6)));
    assert_eq!(sheet.get(1, 3).unwrap(), None);
}

#[test]
fn test_sheet_from_strings() {
    let sheet = Sheet::from_data(vec![
        vec!["Spreadsheet Version", "SPDXVersion"],
        vec!["0.8", "SPDX-1.0"],
    ]);

    assert_eq!(sheet.row_count(), 2);
    assert_eq!(
        sheet.get(0, 1).unwrap(),
        Some(&CellValue::String("SPDXVersion".to_string()))
    );
}

// ===== Sparse Storage Tests =====

#[test]
fn test_absent_versus_blank() {
    let mut sheet = Sheet::new();
    sheet.set(3, 1, CellValue::Null).unwrap();
    sheet.set(3, 2, "").unwrap();

    assert!(sheet.row(2).is_none());
    assert_eq!(sheet.get(3, 0).unwrap(), None);
    assert!(sheet.get(3, 1).unwrap().unwrap().is_null());
    assert!(sheet.get(3, 2).unwrap().unwrap().is_blank());
    assert_eq!(sheet.row_count(), 4);
}

#[test]
fn test_row_lifecycle() {
    let mut sheet = Sheet::new();

    sheet.ensure_row(5).unwrap().set(0, "kept").unwrap();
    sheet.ensure_row(5).unwrap().set(1, "also kept").unwrap();
    assert_eq!(sheet.row(5).unwrap().len(), 2);

    sheet.create_row(5).unwrap();
    assert!(sheet.row(5).unwrap().is_empty());

    assert!(sheet.remove_row(5).is_some());
    assert!(sheet.remove_row(5).is_none());
    assert!(sheet.is_empty());
}

#[test]
fn test_rows_iterate_in_order() {
    let mut sheet = Sheet::new();
    sheet.set(7, 0, "c").unwrap();
    sheet.set(0, 0, "a").unwrap();
    sheet.set(2, 0, "b").unwrap();

    let indices: Vec<usize> = sheet.rows().map(|(index, _)| index).collect();
    assert_eq!(indices, vec![0, 2, 7]);

    sheet.clear();
    assert_eq!(sheet.row_count(), 0);
}

#[test]
fn test_row_values_fill_gaps() {
    let mut sheet = Sheet::new();
    sheet.set(0, 2, "x").unwrap();

    assert_eq!(
        sheet.row_values(0),
        vec![CellValue::Null, CellValue::Null, CellValue::from("x")]
    );
    assert!(sheet.row_values(1).is_empty());
}

#[test]
fn test_bounds() {
    let mut sheet = Sheet::new();

    assert!(sheet.set(MAX_ROWS - 1, MAX_COLS - 1, 1).is_ok());
    assert!(matches!(
        sheet.set(MAX_ROWS, 0, 1),
        Err(SheetError::IndexOutOfBounds { row, .. }) if row == MAX_ROWS
    ));
    assert!(matches!(
        sheet.get(0, MAX_COLS),
        Err(SheetError::IndexOutOfBounds { col, .. }) if col == MAX_COLS
    ));
    assert!(sheet.ensure_row(MAX_ROWS).is_err());
}

// ===== Cell Value Tests =====

#[test]
fn test_cell_kinds() {
    let when = NaiveDate::from_ymd_opt(2011, 1, 29)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    assert_eq!(CellValue::from("x").kind(), CellKind::String);
    assert_eq!(CellValue::from(3).kind(), CellKind::Numeric);
    assert_eq!(CellValue::from(0.5).kind(), CellKind::Numeric);
    assert_eq!(CellValue::from(when).kind(), CellKind::Numeric);
    assert_eq!(CellValue::from(true).kind(), CellKind::Other);
    assert_eq!(CellValue::Null.kind(), CellKind::Other);
}

// ===== Book Tests =====

#[test]
fn test_book_operations() {
    let mut book = Book::new();

    book.add_sheet("Origins", Sheet::new()).unwrap();
    book.add_sheet("Packages", Sheet::new()).unwrap();

    assert_eq!(book.sheet_count(), 2);
    assert!(book.has_sheet("Origins"));
    assert_eq!(book.sheet_index("Packages"), Some(1));
    assert_eq!(book.get_sheet("Origins").unwrap().name(), "Origins");

    assert!(matches!(
        book.add_sheet("Origins", Sheet::new()),
        Err(SheetError::SheetAlreadyExists { .. })
    ));

    book.remove_sheet("Origins").unwrap();
    assert_eq!(book.sheet_names(), vec!["Packages"]);
    assert!(matches!(
        book.get_sheet("Origins"),
        Err(SheetError::SheetNotFound { .. })
    ));
}

#[test]
fn test_book_add_empty_sheet() {
    let mut book = Book::new();
    book.add_empty_sheet("Origins").unwrap().set(0, 0, "v").unwrap();

    assert_eq!(
        book.sheet("Origins").unwrap().get(0, 0).unwrap(),
        Some(&CellValue::from("v"))
    );
    assert!(book.sheet("Missing").is_none());
}

// ===== XLSX Tests =====

#[test]
fn test_xlsx_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("book.xlsx");
    let when = NaiveDate::from_ymd_opt(2011, 1, 29)
        .unwrap()
        .and_hms_opt(18, 30, 22)
        .unwrap();

    let mut book = Book::new();
    {
        let sheet = book.add_empty_sheet("Origins").unwrap();
        sheet.set(0, 0, "Created").unwrap();
        sheet.set(1, 0, when).unwrap();
        sheet.set(4, 3, 42.5).unwrap();
        sheet.set(2, 1, true).unwrap();
    }
    book.save_as_xlsx(&path).unwrap();

    let loaded = Book::from_xlsx(&path).unwrap();
    let sheet = loaded.get_sheet("Origins").unwrap();

    assert_eq!(sheet.get(0, 0).unwrap(), Some(&CellValue::from("Created")));
    assert_eq!(sheet.get(1, 0).unwrap().unwrap().as_datetime(), Some(when));
    assert_eq!(sheet.get(4, 3).unwrap().unwrap().as_float(), Some(42.5));
    assert_eq!(sheet.get(2, 1).unwrap(), Some(&CellValue::Bool(true)));
    assert_eq!(sheet.get(3, 0).unwrap(), None);
}

#[test]
fn test_xlsx_keeps_leading_empty_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("offset.xlsx");

    let mut book = Book::new();
    book.add_empty_sheet("Offset").unwrap().set(3, 2, "late").unwrap();
    book.save_as_xlsx(&path).unwrap();

    let sheet = Sheet::from_xlsx_sheet(&path, "Offset").unwrap();
    assert_eq!(sheet.get(3, 2).unwrap(), Some(&CellValue::from("late")));
    assert!(sheet.row(0).is_none());
}

#[test]
fn test_xlsx_with_options_and_sheet_names() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("options.xlsx");
    let when = NaiveDate::from_ymd_opt(2020, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    let mut book = Book::new();
    book.add_empty_sheet("Origins").unwrap().set(0, 0, when).unwrap();
    book.add_empty_sheet("Packages").unwrap();
    book.save_as_xlsx_with_options(&path, &XlsxWriteOptions::default().with_date_format("yyyy-mm-dd"))
        .unwrap();

    assert_eq!(
        Book::xlsx_sheet_names(&path).unwrap(),
        vec!["Origins".to_string(), "Packages".to_string()]
    );

    let sheet = Sheet::from_xlsx_sheet(&path, "Origins").unwrap();
    let serial = sheet.get(0, 0).unwrap().unwrap().as_datetime().map(|dt| to_excel_serial(&dt));
    assert_eq!(serial, Some(to_excel_serial(&when)));
}

#[test]
fn test_xlsx_missing_sheet() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.xlsx");

    let mut book = Book::new();
    book.add_empty_sheet("Origins").unwrap();
    book.save_as_xlsx(&path).unwrap();

    assert!(matches!(
        Sheet::from_xlsx_sheet(&path, "Packages"),
        Err(SheetError::SheetNotFound { .. })
    ));
    assert!(matches!(
        Book::from_xlsx(dir.path().join("nope.xlsx")),
        Err(SheetError::Xlsx(_))
    ));
}
