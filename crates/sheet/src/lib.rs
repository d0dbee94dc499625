//! Sparse in-memory workbook for spdxsheet
//!
//! Provides the row/cell primitives the origins schema binds to: a [`Book`]
//! of named [`Sheet`]s whose rows and cells only exist once written, typed
//! [`CellValue`]s (including dates), and `.xlsx` load/save.
//!
//! # Examples
//!
//! ## Absent and blank cells
//!
//! ```
//! use spdxsheet_workbook::{CellValue, Sheet};
//!
//! let mut sheet = Sheet::with_name("Origins");
//! sheet.set(0, 0, "Spreadsheet Version").unwrap();
//! sheet.set(1, 2, CellValue::Null).unwrap();
//!
//! assert_eq!(sheet.get(0, 0).unwrap().map(CellValue::as_str), Some("Spreadsheet Version".to_string()));
//! assert_eq!(sheet.get(1, 0).unwrap(), None);
//! assert!(sheet.get(1, 2).unwrap().unwrap().is_blank());
//! ```
//!
//! ## Working with books
//!
//! ```
//! use spdxsheet_workbook::{Book, Sheet};
//!
//! let mut book = Book::new();
//! book.add_sheet("Origins", Sheet::new()).unwrap();
//! book.add_sheet("Packages", Sheet::new()).unwrap();
//!
//! assert_eq!(book.sheet_count(), 2);
//! book.remove_sheet("Packages").unwrap();
//! assert_eq!(book.sheet_names(), vec!["Origins"]);
//! ```

mod book;
mod cell;
mod error;
mod sheet;
#[cfg(not(target_arch = "wasm32"))]
mod xlsx;

/// Re-export book type.
pub use book::Book;
/// Re-export cell value types and serial date helpers.
pub use cell::{from_excel_serial, to_excel_serial, CellKind, CellValue};
/// Re-export sheet error types.
pub use error::{Result, SheetError};
/// Re-export sheet types and worksheet limits.
pub use sheet::{Row, Sheet, MAX_COLS, MAX_ROWS};
#[cfg(not(target_arch = "wasm32"))]
/// Re-export XLSX write options (non-WASM only).
pub use xlsx::XlsxWriteOptions;
