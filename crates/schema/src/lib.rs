//! Schema-bound mapping between SPDX origins metadata and worksheet rows.
//!
//! A [`SheetSchema`] declares the ordered, typed columns of a worksheet and
//! the format versions it accepts. A [`BoundSheet`] pairs a schema with one
//! worksheet: it verifies the header, version and record rows, and offers
//! typed accessors, including list-valued fields that spill one value per
//! row. [`OriginsSheet`] is the typed binding for the SPDX origins sheet.
//!
//! # Examples
//!
//! ```
//! use spdxsheet_schema::{OriginsSheet, DEFAULT_SHEET_NAME};
//! use spdxsheet_workbook::Book;
//! use chrono::NaiveDate;
//!
//! let mut book = Book::new();
//! OriginsSheet::create(&mut book, DEFAULT_SHEET_NAME).unwrap();
//!
//! let mut origins = OriginsSheet::open(&mut book, DEFAULT_SHEET_NAME);
//! origins.set_spdx_version("SPDX-1.0").unwrap();
//! origins.set_created_by(&["Person: Gary O'Neall", "Tool: spdxsheet"]).unwrap();
//! origins
//!     .set_created(NaiveDate::from_ymd_opt(2011, 1, 29).unwrap().and_hms_opt(18, 30, 22).unwrap())
//!     .unwrap();
//!
//! // DataLicense is required
//! let err = origins.verify().unwrap_err();
//! assert_eq!(err.to_string(), "Required cell DataLicense missing for row 2 in SPDX Origins worksheet");
//!
//! origins.set_data_license("PDDL-1.0").unwrap();
//! assert!(origins.verify().is_ok());
//! assert_eq!(origins.created_by().unwrap().len(), 2);
//! ```

mod binder;
mod error;
mod init;
mod origins;
mod schema;
mod store;

pub use binder::{BoundSheet, DATA_ROW, HEADER_ROW};
pub use error::{ErrorCategory, Result, ValidationError};
pub use init::create_sheet;
pub use origins::{
    OriginsRecord, OriginsSheet, AUTHOR_COMMENTS, CREATED, CREATED_BY, CURRENT_VERSION,
    DATA_LICENSE, DEFAULT_SHEET_NAME, ORIGINS_SCHEMA, SPDX_VERSION, SPREADSHEET_VERSION,
};
pub use schema::{ColumnSpec, SheetSchema, ValueKind};
pub use store::{BookStore, SheetStore};
