use crate::schema::ValueKind;
use spdxsheet_workbook::SheetError;
use thiserror::Error;

/// Broad class of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Sheet absent or header row does not match the schema.
    Structural,
    /// Version cell missing or not a supported version.
    Version,
    /// A specific row and column holds a missing or mistyped value.
    Row,
    /// The storage layer failed while the sheet was being read.
    Unexpected,
}

/// First problem found while verifying a sheet against its schema.
///
/// Row numbers are 1-based, as a spreadsheet user sees them.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Worksheet for {title} does not exist")]
    SheetMissing { title: &'static str },

    #[error("Column {column} missing for {title} worksheet")]
    HeaderMismatch {
        title: &'static str,
        column: &'static str,
    },

    #[error("Invalid {title} worksheet - no spreadsheet version found")]
    VersionMissing { title: &'static str },

    #[error("Spreadsheet version {version} not supported")]
    UnsupportedVersion { version: String },

    #[error("Required cell {column} missing for row {row} in {title} worksheet")]
    MissingRequiredCell {
        title: &'static str,
        column: &'static str,
        row: usize,
    },

    #[error("{column} column in row {row} of {title} worksheet is not of type {expected}")]
    CellType {
        title: &'static str,
        column: &'static str,
        row: usize,
        expected: ValueKind,
    },

    #[error("Error in verifying {title} worksheet: {source}")]
    Storage {
        title: &'static str,
        #[source]
        source: SheetError,
    },
}

impl ValidationError {
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            ValidationError::SheetMissing { .. } | ValidationError::HeaderMismatch { .. } => {
                ErrorCategory::Structural
            }
            ValidationError::VersionMissing { .. } | ValidationError::UnsupportedVersion { .. } => {
                ErrorCategory::Version
            }
            ValidationError::MissingRequiredCell { .. } | ValidationError::CellType { .. } => {
                ErrorCategory::Row
            }
            ValidationError::Storage { .. } => ErrorCategory::Unexpected,
        }
    }

    /// 1-based row number for row-level errors
    #[must_use]
    pub fn row(&self) -> Option<usize> {
        match self {
            ValidationError::MissingRequiredCell { row, .. }
            | ValidationError::CellType { row, .. } => Some(*row),
            _ => None,
        }
    }

    /// Column display name for header and row-level errors
    #[must_use]
    pub fn column(&self) -> Option<&'static str> {
        match self {
            ValidationError::HeaderMismatch { column, .. }
            | ValidationError::MissingRequiredCell { column, .. }
            | ValidationError::CellType { column, .. } => Some(*column),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
