use crate::cell::CellKind;
use thiserror::Error;

/// Errors that can occur during sheet operations
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Index out of bounds: row {row}, col {col} (limit is {max_rows} rows, {max_cols} cols)")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        max_rows: usize,
        max_cols: usize,
    },

    #[error("Column not found: {name}")]
    ColumnNotFound { name: String },

    #[error("Sheet not found: {name}")]
    SheetNotFound { name: String },

    #[error("Sheet already exists: {name}")]
    SheetAlreadyExists { name: String },

    #[error("Cell type mismatch at row {row}, col {col}: expected {expected}, found {found}")]
    CellType {
        row: usize,
        col: usize,
        expected: CellKind,
        found: CellKind,
    },

    #[error("Xlsx error: {0}")]
    Xlsx(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SheetError>;
