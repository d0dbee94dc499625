//! Static declaration of a worksheet layout.
//!
//! A [`SheetSchema`] is pure data: the ordered column list is the single
//! source of truth for physical column offsets, so a column's position is
//! its index in [`SheetSchema::columns`] and is never computed elsewhere.

use spdxsheet_workbook::CellKind;
use std::fmt;

/// Expected value kind of a schema column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Date,
}

impl ValueKind {
    /// Cell kind the storage layer reports for a value of this kind.
    #[must_use]
    pub fn cell_kind(self) -> CellKind {
        match self {
            ValueKind::String => CellKind::String,
            ValueKind::Date => CellKind::Numeric,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::String => write!(f, "String"),
            ValueKind::Date => write!(f, "Date"),
        }
    }
}

/// One column of a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Display name written to the header row.
    pub name: &'static str,
    pub required: bool,
    pub kind: ValueKind,
}

impl ColumnSpec {
    #[must_use]
    pub const fn required(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            required: true,
            kind,
        }
    }

    #[must_use]
    pub const fn optional(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            required: false,
            kind,
        }
    }
}

/// Versioned declaration of a worksheet's columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetSchema {
    title: &'static str,
    columns: &'static [ColumnSpec],
    supported_versions: &'static [&'static str],
    current_version: &'static str,
    version_column: &'static str,
    presence_column: &'static str,
}

impl SheetSchema {
    /// Declare a schema.
    ///
    /// `current_version` should be a member of `supported_versions`, and
    /// `version_column` and `presence_column` should name columns of the
    /// schema; [`SheetSchema::is_consistent`] checks both.
    #[must_use]
    pub const fn new(
        title: &'static str,
        columns: &'static [ColumnSpec],
        supported_versions: &'static [&'static str],
        current_version: &'static str,
        version_column: &'static str,
        presence_column: &'static str,
    ) -> Self {
        Self {
            title,
            columns,
            supported_versions,
            current_version,
            version_column,
            presence_column,
        }
    }

    /// Human readable name used in diagnostics
    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Columns in physical order
    #[must_use]
    pub fn columns(&self) -> &'static [ColumnSpec] {
        self.columns
    }

    /// Iterate over `(offset, column)` pairs
    pub fn positioned(&self) -> impl Iterator<Item = (usize, &'static ColumnSpec)> {
        self.columns.iter().enumerate()
    }

    /// Look up a column and its offset by display name
    #[must_use]
    pub fn column(&self, name: &str) -> Option<(usize, &'static ColumnSpec)> {
        self.positioned().find(|(_, column)| column.name == name)
    }

    /// Offset of a column by display name
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.column(name).map(|(offset, _)| offset)
    }

    /// Exact membership test against the supported versions
    #[must_use]
    pub fn is_supported(&self, version: &str) -> bool {
        self.supported_versions.contains(&version)
    }

    #[must_use]
    pub fn supported_versions(&self) -> &'static [&'static str] {
        self.supported_versions
    }

    /// Version written when a new sheet is initialized
    #[must_use]
    pub fn current_version(&self) -> &'static str {
        self.current_version
    }

    #[must_use]
    pub fn version_column(&self) -> &'static str {
        self.version_column
    }

    /// Column whose non-empty value marks a row as a populated record
    #[must_use]
    pub fn presence_column(&self) -> &'static str {
        self.presence_column
    }

    /// Check the declaration's internal references.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let unique_names = self
            .positioned()
            .all(|(offset, column)| self.position(column.name) == Some(offset));

        unique_names
            && self.is_supported(self.current_version)
            && self.position(self.version_column).is_some()
            && self.position(self.presence_column).is_some()
    }
}
