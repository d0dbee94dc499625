//! The SPDX origins worksheet: document creation metadata.
//!
//! | offset | column                | required | kind   |
//! |--------|-----------------------|----------|--------|
//! | 0      | `Spreadsheet Version` | yes      | String |
//! | 1      | `SPDXVersion`         | yes      | String |
//! | 2      | `CreatedBy`           | yes      | String, one creator per row |
//! | 3      | `Created`             | yes      | Date   |
//! | 4      | `DataLicense`         | yes      | String |
//! | 5      | `AuthorComments`      | no       | String |

use crate::binder::BoundSheet;
use crate::error::ValidationError;
use crate::init::create_sheet;
use crate::schema::{ColumnSpec, SheetSchema, ValueKind};
use crate::store::{BookStore, SheetStore};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use spdxsheet_workbook::Result;

pub const SPREADSHEET_VERSION: &str = "Spreadsheet Version";
pub const SPDX_VERSION: &str = "SPDXVersion";
pub const CREATED_BY: &str = "CreatedBy";
pub const CREATED: &str = "Created";
pub const DATA_LICENSE: &str = "DataLicense";
pub const AUTHOR_COMMENTS: &str = "AuthorComments";

/// Origins layout version written by [`OriginsSheet::create`].
pub const CURRENT_VERSION: &str = "0.8";

/// Conventional name of the origins worksheet in an SPDX workbook.
pub const DEFAULT_SHEET_NAME: &str = "Origins";

const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::required(SPREADSHEET_VERSION, ValueKind::String),
    ColumnSpec::required(SPDX_VERSION, ValueKind::String),
    ColumnSpec::required(CREATED_BY, ValueKind::String),
    ColumnSpec::required(CREATED, ValueKind::Date),
    ColumnSpec::required(DATA_LICENSE, ValueKind::String),
    ColumnSpec::optional(AUTHOR_COMMENTS, ValueKind::String),
];

pub static ORIGINS_SCHEMA: SheetSchema = SheetSchema::new(
    "SPDX Origins",
    COLUMNS,
    &[CURRENT_VERSION],
    CURRENT_VERSION,
    SPREADSHEET_VERSION,
    SPDX_VERSION,
);

/// In-memory origins record, independent of how it is stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginsRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spreadsheet_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spdx_version: Option<String>,
    #[serde(default)]
    pub created_by: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_comments: Option<String>,
}

/// Typed view of an origins worksheet.
#[derive(Debug)]
pub struct OriginsSheet<'a, S: SheetStore> {
    bound: BoundSheet<'a, S>,
}

impl<'a, S: SheetStore> OriginsSheet<'a, S> {
    pub fn new(origin: Option<&'a mut S>) -> Self {
        Self {
            bound: BoundSheet::new(&ORIGINS_SCHEMA, origin),
        }
    }

    /// Bind the origins sheet called `name` inside `book`, if any.
    pub fn open<B>(book: &'a mut B, name: &str) -> Self
    where
        B: BookStore<Sheet = S>,
    {
        Self {
            bound: BoundSheet::open(&ORIGINS_SCHEMA, book, name),
        }
    }

    /// Create a fresh origins sheet in `book`, replacing any sheet of the
    /// same name.
    pub fn create<B>(book: &mut B, name: &str) -> Result<()>
    where
        B: BookStore<Sheet = S>,
    {
        create_sheet(book, name, &ORIGINS_SCHEMA)
    }

    /// Access the generic binder
    #[must_use]
    pub fn binder(&self) -> &BoundSheet<'a, S> {
        &self.bound
    }

    pub fn verify(&self) -> std::result::Result<(), ValidationError> {
        self.bound.verify()
    }

    #[must_use]
    pub fn verify_message(&self) -> Option<String> {
        self.bound.verify_message()
    }

    // ===== Getters =====

    pub fn spreadsheet_version(&self) -> Result<Option<String>> {
        self.bound.string(SPREADSHEET_VERSION)
    }

    pub fn spdx_version(&self) -> Result<Option<String>> {
        self.bound.string(SPDX_VERSION)
    }

    /// All creators, in order
    pub fn created_by(&self) -> Result<Vec<String>> {
        self.bound.list(CREATED_BY)
    }

    pub fn created(&self) -> Result<Option<NaiveDateTime>> {
        self.bound.date(CREATED)
    }

    pub fn data_license(&self) -> Result<Option<String>> {
        self.bound.string(DATA_LICENSE)
    }

    pub fn author_comments(&self) -> Result<Option<String>> {
        self.bound.string(AUTHOR_COMMENTS)
    }

    // ===== Setters =====

    pub fn set_spreadsheet_version(&mut self, version: &str) -> Result<()> {
        self.bound.set_string(SPREADSHEET_VERSION, version)
    }

    pub fn set_spdx_version(&mut self, version: &str) -> Result<()> {
        self.bound.set_string(SPDX_VERSION, version)
    }

    /// Replace the creator list, clearing leftovers of a longer one
    pub fn set_created_by<T: AsRef<str>>(&mut self, creators: &[T]) -> Result<()> {
        self.bound.set_list(CREATED_BY, creators)
    }

    /// Write only the first creator cell, leaving continuation rows as they are
    pub fn set_single_creator(&mut self, creator: &str) -> Result<()> {
        self.bound.set_string(CREATED_BY, creator)
    }

    pub fn set_created(&mut self, created: NaiveDateTime) -> Result<()> {
        self.bound.set_date(CREATED, created)
    }

    pub fn set_data_license(&mut self, license: &str) -> Result<()> {
        self.bound.set_string(DATA_LICENSE, license)
    }

    pub fn set_author_comments(&mut self, comments: &str) -> Result<()> {
        self.bound.set_string(AUTHOR_COMMENTS, comments)
    }

    // ===== Whole record =====

    /// Read every field into a record
    pub fn record(&self) -> Result<OriginsRecord> {
        Ok(OriginsRecord {
            spreadsheet_version: self.spreadsheet_version()?,
            spdx_version: self.spdx_version()?,
            created_by: self.created_by()?,
            created: self.created()?,
            data_license: self.data_license()?,
            author_comments: self.author_comments()?,
        })
    }

    /// Write a record. `None` fields keep whatever is stored.
    pub fn write_record(&mut self, record: &OriginsRecord) -> Result<()> {
        if let Some(version) = &record.spreadsheet_version {
            self.set_spreadsheet_version(version)?;
        }
        if let Some(version) = &record.spdx_version {
            self.set_spdx_version(version)?;
        }
        self.set_created_by(&record.created_by)?;
        if let Some(created) = record.created {
            self.set_created(created)?;
        }
        if let Some(license) = &record.data_license {
            self.set_data_license(license)?;
        }
        if let Some(comments) = &record.author_comments {
            self.set_author_comments(comments)?;
        }
        Ok(())
    }
}
