use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use indexmap::IndexMap;

/// A book containing multiple sheets (preserves insertion order)
#[derive(Debug, Clone)]
pub struct Book {
    name: String,
    sheets: IndexMap<String, Sheet>,
}

impl Book {
    /// Create a new empty book
    #[must_use]
    pub fn new() -> Self {
        Self::with_name("Book1")
    }

    /// Create a new empty book with a name
    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Book {
            name: name.to_string(),
            sheets: IndexMap::new(),
        }
    }

    /// Get the book name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the book name
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Get the number of sheets
    #[must_use]
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the book is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Get all sheet names in order
    #[must_use]
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.keys().map(String::as_str).collect()
    }

    /// Check if a sheet exists
    #[must_use]
    pub fn has_sheet(&self, name: &str) -> bool {
        self.sheets.contains_key(name)
    }

    /// Position of a sheet in the book, if present
    #[must_use]
    pub fn sheet_index(&self, name: &str) -> Option<usize> {
        self.sheets.get_index_of(name)
    }

    // ===== Sheet Access =====

    /// Get a sheet by name
    pub fn get_sheet(&self, name: &str) -> Result<&Sheet> {
        self.sheets
            .get(name)
            .ok_or_else(|| SheetError::SheetNotFound {
                name: name.to_string(),
            })
    }

    /// Get a mutable sheet by name
    pub fn get_sheet_mut(&mut self, name: &str) -> Result<&mut Sheet> {
        self.sheets
            .get_mut(name)
            .ok_or_else(|| SheetError::SheetNotFound {
                name: name.to_string(),
            })
    }

    /// Get a sheet by name, `None` if absent
    #[must_use]
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.get(name)
    }

    /// Get a mutable sheet by name, `None` if absent
    pub fn sheet_mut(&mut self, name: &str) -> Option<&mut Sheet> {
        self.sheets.get_mut(name)
    }

    // ===== Sheet Management =====

    /// Add a sheet to the book
    pub fn add_sheet(&mut self, name: &str, sheet: Sheet) -> Result<()> {
        if self.sheets.contains_key(name) {
            return Err(SheetError::SheetAlreadyExists {
                name: name.to_string(),
            });
        }

        let mut sheet = sheet;
        sheet.set_name(name);
        self.sheets.insert(name.to_string(), sheet);
        Ok(())
    }

    /// Add a new empty sheet with the given name
    pub fn add_empty_sheet(&mut self, name: &str) -> Result<&mut Sheet> {
        self.add_sheet(name, Sheet::new())?;
        self.get_sheet_mut(name)
    }

    /// Remove a sheet by name
    pub fn remove_sheet(&mut self, name: &str) -> Result<Sheet> {
        self.sheets
            .shift_remove(name)
            .ok_or_else(|| SheetError::SheetNotFound {
                name: name.to_string(),
            })
    }

    // ===== Iteration =====

    /// Iterate over sheets
    pub fn sheets(&self) -> impl Iterator<Item = (&str, &Sheet)> {
        self.sheets.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over sheets mutably
    pub fn sheets_mut(&mut self) -> impl Iterator<Item = (&str, &mut Sheet)> {
        self.sheets.iter_mut().map(|(k, v)| (k.as_str(), v))
    }
}

impl Default for Book {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoIterator for Book {
    type Item = (String, Sheet);
    type IntoIter = indexmap::map::IntoIter<String, Sheet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sheets.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellValue;

    #[test]
    fn test_new_book() {
        let book = Book::new();
        assert_eq!(book.name(), "Book1");
        assert!(book.is_empty());
        assert_eq!(book.sheet_count(), 0);
    }

    #[test]
    fn test_add_sheet() {
        let mut book = Book::new();
        let sheet = Sheet::from_data(vec![vec![1, 2], vec![3, 4]]);

        book.add_sheet("Data", sheet).unwrap();

        assert_eq!(book.sheet_count(), 1);
        assert!(book.has_sheet("Data"));
        assert_eq!(book.sheet_names(), vec!["Data"]);
        assert_eq!(book.get_sheet("Data").unwrap().name(), "Data");
    }

    #[test]
    fn test_sheet_already_exists() {
        let mut book = Book::new();
        book.add_sheet("Sheet1", Sheet::new()).unwrap();

        let result = book.add_sheet("Sheet1", Sheet::new());
        assert!(matches!(result, Err(SheetError::SheetAlreadyExists { .. })));
    }

    #[test]
    fn test_remove_sheet() {
        let mut book = Book::new();
        book.add_sheet("Sheet1", Sheet::new()).unwrap();
        book.add_sheet("Sheet2", Sheet::new()).unwrap();

        book.remove_sheet("Sheet1").unwrap();

        assert_eq!(book.sheet_count(), 1);
        assert!(!book.has_sheet("Sheet1"));
        assert_eq!(book.sheet_index("Sheet2"), Some(0));
        assert!(matches!(
            book.remove_sheet("Sheet1"),
            Err(SheetError::SheetNotFound { .. })
        ));
    }

    #[test]
    fn test_add_empty_sheet_is_writable() {
        let mut book = Book::new();
        book.add_empty_sheet("Origins").unwrap().set(0, 0, "x").unwrap();

        assert_eq!(
            book.sheet("Origins").unwrap().get(0, 0).unwrap(),
            Some(&CellValue::from("x"))
        );
        assert!(book.sheet("Missing").is_none());
    }

    #[test]
    fn test_sheet_order_preserved() {
        let mut book = Book::new();
        for name in ["c", "a", "b"] {
            book.add_sheet(name, Sheet::new()).unwrap();
        }

        assert_eq!(book.sheet_names(), vec!["c", "a", "b"]);
        let names: Vec<String> = book.into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }
}
