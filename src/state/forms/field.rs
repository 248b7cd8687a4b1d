//! Form field value objects

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Reference to a local file chosen for an upload field.
///
/// Only the path is kept; file content is never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    pub path: PathBuf,
}

impl FileRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Final path component, or the whole path when it has none
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

impl From<&Path> for FileRef {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

/// Current value of one input
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Files(Vec<FileRef>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Vec<FileRef>> for FieldValue {
    fn from(files: Vec<FileRef>) -> Self {
        FieldValue::Files(files)
    }
}

impl FieldValue {
    /// Whitespace-only text counts as empty
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Files(files) => files.is_empty(),
        }
    }

    /// Get the text value (returns empty string for file fields)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Files(_) => "",
        }
    }

    /// Get the attached files (empty for text fields)
    pub fn files(&self) -> &[FileRef] {
        match self {
            FieldValue::Files(files) => files,
            FieldValue::Text(_) => &[],
        }
    }

    /// Push a character to a text value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = self {
            s.push(c);
        }
    }

    /// Remove the last character from a text value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = self {
            s.pop();
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Files(files) => files
                .iter()
                .map(FileRef::file_name)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// In-progress values for every field of every category, keyed by path.
///
/// Sub-fields of compound fields use dotted paths such as
/// `contact1.contactEmail`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    values: BTreeMap<String, FieldValue>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<&FieldValue> {
        self.values.get(path)
    }

    pub fn get_mut(&mut self, path: &str) -> Option<&mut FieldValue> {
        self.values.get_mut(path)
    }

    /// Text at `path`, empty when absent
    pub fn text(&self, path: &str) -> &str {
        self.get(path).map(FieldValue::as_text).unwrap_or("")
    }

    pub fn set(&mut self, path: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(path.into(), value.into());
    }

    /// Entry for `path`, inserting an empty text value when absent
    pub fn entry(&mut self, path: &str) -> &mut FieldValue {
        self.values.entry(path.to_string()).or_default()
    }

    pub fn remove(&mut self, path: &str) -> Option<FieldValue> {
        self.values.remove(path)
    }

    /// True when a non-empty value is stored at `path`
    pub fn is_present(&self, path: &str) -> bool {
        self.get(path).is_some_and(|v| !v.is_empty())
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = FormValues::new();
        for (path, value) in iter {
            values.set(path, value);
        }
        values
    }
}
