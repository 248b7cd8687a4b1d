//! Validation outcome types

use serde::Serialize;
use std::collections::BTreeMap;

/// Kind of constraint a value failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Required value missing or blank
    Required,
    /// Malformed email, url, phone, number, or an unknown option
    Format,
    /// Number outside its declared bounds
    Bound,
    /// Text shorter or longer than allowed
    Length,
}

/// Error attached to a single field path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn required() -> Self {
        Self::new(ErrorKind::Required, "Required")
    }
}

/// Per-field outcome of validating a form against one category.
///
/// Only failing paths are stored; the form is valid when none are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    errors: BTreeMap<String, FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn insert(&mut self, path: impl Into<String>, error: FieldError) {
        self.errors.insert(path.into(), error);
    }

    pub fn remove(&mut self, path: &str) -> Option<FieldError> {
        self.errors.remove(path)
    }

    /// Error at exactly `path`
    pub fn error(&self, path: &str) -> Option<&FieldError> {
        self.errors.get(path)
    }

    /// False when `name` or any of its sub-field paths failed
    pub fn is_field_valid(&self, name: &str) -> bool {
        !self
            .errors
            .keys()
            .any(|path| path == name || is_sub_path(path, name))
    }

    /// Errors of `name` and its sub-fields, in path order
    pub fn errors_under<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a FieldError)> + 'a {
        self.errors
            .iter()
            .filter(move |(path, _)| path.as_str() == name || is_sub_path(path, name))
            .map(|(path, error)| (path.as_str(), error))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

fn is_sub_path(path: &str, parent: &str) -> bool {
    path.strip_prefix(parent)
        .is_some_and(|rest| rest.starts_with('.'))
}
