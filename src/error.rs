//! Domain error types.
//!
//! Validation failures are not errors in this sense: they are collected into a
//! `ValidationResult` and shown inline. The types here cover misuse of the form
//! controller and failures while handing a submission to its sink.

use std::path::PathBuf;

/// Errors raised by the form controller's input operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    /// The field is not declared for the active category
    #[error("field '{0}' is not part of this form")]
    UnknownField(String),

    /// A file was attached to a field that does not take files
    #[error("field '{0}' does not accept files")]
    NotAFileField(String),

    /// A multi-file field already holds its maximum number of files
    #[error("field '{field}' accepts at most {max} files")]
    TooManyFiles { field: String, max: usize },
}

/// Errors raised while dispatching a submission
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The payload could not be encoded as JSON
    #[error("failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),

    /// The payload could not be written to the outbox
    #[error("failed to write submission to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A category identifier that does not name one of the registration types
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);
