//! Trait abstraction for submission transports to enable mocking in tests

use super::payload::Submission;
use crate::error::SubmissionError;
use async_trait::async_trait;
use uuid::Uuid;

/// Acknowledgement returned by a sink after accepting a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub submission_id: Uuid,
    /// Where the payload went (sink name or file path)
    pub destination: String,
}

/// Transport that accepts validated submissions
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Hand the submission to the transport
    async fn dispatch(&self, submission: &Submission) -> Result<Receipt, SubmissionError>;

    /// Short name shown in the status bar
    fn name(&self) -> &'static str;
}
