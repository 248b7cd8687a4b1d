//! Submission sinks: log output and a JSON outbox directory

use super::payload::Submission;
use super::traits::{Receipt, SubmissionSink};
use crate::error::SubmissionError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Writes the payload to the application log
#[derive(Debug, Default, Clone)]
pub struct LogSink;

#[async_trait]
impl SubmissionSink for LogSink {
    async fn dispatch(&self, submission: &Submission) -> Result<Receipt, SubmissionError> {
        let payload = serde_json::to_string(submission)?;
        tracing::info!(
            id = %submission.id,
            category = %submission.category,
            %payload,
            "Submitting registration"
        );
        Ok(Receipt {
            submission_id: submission.id,
            destination: self.name().to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

/// Writes each payload to `<dir>/<id>.json` for pickup by another process
#[derive(Debug, Clone)]
pub struct OutboxSink {
    dir: PathBuf,
}

impl OutboxSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn payload_path(&self, submission: &Submission) -> PathBuf {
        self.dir.join(format!("{}.json", submission.id))
    }
}

#[async_trait]
impl SubmissionSink for OutboxSink {
    async fn dispatch(&self, submission: &Submission) -> Result<Receipt, SubmissionError> {
        let payload = submission.to_json_pretty()?;
        let path = self.payload_path(submission);

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| SubmissionError::Write {
                path: self.dir.clone(),
                source,
            })?;
        tokio::fs::write(&path, payload)
            .await
            .map_err(|source| SubmissionError::Write {
                path: path.clone(),
                source,
            })?;

        tracing::info!(
            id = %submission.id,
            category = %submission.category,
            path = %path.display(),
            "Wrote registration to outbox"
        );
        Ok(Receipt {
            submission_id: submission.id,
            destination: path.display().to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "outbox"
    }
}

/// Pick the sink for the configured outbox, falling back to the log
pub fn build_sink(outbox_dir: Option<&Path>) -> Box<dyn SubmissionSink> {
    match outbox_dir {
        Some(dir) => Box::new(OutboxSink::new(dir)),
        None => Box::new(LogSink),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Category;
    use crate::state::FormValues;

    fn submission() -> Submission {
        let values: FormValues = [("companyName", "Route Logistics Ltd")].into_iter().collect();
        Submission::from_values(Category::VehicleContractor, &values)
    }

    #[tokio::test]
    async fn test_log_sink_acknowledges() {
        let submission = submission();
        let receipt = LogSink.dispatch(&submission).await.unwrap();
        assert_eq!(receipt.submission_id, submission.id);
        assert_eq!(receipt.destination, "log");
    }

    #[tokio::test]
    async fn test_outbox_sink_writes_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let outbox = dir.path().join("outbox");
        let sink = OutboxSink::new(&outbox);
        let submission = submission();

        let receipt = sink.dispatch(&submission).await.unwrap();

        let path = outbox.join(format!("{}.json", submission.id));
        assert_eq!(receipt.destination, path.display().to_string());
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["category"], "vehicle-contractor");
        assert_eq!(written["fields"]["companyName"], "Route Logistics Ltd");
    }

    #[test]
    fn test_outbox_sink_reports_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the outbox directory should be
        let blocker = dir.path().join("outbox");
        std::fs::write(&blocker, "not a directory").unwrap();
        let sink = OutboxSink::new(&blocker);

        let result = tokio_test::block_on(sink.dispatch(&submission()));
        assert!(matches!(result, Err(SubmissionError::Write { .. })));
    }

    #[test]
    fn test_build_sink_selects_by_config() {
        assert_eq!(build_sink(None).name(), "log");
        assert_eq!(build_sink(Some(Path::new("/tmp/outbox"))).name(), "outbox");
    }
}
