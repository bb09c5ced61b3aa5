//! Sink that writes each submission to the log

use super::SubmissionSink;
use crate::state::Submission;
use anyhow::Result;
use async_trait::async_trait;

/// Logs the submission payload and always succeeds
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

#[async_trait]
impl SubmissionSink for LogSink {
    async fn submit(&self, submission: &Submission) -> Result<()> {
        let payload = serde_json::to_string(submission)?;
        tracing::info!(id = %submission.id, %payload, "registration received");
        Ok(())
    }
}
