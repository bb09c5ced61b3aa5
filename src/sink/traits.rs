//! Trait abstraction for submission sinks to enable mocking in tests

use crate::state::Submission;
use anyhow::Result;
use async_trait::async_trait;

/// Receives each validated submission exactly once
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Deliver a submission. An error sends the form back to editing.
    async fn submit(&self, submission: &Submission) -> Result<()>;
}
