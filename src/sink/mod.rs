//! Submission sinks: where validated records go

mod file_sink;
mod log_sink;
mod traits;

pub use file_sink::JsonLinesSink;
pub use log_sink::LogSink;
pub use traits::SubmissionSink;

#[cfg(test)]
pub use traits::MockSubmissionSink;

use crate::config::RegistrationConfig;

/// Build the sink selected by the configuration
pub fn from_config(config: &RegistrationConfig) -> Box<dyn SubmissionSink> {
    match &config.submissions_path {
        Some(path) => {
            let sink = JsonLinesSink::new(path.clone());
            tracing::info!(path = %sink.path().display(), "writing submissions to file");
            Box::new(sink)
        }
        None => Box::new(LogSink),
    }
}
