//! Contract between the onboarding orchestrator and the summarization
//! backend, plus the report types assembled from a run.
//!
//! The [`Summarizer`] trait is the seam for tests: the real implementation
//! talks to a completions endpoint, while unit and integration tests plug in
//! mocks generated by `mockall` (exported under the `test-export-mocks`
//! feature) or hand-written stubs.

use async_trait::async_trait;

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;

use crate::error::LlmError;

/// Produces an explanation for a single file.
///
/// Implementors must not assume anything about call ordering: the
/// orchestrator may run several summarizations concurrently.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Explain one file given its repository-relative path and content.
    async fn summarize(&self, path: &str, content: &str) -> Result<String, LlmError>;
}

/// Outcome recorded for one candidate file.
///
/// Explicitly tagged so callers can tell a generated explanation from a
/// degraded failure without inspecting string content.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FileOutcome {
    /// The completions endpoint produced an explanation.
    Summary { text: String },
    /// Reading or summarizing the file failed; the message embeds the file
    /// path and the failure detail.
    Error { message: String },
}

/// One candidate file and what became of it.
#[derive(Debug, Clone, serde::Serialize)]
pub struct FileReport {
    pub path: String,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

/// Ordered per-file results of one onboarding run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct OnboardReport {
    pub files: Vec<FileReport>,
}

impl OnboardReport {
    /// Flatten to the wire shape: file path mapped to its explanation or
    /// error string.
    pub fn to_flat_map(&self) -> serde_json::Map<String, serde_json::Value> {
        self.files
            .iter()
            .map(|f| {
                let value = match &f.outcome {
                    FileOutcome::Summary { text } => text.clone(),
                    FileOutcome::Error { message } => message.clone(),
                };
                (f.path.clone(), serde_json::Value::String(value))
            })
            .collect()
    }
}
