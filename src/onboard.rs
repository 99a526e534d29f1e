//! Orchestration: acquire the repository, select candidate files, summarize
//! each, and assemble the report.
//!
//! Error policy is two-tier: acquisition failures abort the run, while
//! per-file read or summarization failures degrade into that file's
//! recorded outcome and never abort the batch.

use std::path::Path;

use futures::stream::{self, StreamExt};
use tracing::{error, info, warn};

use crate::acquire::{acquire, RepoSource};
use crate::config::Config;
use crate::contract::{FileOutcome, FileReport, OnboardReport, Summarizer};
use crate::error::OnboardError;
use crate::select::select_files;

/// Run one onboarding pass over the given source.
///
/// Candidate files are summarized as an order-preserving map with bounded
/// concurrency; the report lists files exactly in selection order. The
/// owned working directory is released when the acquisition guard drops,
/// on every exit path.
pub async fn onboard<S>(
    source: &RepoSource,
    config: &Config,
    summarizer: &S,
) -> Result<OnboardReport, OnboardError>
where
    S: Summarizer + ?Sized,
{
    let workdir = acquire(source)?;
    let root = workdir.root();

    let candidates = select_files(root, config.max_discovered);
    info!(
        count = candidates.len(),
        root = %root.display(),
        "Starting summarization batch"
    );

    let concurrency = config.concurrency.max(1);
    let files: Vec<FileReport> = stream::iter(candidates)
        .map(|rel| {
            let path = rel.to_string_lossy().into_owned();
            let full = root.join(&rel);
            async move {
                let outcome = summarize_one(summarizer, &path, &full).await;
                FileReport { path, outcome }
            }
        })
        .buffered(concurrency)
        .collect()
        .await;

    info!(files = files.len(), "Onboarding run complete");
    Ok(OnboardReport { files })
}

async fn summarize_one<S>(summarizer: &S, path: &str, full: &Path) -> FileOutcome
where
    S: Summarizer + ?Sized,
{
    // Lossy read: candidate selection is by filename only, so the file may
    // not be valid UTF-8.
    let content = match std::fs::read(full) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            warn!(path, error = ?e, "Failed to read candidate file");
            return FileOutcome::Error {
                message: format!("Error processing {path}: {e}"),
            };
        }
    };

    match summarizer.summarize(path, &content).await {
        Ok(text) => FileOutcome::Summary { text },
        Err(e) => {
            error!(path, error = %e, "Summarization failed");
            FileOutcome::Error {
                message: format!("Error processing {path}: {e}"),
            }
        }
    }
}
