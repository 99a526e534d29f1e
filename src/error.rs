use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a whole onboarding request.
///
/// Per-file summarization failures are deliberately absent: they degrade
/// into the file's recorded outcome instead of failing the run.
#[derive(Debug, Error)]
pub enum OnboardError {
    /// The request carried no usable repository source.
    #[error("missing repository source")]
    MissingSource,

    /// A local path was given but does not exist.
    #[error("local path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    /// Cloning a remote repository failed.
    #[error("failed to clone repository: {0}")]
    CloneFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors from the completions endpoint client.
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP request failed before a response was received.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint rejected the credentials.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The endpoint throttled the request.
    #[error("rate limit exceeded: {0}")]
    RateLimited(String),

    /// The request was rejected before being sent.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The response body did not have the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Any other non-success answer from the endpoint.
    #[error("completion endpoint error: {0}")]
    Provider(String),
}
