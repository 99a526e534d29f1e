//! Per-file summarization against the completions endpoint.

use async_trait::async_trait;
use tracing::debug;

use crate::chat::{ChatClient, ChatMessage};
use crate::contract::Summarizer;
use crate::error::LlmError;

/// Default cap on file content embedded in a prompt, in bytes. Keeps the
/// request within the upstream context limit.
pub const DEFAULT_MAX_CONTENT_BYTES: usize = 150_000;

const SYSTEM_PROMPT: &str = "You are a senior developer helping onboard a new teammate.";

/// [`Summarizer`] backed by a chat completions endpoint.
pub struct LlmSummarizer {
    client: ChatClient,
    max_content_bytes: usize,
}

impl LlmSummarizer {
    pub fn new(client: ChatClient, max_content_bytes: usize) -> Self {
        Self {
            client,
            max_content_bytes,
        }
    }
}

#[async_trait]
impl Summarizer for LlmSummarizer {
    async fn summarize(&self, path: &str, content: &str) -> Result<String, LlmError> {
        let truncated = truncate_to_boundary(content, self.max_content_bytes);
        if truncated.len() < content.len() {
            debug!(
                path,
                original = content.len(),
                truncated = truncated.len(),
                "Truncated file content for prompt"
            );
        }

        let basename = std::path::Path::new(path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(path);

        let messages = vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(summary_prompt(basename, truncated)),
        ];
        self.client.complete(messages).await
    }
}

/// The fixed onboarding prompt, parameterized only by file basename and
/// (truncated) content.
fn summary_prompt(filename: &str, content: &str) -> String {
    format!(
        "You are a senior developer onboarding a new engineer.\n\
         Explain the file `{filename}` in simple, clear terms for CLI viewing:\n\
         - Start with a brief overview.\n\
         - List key components or functions in bullet points.\n\
         - Mention how it connects to the system.\n\
         - Use markdown-style formatting (## headings, **bold**, `inline code`, code blocks if needed).\n\
         - Keep explanations clear and skimmable.\n\n\
         File content:\n{content}"
    )
}

/// Truncate to at most `max` bytes without splitting a UTF-8 sequence.
fn truncate_to_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
