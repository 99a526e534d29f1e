//! One-shot text analysis with a fixed prompt template.

use crate::chat::{ChatClient, ChatMessage};
use crate::error::LlmError;

/// Analyze a text message for excuses and return the generated verdict.
///
/// A single completion call; the prompt is parameterized only by the input
/// text. Blank input is rejected before any request is sent.
pub async fn analyze_text(client: &ChatClient, text: &str) -> Result<String, LlmError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(LlmError::InvalidRequest("input text is empty".to_string()));
    }
    client
        .complete(vec![ChatMessage::user(analysis_prompt(trimmed))])
        .await
}

fn analysis_prompt(text: &str) -> String {
    format!(
        "You are an AI agent that detects excuses in text messages.\n\n\
         For the given input, do the following:\n\
         1. Detect if it contains an excuse (Yes/No).\n\
         2. If Yes, classify it as:\n\
            - Believable\n\
            - Nonsense\n\
            - Suspicious\n\
         3. Provide a short explanation for your reasoning.\n\
         4. Roast the excuse with humor, sarcasm, or playful banter.\n\n\
         Text: \"{text}\""
    )
}
