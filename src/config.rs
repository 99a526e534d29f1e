use std::time::Duration;
use tracing::{error, info};

use crate::error::OnboardError;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-r1-0528:free";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_CONCURRENCY: usize = 4;
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Connection settings for the completions endpoint.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    /// Per-request timeout for the HTTP client.
    pub timeout: Duration,
}

/// Process-wide configuration, loaded once and passed explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmConfig,
    /// Cap on the discovery portion of the candidate file list.
    pub max_discovered: usize,
    /// Cap on file content embedded in a summarization prompt, in bytes.
    pub max_content_bytes: usize,
    /// How many files are summarized concurrently.
    pub concurrency: usize,
    pub bind_addr: String,
}

impl Config {
    /// Load the full configuration from environment variables.
    ///
    /// `LLM_API_KEY` is required; everything else has a default. Malformed
    /// numeric overrides are errors, not silent fallbacks.
    pub fn from_env() -> Result<Self, OnboardError> {
        let api_key = match std::env::var("LLM_API_KEY") {
            Ok(key) if !key.trim().is_empty() => key,
            _ => {
                error!("LLM_API_KEY environment variable not set");
                return Err(OnboardError::Config(
                    "LLM_API_KEY environment variable not set".to_string(),
                ));
            }
        };

        let base_url = env_or("LLM_BASE_URL", DEFAULT_BASE_URL);
        let model = env_or("LLM_MODEL", DEFAULT_MODEL);
        let timeout = Duration::from_secs(env_parse("LLM_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?);
        let max_discovered = env_parse("ONBOARD_MAX_FILES", crate::select::DEFAULT_MAX_DISCOVERED)?;
        let max_content_bytes = env_parse(
            "ONBOARD_MAX_CONTENT_BYTES",
            crate::summarize::DEFAULT_MAX_CONTENT_BYTES,
        )?;
        let concurrency = env_parse("ONBOARD_CONCURRENCY", DEFAULT_CONCURRENCY)?;
        let bind_addr = env_or("ONBOARD_BIND_ADDR", DEFAULT_BIND_ADDR);

        info!(
            base_url = %base_url,
            model = %model,
            max_discovered,
            concurrency,
            "Configuration loaded"
        );

        Ok(Config {
            llm: LlmConfig {
                api_key,
                base_url,
                model,
                timeout,
            },
            max_discovered,
            max_content_bytes,
            concurrency,
            bind_addr,
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_parse<T>(name: &str, default: T) -> Result<T, OnboardError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|e| {
            error!(var = name, value = %raw, "Invalid numeric environment override");
            OnboardError::Config(format!("{name} must be a valid number: {e}"))
        }),
        Err(_) => Ok(default),
    }
}
