use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::acquire::RepoSource;
use crate::analyze::analyze_text;
use crate::chat::ChatClient;
use crate::config::Config;
use crate::onboard::onboard;
use crate::server::{serve, AppState};
use crate::summarize::LlmSummarizer;

/// CLI for repo-onboard: explain a codebase file by file through an LLM.
#[derive(Parser)]
#[clap(
    name = "repo-onboard",
    version,
    about = "Generate per-file onboarding explanations for a code repository"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP onboarding service
    Serve {
        /// Address to bind, e.g. 127.0.0.1:8000 (overrides ONBOARD_BIND_ADDR)
        #[clap(long)]
        bind: Option<String>,
    },
    /// Onboard a single repository and print the report as JSON
    Onboard {
        /// Repository URL (http/https) or local path
        #[clap(long)]
        source: String,
    },
    /// Send a text message to the excuse analysis prompt and print the reply
    Analyze {
        /// The text to analyze
        #[clap(long)]
        text: String,
    },
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Serve { bind } => {
            let mut config = Config::from_env()?;
            if let Some(bind) = bind {
                config.bind_addr = bind;
            }
            let client = ChatClient::new(config.llm.clone())?;
            let summarizer = Arc::new(LlmSummarizer::new(client, config.max_content_bytes));
            serve(AppState {
                config: Arc::new(config),
                summarizer,
            })
            .await
        }
        Commands::Onboard { source } => {
            let config = Config::from_env()?;
            let source = RepoSource::parse(&source)?;
            let client = ChatClient::new(config.llm.clone())?;
            let summarizer = LlmSummarizer::new(client, config.max_content_bytes);
            let report = onboard(&source, &config, &summarizer).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Commands::Analyze { text } => {
            let config = Config::from_env()?;
            let client = ChatClient::new(config.llm.clone())?;
            let reply = analyze_text(&client, &text).await?;
            println!("{reply}");
            Ok(())
        }
    }
}
