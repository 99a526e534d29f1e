pub mod acquire;
pub mod analyze;
pub mod chat;
pub mod cli;
pub mod config;
pub mod contract;
pub mod error;
pub mod onboard;
pub mod select;
pub mod server;
pub mod summarize;

pub use config::Config;
pub use error::{LlmError, OnboardError};
