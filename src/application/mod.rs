//! Application layer - Use cases and orchestration

pub mod cli_help;
pub mod preview_topic;
pub mod show_config;
pub mod vim_help;

pub use cli_help::{CliHelpService, HelpOutcome, HelpSource};
pub use preview_topic::TopicPreviewService;
pub use vim_help::VimHelpService;
