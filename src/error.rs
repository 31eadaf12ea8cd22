//! Error types for docpeek

use thiserror::Error;

/// Main error type for docpeek
#[derive(Debug, Error)]
pub enum DocpeekError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} not found")]
    AnchorNotFound(String),

    #[error("Help tag not found: {0}")]
    TagNotFound(String),

    #[error("No help found for {0}")]
    HelpNotFound(String),

    #[error("Topic not found: {topic}")]
    TopicNotFound { topic: String, known: Vec<String> },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Formatter error: {0}")]
    Formatter(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DocpeekError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DocpeekError::Config(_) | DocpeekError::TomlDeserialize(_) => 3,
            DocpeekError::AnchorNotFound(_)
            | DocpeekError::TagNotFound(_)
            | DocpeekError::HelpNotFound(_)
            | DocpeekError::TopicNotFound { .. } => 4,
            DocpeekError::Formatter(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DocpeekError::TagNotFound(key) => {
                format!(
                    "No help tag matches '{}'\n\n\
                    Suggestions:\n\
                    • Check the runtime path: docpeek vim:help -r <dir> -k {}\n\
                    • The runtime directory must contain doc/tags\n\
                    • Try a shorter key, partial keys match as prefix or substring",
                    key, key
                )
            }
            DocpeekError::AnchorNotFound(anchor) => {
                format!(
                    "{} not found\n\n\
                    The tags index points at an anchor that is missing from its document.\n\
                    Regenerate the index with :helptags if the docs were edited.",
                    anchor
                )
            }
            DocpeekError::TopicNotFound { topic, known } => {
                format!(
                    "Topic not found: '{}'\n\n\
                    Known topics:\n{}",
                    topic,
                    known
                        .iter()
                        .map(|name| format!("• {}", name))
                        .collect::<Vec<_>>()
                        .join("\n")
                )
            }
            DocpeekError::Formatter(msg) => {
                format!(
                    "Formatter error: {}\n\n\
                    Suggestions:\n\
                    • Check that the formatter is installed and in PATH\n\
                    • Run without a formatter: unset DOCPEEK_FORMATTER\n\
                    • Inspect the effective setting: docpeek config",
                    msg
                )
            }
            DocpeekError::Config(msg) => {
                if msg.contains("max_lines") {
                    format!(
                        "Configuration error: {}\n\n\
                        max_lines must be a positive integer\n\
                        Example: docpeek vim:help -k options -l 30",
                        msg
                    )
                } else {
                    self.to_string()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DocpeekError
pub type Result<T> = std::result::Result<T, DocpeekError>;
