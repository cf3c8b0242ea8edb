//! CLI error types.

use textkit_config::ConfigError;
use textkit_json::JsonError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] JsonError),

    #[error("{0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Input exceeds {limit} bytes")]
    InputTooLarge { limit: u64 },

    #[error("Input is not valid UTF-8")]
    InvalidUtf8,

    #[error("{0}")]
    Pattern(String),

    #[error("{0}")]
    Validation(String),
}
