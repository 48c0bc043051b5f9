//! CLI error type.

use thiserror::Error;

/// Errors surfaced to the terminal user.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading or writing the character file failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The character file did not parse.
    #[error("invalid character file: {0}")]
    Json(#[from] serde_json::Error),

    /// The engine rejected a transition.
    #[error("{0}")]
    Chargen(#[from] tvl_core::ChargenError),

    /// The user typed something the REPL does not understand.
    #[error("{0}")]
    Input(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
