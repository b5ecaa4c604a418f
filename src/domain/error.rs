use std::io;

use thiserror::Error;

/// Library-wide error type for promptgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The goal field was blank at submission.
    #[error("Goal is required to generate a prompt.")]
    GoalRequired,

    /// The language/stack field was blank at submission.
    #[error("Language / stack is required.")]
    LanguageStackRequired,

    /// A copy was requested with no generated text.
    #[error("Nothing to copy yet. Generate a prompt first.")]
    NothingToCopy,

    /// Every copy path was exhausted without placing text on the clipboard.
    #[error("Unable to copy prompt automatically.")]
    CopyUnavailable,

    /// The fallback utility broke mid-operation.
    #[error("Copy failed. Try selecting and copying manually.")]
    CopyFailed(#[source] io::Error),

    /// System clipboard failure detail. Routed to the fallback utility by the
    /// copy chain rather than surfaced on its own.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Defaults file could not be parsed.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub(crate) fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
