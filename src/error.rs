//! clipocr error types

/// clipocr error types
#[derive(Debug, thiserror::Error)]
pub enum ClipocrError {
    // Collaborator errors
    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("recognition transport error: {0}")]
    Transport(String),

    #[error("recognition provider exhausted: no scripted response left")]
    ProviderExhausted,

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("replay script error at step {step}: {message}")]
    Script { step: usize, message: String },

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A required collaborator was not supplied to the session builder.
    #[error("missing collaborator: {0}")]
    MissingCollaborator(&'static str),
}

impl ClipocrError {
    /// Whether this error came from a collaborator call rather than from
    /// local input or configuration.
    ///
    /// Collaborator errors are degraded inside the session (logged, then
    /// treated as "no image" or "no response"); the rest are surfaced to
    /// the caller that built or drove the session.
    pub fn is_collaborator(&self) -> bool {
        matches!(
            self,
            Self::Clipboard(_) | Self::Transport(_) | Self::ProviderExhausted
        )
    }
}

/// Result type alias for clipocr operations
pub type Result<T> = std::result::Result<T, ClipocrError>;
