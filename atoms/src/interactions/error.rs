use thiserror::Error;

/// Errors raised while turning a raw interaction body into typed records
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InteractionError {
    /// The body is not JSON or lacks required fields.
    #[error("malformed interaction payload: {0}")]
    Malformed(String),

    /// `data.name` is not one of the registered image commands.
    #[error("unrecognized command: {0}")]
    UnknownCommand(String),

    /// Image commands take exactly one option.
    #[error("expected exactly one command option, got {0}")]
    OptionCount(usize),

    /// The single option is not a string.
    #[error("command option must be a string")]
    NonStringOption,
}

impl From<serde_json::Error> for InteractionError {
    fn from(err: serde_json::Error) -> Self {
        InteractionError::Malformed(err.to_string())
    }
}
