use thiserror::Error;

/// Failure of the one-time command registration call
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("discord rejected command registration ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("command registration request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
