use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("discord rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("discord request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
