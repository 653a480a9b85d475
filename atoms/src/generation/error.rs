use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("image provider rate limited the request")]
    RateLimited,

    #[error("image provider rejected the prompt: {0}")]
    InvalidPrompt(String),

    #[error("image provider returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("image provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed image provider response: {0}")]
    MalformedResponse(String),
}
