use serde::Deserialize;

use super::error::InteractionError;
use super::model::{CommandData, InteractionEnvelope, APPLICATION_COMMAND, PING};
use crate::commands::ImageCommand;

/// What the edge has to do with a verified interaction body
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    Ping,
    Command { command: ImageCommand, prompt: String },
    Unsupported(u64),
}

#[derive(Debug, Deserialize)]
struct CommandRequest {
    data: CommandData,
}

/// Classify a verified interaction body (pure, no I/O).
///
/// Only `type` and `data` are inspected here; the origin fields are validated
/// later by the worker when it reads the queued job.
pub fn classify(body: &[u8]) -> Result<Interaction, InteractionError> {
    let envelope: InteractionEnvelope = serde_json::from_slice(body)?;

    match envelope.kind {
        PING => Ok(Interaction::Ping),
        APPLICATION_COMMAND => {
            let request: CommandRequest = serde_json::from_slice(body)?;
            let command = request.data.command()?;
            let prompt = request.data.prompt()?.to_string();
            Ok(Interaction::Command { command, prompt })
        }
        other => Ok(Interaction::Unsupported(other)),
    }
}
