use serde::{Deserialize, Serialize};

use super::error::InteractionError;
use crate::commands::{ImageCommand, STRING_OPTION_TYPE};

pub const PING: u64 = 1;
pub const APPLICATION_COMMAND: u64 = 2;

/// Response types from the Discord interactions API
pub const PONG: u8 = 1;
pub const CHANNEL_MESSAGE_WITH_SOURCE: u8 = 4;

/// Just enough of an interaction to route it
#[derive(Debug, Deserialize)]
pub struct InteractionEnvelope {
    #[serde(rename = "type")]
    pub kind: u64,
}

/// `data` of an application command interaction
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CommandData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub options: Vec<CommandOption>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CommandOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<u8>,
    pub value: serde_json::Value,
}

impl CommandData {
    pub fn command(&self) -> Result<ImageCommand, InteractionError> {
        self.name.parse()
    }

    /// The prompt carried by the single string option
    pub fn prompt(&self) -> Result<&str, InteractionError> {
        let [option] = self.options.as_slice() else {
            return Err(InteractionError::OptionCount(self.options.len()));
        };
        if option.kind.is_some_and(|kind| kind != STRING_OPTION_TYPE) {
            return Err(InteractionError::NonStringOption);
        }
        option.value.as_str().ok_or(InteractionError::NonStringOption)
    }
}

/// Channel block Discord attaches to the interaction
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChannelRef {
    pub guild_id: String,
    pub last_message_id: String,
}

/// A queued application command, as the fulfillment side reads it.
///
/// Unknown fields of the incoming interaction are ignored; every field named
/// here is needed to address the reply, so a payload missing one is rejected.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CommandInvocation {
    pub application_id: String,
    pub channel_id: String,
    pub channel: ChannelRef,
    pub token: String,
    pub data: CommandData,
}

impl CommandInvocation {
    pub fn from_slice(body: &[u8]) -> Result<Self, InteractionError> {
        Ok(serde_json::from_slice(body)?)
    }

    pub fn command(&self) -> Result<ImageCommand, InteractionError> {
        self.data.command()
    }

    pub fn prompt(&self) -> Result<&str, InteractionError> {
        self.data.prompt()
    }

    pub fn origin(&self) -> OriginCoordinates {
        OriginCoordinates::from(self)
    }
}

/// Where a follow-up for an invocation has to go
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct OriginCoordinates {
    pub application_id: String,
    pub token: String,
    pub channel_id: String,
    pub guild_id: String,
    pub message_id: String,
}

impl From<&CommandInvocation> for OriginCoordinates {
    fn from(invocation: &CommandInvocation) -> Self {
        OriginCoordinates {
            application_id: invocation.application_id.clone(),
            token: invocation.token.clone(),
            channel_id: invocation.channel_id.clone(),
            guild_id: invocation.channel.guild_id.clone(),
            message_id: invocation.channel.last_message_id.clone(),
        }
    }
}

/// Synchronous reply to an interaction
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<InteractionResponseData>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct InteractionResponseData {
    pub content: String,
}

impl InteractionResponse {
    pub fn pong() -> Self {
        InteractionResponse {
            kind: PONG,
            data: None,
        }
    }

    /// Tells the user the image is on its way; the follow-up arrives later.
    pub fn in_progress(command: ImageCommand, prompt: &str) -> Self {
        InteractionResponse {
            kind: CHANNEL_MESSAGE_WITH_SOURCE,
            data: Some(InteractionResponseData {
                content: format!("Generating ({}): \"{}\"", command, prompt),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queued_gencat() -> serde_json::Value {
        serde_json::json!({
            "application_id": "app-1",
            "channel": {"guild_id": "guild-1", "last_message_id": "msg-1", "name": "general"},
            "channel_id": "chan-1",
            "data": {
                "id": "cmd-1",
                "name": "gencat",
                "options": [{"name": "prompt", "type": 3, "value": "a tabby cat"}],
                "type": 1
            },
            "token": "tok-1",
            "type": 2,
            "version": 1
        })
    }

    #[test]
    fn invocation_parses_queued_body_and_builds_origin() {
        let invocation =
            CommandInvocation::from_slice(queued_gencat().to_string().as_bytes()).unwrap();

        assert_eq!(invocation.command(), Ok(ImageCommand::GenCat));
        assert_eq!(invocation.prompt(), Ok("a tabby cat"));
        assert_eq!(
            invocation.origin(),
            OriginCoordinates {
                application_id: "app-1".to_string(),
                token: "tok-1".to_string(),
                channel_id: "chan-1".to_string(),
                guild_id: "guild-1".to_string(),
                message_id: "msg-1".to_string(),
            }
        );
    }

    #[test]
    fn invocation_without_channel_block_is_malformed() {
        let mut body = queued_gencat();
        body.as_object_mut().unwrap().remove("channel");

        let err = CommandInvocation::from_slice(body.to_string().as_bytes()).unwrap_err();

        assert!(matches!(err, InteractionError::Malformed(msg) if msg.contains("channel")));
    }

    #[test]
    fn pong_serializes_to_bare_type() {
        let json = serde_json::to_value(InteractionResponse::pong()).unwrap();
        assert_eq!(json, serde_json::json!({"type": 1}));
    }

    #[test]
    fn in_progress_names_command_and_echoes_prompt() {
        let json =
            serde_json::to_value(InteractionResponse::in_progress(ImageCommand::GenDog, "a corgi"))
                .unwrap();

        assert_eq!(json["type"], 4);
        assert_eq!(json["data"]["content"], "Generating (gendog): \"a corgi\"");
    }
}
