use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::interactions::OriginCoordinates;

/// Message posted back into the originating channel
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FollowupMessage {
    pub content: String,
    pub message_reference: MessageReference,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MessageReference {
    pub channel_id: String,
    pub guild_id: String,
    pub message_id: String,
}

impl FollowupMessage {
    pub fn new(origin: &OriginCoordinates, content: impl Into<String>) -> Self {
        FollowupMessage {
            content: content.into(),
            message_reference: MessageReference {
                channel_id: origin.channel_id.clone(),
                guild_id: origin.guild_id.clone(),
                message_id: origin.message_id.clone(),
            },
        }
    }
}

/// Which Discord endpoint carries the result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryMode {
    /// `POST /webhooks/{application_id}/{token}`, tied to the interaction token
    #[default]
    Followup,
    /// `POST /channels/{channel_id}/messages` as the bot user
    ChannelMessage,
}

impl FromStr for DeliveryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "followup" => Ok(DeliveryMode::Followup),
            "channel" => Ok(DeliveryMode::ChannelMessage),
            other => Err(format!("unknown delivery mode: {}", other)),
        }
    }
}
