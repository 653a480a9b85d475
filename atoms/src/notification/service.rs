use async_trait::async_trait;
use reqwest::Client;

use super::error::NotificationError;
use super::model::{DeliveryMode, FollowupMessage};
use crate::interactions::OriginCoordinates;

pub const DISCORD_API_BASE: &str = "https://discord.com/api/v10";

/// Posts a result back to where a command came from. Single attempt.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, origin: &OriginCoordinates, content: &str)
        -> Result<(), NotificationError>;
}

#[derive(Clone)]
pub struct DiscordNotifier {
    http: Client,
    bot_token: String,
    api_base: String,
    mode: DeliveryMode,
}

impl DiscordNotifier {
    pub fn new(
        http: Client,
        bot_token: impl Into<String>,
        api_base: impl Into<String>,
        mode: DeliveryMode,
    ) -> Self {
        DiscordNotifier {
            http,
            bot_token: bot_token.into(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            mode,
        }
    }

    fn endpoint(&self, origin: &OriginCoordinates) -> String {
        match self.mode {
            DeliveryMode::Followup => format!(
                "{}/webhooks/{}/{}",
                self.api_base, origin.application_id, origin.token
            ),
            DeliveryMode::ChannelMessage => {
                format!("{}/channels/{}/messages", self.api_base, origin.channel_id)
            }
        }
    }
}

#[async_trait]
impl Notifier for DiscordNotifier {
    async fn notify(
        &self,
        origin: &OriginCoordinates,
        content: &str,
    ) -> Result<(), NotificationError> {
        let response = self
            .http
            .post(self.endpoint(origin))
            .header("Authorization", format!("Bot {}", self.bot_token))
            .json(&FollowupMessage::new(origin, content))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!("📨 Posted result to channel {}", origin.channel_id);
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(NotificationError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
