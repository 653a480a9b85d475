use reqwest::Client;

use super::error::RegistrationError;
use super::model::{CommandDefinition, ImageCommand};

/// Command definitions declared to Discord, one per `ImageCommand`
pub fn definitions() -> Vec<CommandDefinition> {
    ImageCommand::ALL.into_iter().map(CommandDefinition::from).collect()
}

/// Overwrite the application's global commands with `definitions()`.
/// The PUT is idempotent, so calling this repeatedly is harmless.
pub async fn register_commands(
    http: &Client,
    api_base: &str,
    application_id: &str,
    bot_token: &str,
) -> Result<(), RegistrationError> {
    let url = format!("{}/applications/{}/commands", api_base, application_id);

    let response = http
        .put(&url)
        .header("Authorization", format!("Bot {}", bot_token))
        .json(&definitions())
        .send()
        .await?;

    let status = response.status();
    if status.is_success() {
        tracing::info!("✅ Registered all commands");
        return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    Err(RegistrationError::Rejected {
        status: status.as_u16(),
        body,
    })
}
