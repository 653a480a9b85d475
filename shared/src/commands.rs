use genpet_atoms::commands::register_commands;
use lambda_http::{http::StatusCode, Body, Error, Response};

use crate::responses::json_response;
use crate::AppState;

/// GET /discord/command
///
/// Declares the slash commands to Discord. A failed registration is logged
/// and the route still answers ok; rerunning it is safe.
pub async fn handle_register_commands(state: &AppState) -> Result<Response<Body>, Error> {
    let config = &state.config;

    if let Err(e) = register_commands(
        &state.http,
        &config.discord_api_base,
        &config.discord_application_id,
        &config.discord_token,
    )
    .await
    {
        tracing::error!("❌ Error registering commands: {}", e);
    }

    json_response(StatusCode::OK, &serde_json::json!({ "status": "ok" }))
}
