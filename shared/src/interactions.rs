use genpet_atoms::interactions::{classify, Interaction, InteractionError, InteractionResponse};
use lambda_http::{
    http::{HeaderMap, StatusCode},
    Body, Error, Response,
};

use crate::responses::{error_response, json_response};
use crate::signature::{verify_request, SignatureError};
use crate::AppState;

/// POST /discord/interactions
///
/// Verify, classify, enqueue, acknowledge. Nothing here calls the image
/// provider; every failure becomes a status code.
pub async fn handle_interaction(
    state: &AppState,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    if let Err(e) = verify_request(headers, body, &state.config.discord_public_key) {
        match e {
            SignatureError::MissingHeaders => {
                tracing::error!("🔒 Rejected interaction: signature headers missing")
            }
            SignatureError::Invalid => tracing::error!("🔒 Rejected interaction: bad signature"),
        }
        return error_response(StatusCode::UNAUTHORIZED, "invalid request signature");
    }

    tracing::info!("📥 Interaction: {}", String::from_utf8_lossy(body));

    let interaction = match classify(body) {
        Ok(interaction) => interaction,
        Err(e @ InteractionError::UnknownCommand(_)) => {
            tracing::warn!("⚠️ {}", e);
            return json_response(StatusCode::BAD_REQUEST, &serde_json::json!({}));
        }
        Err(e) => {
            tracing::warn!("⚠️ Unusable interaction: {}", e);
            return error_response(StatusCode::BAD_REQUEST, &e.to_string());
        }
    };

    match interaction {
        Interaction::Ping => {
            tracing::info!("🏓 Ping, returning pong");
            json_response(StatusCode::OK, &InteractionResponse::pong())
        }
        Interaction::Command { command, prompt } => {
            let payload = match std::str::from_utf8(body) {
                Ok(payload) => payload,
                Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
            };

            if let Err(e) = state.queue.send(payload).await {
                tracing::error!("❌ Could not enqueue {}: {}", command, e);
                return error_response(StatusCode::INTERNAL_SERVER_ERROR, "failed to queue command");
            }

            tracing::info!("✅ Queued {}: prompt={:?}", command, prompt);
            json_response(
                StatusCode::OK,
                &InteractionResponse::in_progress(command, &prompt),
            )
        }
        Interaction::Unsupported(kind) => {
            tracing::warn!("⚠️ Unsupported interaction type {}", kind);
            json_response(StatusCode::BAD_REQUEST, &serde_json::json!({}))
        }
    }
}
