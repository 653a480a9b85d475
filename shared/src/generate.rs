use genpet_atoms::generation::{GenerationError, ImageGenerator};
use lambda_http::{http::StatusCode, Body, Error, Response};
use serde::Deserialize;

use crate::responses::{error_response, json_response};

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    prompt: String,
}

/// POST /api/generate
///
/// Calls the provider inline and returns the result; no queue involved.
pub async fn handle_generate(
    generator: &dyn ImageGenerator,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    let request: GenerateRequest = match serde_json::from_slice(body) {
        Ok(req) => req,
        Err(e) => {
            tracing::error!("Failed to parse generate request: {}", e);
            return error_response(StatusCode::BAD_REQUEST, &format!("Invalid request body: {}", e));
        }
    };

    match generator.generate(&request.prompt).await {
        Ok(result) => json_response(StatusCode::OK, &result),
        Err(e) => {
            tracing::error!("❌ Image generation failed: {}", e);
            let status = match e {
                GenerationError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
                GenerationError::InvalidPrompt(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::BAD_GATEWAY,
            };
            error_response(status, &e.to_string())
        }
    }
}
