use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::error::GenerationError;
use super::model::{GenerationRequest, GenerationResult, ImagesResponse};

pub const OPENAI_API_BASE: &str = "https://api.openai.com";

/// Anything that can turn a prompt into one image locator.
///
/// Implementations make a single attempt; callers that want retries wrap the
/// call themselves.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<GenerationResult, GenerationError>;
}

/// OpenAI Images API client
#[derive(Clone)]
pub struct OpenAiImageClient {
    http: Client,
    api_key: String,
    api_base: String,
}

impl OpenAiImageClient {
    pub fn new(http: Client, api_key: impl Into<String>, api_base: impl Into<String>) -> Self {
        OpenAiImageClient {
            http,
            api_key: api_key.into(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ImageGenerator for OpenAiImageClient {
    async fn generate(&self, prompt: &str) -> Result<GenerationResult, GenerationError> {
        let url = format!("{}/v1/images/generations", self.api_base);
        tracing::info!("🎨 Requesting image generation: prompt={:?}", prompt);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&GenerationRequest::new(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        match status {
            s if s.is_success() => {}
            StatusCode::TOO_MANY_REQUESTS => return Err(GenerationError::RateLimited),
            StatusCode::BAD_REQUEST => return Err(GenerationError::InvalidPrompt(body)),
            s => {
                return Err(GenerationError::Api {
                    status: s.as_u16(),
                    body,
                })
            }
        }

        let parsed: ImagesResponse = serde_json::from_str(&body)
            .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

        let url = parsed
            .data
            .into_iter()
            .find_map(|image| image.url)
            .ok_or_else(|| GenerationError::MalformedResponse("no image url in response".to_string()))?;

        Ok(GenerationResult {
            prompt: prompt.to_string(),
            url,
        })
    }
}
