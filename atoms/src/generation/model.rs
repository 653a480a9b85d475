use serde::{Deserialize, Serialize};

/// Every request asks for a single image
pub const IMAGE_COUNT: u8 = 1;
pub const IMAGE_SIZE: &str = "512x512";

/// Request body for `POST /v1/images/generations`
#[derive(Debug, Serialize)]
pub struct GenerationRequest<'a> {
    pub prompt: &'a str,
    pub n: u8,
    pub size: &'a str,
}

impl<'a> GenerationRequest<'a> {
    pub fn new(prompt: &'a str) -> Self {
        GenerationRequest {
            prompt,
            n: IMAGE_COUNT,
            size: IMAGE_SIZE,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ImagesResponse {
    #[serde(default)]
    pub data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
pub struct ImageData {
    pub url: Option<String>,
}

/// A generated image and the prompt that produced it
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub prompt: String,
    pub url: String,
}
