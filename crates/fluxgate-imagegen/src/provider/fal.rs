use std::time::Duration;

use async_trait::async_trait;
use fluxgate_core::RequestContext;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::ImageGenProvider;
use crate::{
    error::{ImageGenError, Result},
    types::{GenerateRequest, ImageSize},
};

/// Default fal.ai synchronous run endpoint
const DEFAULT_BASE_URL: &str = "https://fal.run";

/// fal.ai image generation provider
pub(crate) struct FalProvider {
    client: Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl FalProvider {
    /// Create a new fal.ai provider
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed
    pub fn new(
        api_key: SecretString,
        base_url: Option<String>,
        model: String,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build HTTP client: {e}"))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model,
        })
    }
}

/// Wire format for the provider generation request
#[derive(Serialize)]
struct FalGenerateRequest<'a> {
    prompt: &'a str,
    image_size: &'a ImageSize,
}

/// Wire format for the provider generation response
#[derive(Deserialize)]
struct FalGenerateResponse {
    images: Vec<FalImage>,
}

#[derive(Deserialize)]
struct FalImage {
    url: Option<String>,
}

#[async_trait]
impl ImageGenProvider for FalProvider {
    async fn generate(
        &self,
        request: &GenerateRequest,
        context: &RequestContext,
    ) -> Result<String> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), self.model);

        let wire_request = FalGenerateRequest {
            prompt: &request.prompt,
            image_size: &request.image_size,
        };

        tracing::debug!(
            request_id = %context.request_id,
            model = %self.model,
            "sending image generation request to provider"
        );

        let response = self
            .client
            .post(&url)
            .header(
                "Authorization",
                format!("Key {}", self.api_key.expose_secret()),
            )
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| ImageGenError::Connection(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());

            return Err(ImageGenError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let wire_response: FalGenerateResponse = response
            .json()
            .await
            .map_err(|e| ImageGenError::MalformedResponse(e.to_string()))?;

        let image = wire_response.images.first().ok_or_else(|| {
            ImageGenError::MalformedResponse("no images in provider response".to_string())
        })?;

        tracing::debug!(request_id = %context.request_id, "image generation request complete");

        image.url.clone().ok_or_else(|| {
            ImageGenError::MalformedResponse("image entry has no url".to_string())
        })
    }
}
