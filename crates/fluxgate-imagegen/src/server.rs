use std::time::Duration;

use fluxgate_config::ImageGenConfig;
use fluxgate_core::RequestContext;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    error::{ImageGenError, Result},
    provider::{ImageGenProvider, fal::FalProvider},
    types::GenerateRequest,
};

/// Environment variable consulted when the config carries no API key
const API_KEY_ENV: &str = "FAL_KEY";

/// Image generation server holding the configured provider
///
/// The provider is absent when no credential was available at startup;
/// requests are then rejected before any external call.
pub struct Server {
    provider: Option<Box<dyn ImageGenProvider>>,
}

impl Server {
    /// Generate an image and return its URL
    ///
    /// # Errors
    ///
    /// Returns `NotConfigured` when no credential was available at
    /// startup, or a generation error from the provider call
    pub async fn generate(
        &self,
        request: &GenerateRequest,
        context: &RequestContext,
    ) -> Result<String> {
        let provider = self.provider.as_ref().ok_or(ImageGenError::NotConfigured)?;

        provider.generate(request, context).await
    }
}

/// Builder for constructing the image generation server from configuration
pub struct ImageGenServerBuilder<'a> {
    config: &'a ImageGenConfig,
}

impl<'a> ImageGenServerBuilder<'a> {
    pub fn new(config: &'a ImageGenConfig) -> Self {
        Self { config }
    }

    /// Build the server, resolving the provider credential
    ///
    /// A missing credential is not a startup error: the server comes up
    /// and rejects generation requests until redeployed with one.
    pub fn build(self) -> anyhow::Result<Server> {
        let Some(api_key) = resolve_api_key(self.config) else {
            tracing::warn!(
                "no image generation credential configured; requests will be rejected"
            );
            return Ok(Server { provider: None });
        };

        let provider = FalProvider::new(
            api_key,
            self.config.base_url.as_ref().map(ToString::to_string),
            self.config.model.clone(),
            Duration::from_secs(self.config.timeout_seconds),
        )?;

        tracing::debug!(model = %self.config.model, "image generation provider initialized");

        Ok(Server {
            provider: Some(Box::new(provider)),
        })
    }
}

/// Resolve the provider credential from config or the environment
///
/// Empty values count as unset.
fn resolve_api_key(config: &ImageGenConfig) -> Option<SecretString> {
    if let Some(ref key) = config.api_key
        && !key.expose_secret().is_empty()
    {
        return Some(key.clone());
    }

    std::env::var(API_KEY_ENV)
        .ok()
        .filter(|key| !key.is_empty())
        .map(SecretString::from)
}
