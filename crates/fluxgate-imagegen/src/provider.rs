pub(crate) mod fal;

use async_trait::async_trait;
use fluxgate_core::RequestContext;

use crate::{error::Result, types::GenerateRequest};

/// Trait for image generation provider implementations
#[async_trait]
pub(crate) trait ImageGenProvider: Send + Sync {
    /// Generate an image for the given request and return its URL
    async fn generate(
        &self,
        request: &GenerateRequest,
        context: &RequestContext,
    ) -> Result<String>;
}
