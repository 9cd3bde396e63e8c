#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod provider;
mod server;
mod types;

use std::sync::Arc;

use anyhow::Context as _;
use axum::{Json, Router, extract::State, routing::post};
use fluxgate_core::RequestContext;

pub use error::{ImageGenError, Result};
pub use server::{ImageGenServerBuilder, Server};
pub use types::{GenerateRequest, GenerateResponse, ImageSize};

/// Build the image generation server from configuration
///
/// # Errors
///
/// Returns an error if the server fails to initialize
pub fn build_server(config: &fluxgate_config::Config) -> anyhow::Result<Arc<Server>> {
    let server = Arc::new(
        ImageGenServerBuilder::new(&config.imagegen)
            .build()
            .context("failed to initialize image generation server")?,
    );
    Ok(server)
}

/// Create the endpoint router for image generation
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route("/api/generate-image", post(generate))
}

/// Handle image generation requests
async fn generate(
    State(server): State<Arc<Server>>,
    axum::Extension(context): axum::Extension<RequestContext>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>> {
    tracing::info!(
        request_id = %context.request_id,
        prompt = %request.prompt,
        "received image generation request"
    );

    let url = match server.generate(&request, &context).await {
        Ok(url) => url,
        Err(error) => {
            tracing::error!(request_id = %context.request_id, %error, "image generation failed");
            return Err(error);
        }
    };

    tracing::info!(request_id = %context.request_id, %url, "image generated");

    Ok(Json(GenerateResponse {
        id: context.request_id.to_string(),
        status: "success".to_string(),
        url: Some(url),
        error_message: None,
    }))
}
