use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fluxgate_core::HttpError;
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImageGenError>;

/// Image generation gateway errors
///
/// Only two outcomes are surfaced to callers: a missing credential maps
/// to 503, everything else collapses to 500 with the underlying error
/// text embedded in the detail string. The finer-grained variants exist
/// for diagnostics.
#[derive(Debug, Error)]
pub enum ImageGenError {
    /// No provider credential was available at startup
    #[error("image generation service is not configured")]
    NotConfigured,

    /// Network or connection failure reaching the provider
    #[error("failed to reach image provider: {0}")]
    Connection(String),

    /// Provider API returned a non-success status
    #[error("image provider returned an error ({status}): {message}")]
    Provider { status: u16, message: String },

    /// Provider response did not contain an image URL
    #[error("unexpected response from image provider: {0}")]
    MalformedResponse(String),
}

impl HttpError for ImageGenError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::Connection(_) | Self::Provider { .. } | Self::MalformedResponse(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::NotConfigured => "Image generation service is not configured.".to_string(),
            _ => format!("An error occurred with the image provider: {self}"),
        }
    }
}

/// Error body shape expected by API consumers
#[derive(Debug, Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for ImageGenError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            detail: self.client_message(),
        };

        (status, Json(body)).into_response()
    }
}
