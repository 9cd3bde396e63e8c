use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Image generation request
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerateRequest {
    /// Text description of the desired image
    pub prompt: String,
    /// Requested size of the generated image
    #[serde(default = "default_image_size")]
    pub image_size: ImageSize,
}

/// Default image size preset
fn default_image_size() -> ImageSize {
    ImageSize::Named("square".to_string())
}

/// Requested image size
///
/// Accepted as either a provider preset name (e.g. "square",
/// "landscape_4_3") or an explicit width/height pair. Serializes back in
/// the shape it was parsed from: presets pass through as plain strings,
/// explicit pairs flatten to a `width`/`height` map.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ImageSize {
    /// Provider-defined preset name
    Named(String),
    /// Explicit dimensions in pixels
    Explicit {
        width: NonZeroU32,
        height: NonZeroU32,
    },
}

/// Image generation response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerateResponse {
    /// Identifier generated for this request
    pub id: String,
    /// Outcome status; `"success"` is the only value produced, failures
    /// surface as HTTP errors instead
    pub status: String,
    /// URL of the generated image
    pub url: Option<String>,
    /// Unused; kept in the body shape for API compatibility
    pub error_message: Option<String>,
}
