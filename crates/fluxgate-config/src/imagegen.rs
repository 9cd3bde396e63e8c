use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Image generation provider configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageGenConfig {
    /// Provider API key; when unset, the `FAL_KEY` environment variable
    /// is consulted at startup
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override for the provider endpoint
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Model identifier appended to the base URL
    #[serde(default = "default_model")]
    pub model: String,
    /// Timeout for provider calls in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for ImageGenConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: default_model(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

fn default_model() -> String {
    "fal-ai/flux-1/schnell".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_timeout_seconds() -> u64 {
    60
}
