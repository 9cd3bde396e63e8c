//! Mock fal.ai backend for integration tests
//!
//! Accepts generation requests on any model path, records the payloads
//! it receives, and returns canned responses

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// Mock provider backend that returns predictable responses
pub struct MockProvider {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockProviderState>,
}

struct MockProviderState {
    request_count: AtomicU32,
    requests: Mutex<Vec<serde_json::Value>>,
    response: MockResponse,
}

enum MockResponse {
    /// Well-formed response carrying this image URL
    Url(String),
    /// Arbitrary body, for malformed-response cases
    Raw(serde_json::Value),
    /// Error status with an opaque body
    Status(StatusCode),
}

impl MockProvider {
    /// Start a mock that answers every request with a fixed image URL
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(MockResponse::Url(
            "https://cdn.example/mock.png".to_string(),
        ))
        .await
    }

    /// Start a mock that answers with the given image URL
    pub async fn start_with_url(url: &str) -> anyhow::Result<Self> {
        Self::start_inner(MockResponse::Url(url.to_string())).await
    }

    /// Start a mock that answers with an arbitrary JSON body
    pub async fn start_with_response(body: serde_json::Value) -> anyhow::Result<Self> {
        Self::start_inner(MockResponse::Raw(body)).await
    }

    /// Start a mock that fails every request with the given status
    pub async fn start_failing(status: u16) -> anyhow::Result<Self> {
        Self::start_inner(MockResponse::Status(StatusCode::from_u16(status)?)).await
    }

    async fn start_inner(response: MockResponse) -> anyhow::Result<Self> {
        let state = Arc::new(MockProviderState {
            request_count: AtomicU32::new(0),
            requests: Mutex::new(Vec::new()),
            response,
        });

        let app = Router::new()
            .route("/{*model}", routing::post(handle_generate))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self {
            addr,
            shutdown,
            state,
        })
    }

    /// Base URL for configuring the mock as the provider endpoint
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of generation requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// Payload of the most recent generation request
    pub fn last_request(&self) -> Option<serde_json::Value> {
        self.state.requests.lock().unwrap().last().cloned()
    }
}

impl Drop for MockProvider {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_generate(
    State(state): State<Arc<MockProviderState>>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    state.request_count.fetch_add(1, Ordering::Relaxed);
    state.requests.lock().unwrap().push(body);

    match &state.response {
        MockResponse::Url(url) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "images": [{"url": url, "content_type": "image/png"}],
                "seed": 42,
                "has_nsfw_concepts": [false]
            })),
        ),
        MockResponse::Raw(value) => (StatusCode::OK, Json(value.clone())),
        MockResponse::Status(status) => (
            *status,
            Json(serde_json::json!({"detail": "provider exploded"})),
        ),
    }
}
