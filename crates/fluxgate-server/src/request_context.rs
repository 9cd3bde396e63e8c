use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use fluxgate_core::RequestContext;

/// Middleware that attaches a fresh `RequestContext` to each request
///
/// Handlers read it back via `Extension<RequestContext>` and use the
/// generated identifier for log correlation and the response body
pub async fn request_context_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(RequestContext::new());

    next.run(request).await
}
