//! Per-request trace identifier and request logging.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;
use uuid::Uuid;

pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// Attach a trace id to the request (taken from the `x-trace-id` header or
/// freshly generated) and log the request under a span carrying it.
pub async fn trace_request(req: Request, next: Next) -> Response {
    let trace_id = req
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let span = tracing::info_span!("request", trace_id = %trace_id, method = %method, path = %path);

    async move {
        tracing::info!("receiving request {method} on path {path}");
        next.run(req).await
    }
    .instrument(span)
    .await
}
