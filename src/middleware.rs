//! Request ID middleware for correlating logs with requests.
//!
//! Each request gets a UUID v4. Callers may supply their own through the
//! `x-request-id` header, which is honored when it parses as a UUID. The ID
//! is attached to a tracing span wrapping the whole request and echoed back
//! in the response's `x-request-id` header so clients can quote it.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use http::header::{HeaderName, HeaderValue};
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Request ID, readable by handlers from request extensions.
#[derive(Clone, Debug)]
pub struct RequestId(pub Uuid);

impl RequestId {
    /// Reuse a caller-supplied UUID, or generate a fresh one.
    fn from_request(request: &Request) -> Self {
        let supplied = request
            .headers()
            .get(&REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value.trim()).ok());
        Self(supplied.unwrap_or_else(Uuid::new_v4))
    }
}

/// Outermost layer: opens the `request` span and stamps the response.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let request_id = RequestId::from_request(&request);

    let span = tracing::info_span!(
        "request",
        request_id = %request_id.0,
        method = %request.method(),
        path = %request.uri().path(),
        status = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );

    let start = Instant::now();
    let header_value = HeaderValue::from_str(&request_id.0.to_string()).ok();
    request.extensions_mut().insert(request_id);

    async move {
        let mut response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;
        let status = response.status().as_u16();

        let span = tracing::Span::current();
        span.record("status", status);
        span.record("duration_ms", duration_ms);
        tracing::info!(status, duration_ms, "Request completed");

        if let Some(value) = header_value {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        response
    }
    .instrument(span)
    .await
}
