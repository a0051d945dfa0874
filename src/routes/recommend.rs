//! Recommendation endpoint.

use axum::{body::Bytes, extract::State, http::HeaderMap, Extension, Json};
use http::header::CONTENT_TYPE;
use tracing::instrument;

use crate::middleware::RequestId;
use crate::recommend::{recommend, RecommendRequest, RecommendResponse};
use crate::state::AppState;

/// `POST /recommend` handler.
///
/// The body is taken as raw bytes so a missing or malformed payload can never
/// be rejected by an extractor; it only changes which defaults apply.
#[instrument(name = "recommend::recommend", skip_all, fields(request_id = %request_id.0))]
pub async fn recommend_items(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<RecommendResponse> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    let request = RecommendRequest::from_http(content_type, &body);
    let response = recommend(&state.table, request);

    tracing::debug!(
        module = %response.module,
        matched = !response.recommendations.is_empty(),
        count = response.recommendations.len(),
        "Resolved recommendations"
    );

    Json(response)
}
