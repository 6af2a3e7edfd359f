use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde_json::{json, Map, Value};

use crate::error::AppError;
use crate::sinks::{SinkStatus, SINK_IDS};
use crate::state::SharedState;
use crate::submission::parser;

/// Accepts one order and fans it out to every configured sink. Sinks are
/// attempted in order, each isolated so one failure never skips the next.
/// Overall success iff at least one sink succeeded.
pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let content_type = headers.get("content-type").and_then(|v| v.to_str().ok());

    let mut order = parser::parse_body(content_type, &body).map_err(AppError::BadRequest)?;

    // Server stamp wins over anything the client sent
    order.submitted_at = Some(Utc::now());

    tracing::debug!("Received order from {}", order.email);

    let mut details = Map::new();
    for id in SINK_IDS {
        details.insert(id.to_string(), Value::Bool(false));
    }

    let mut any_success = false;
    for sink in state.sinks.list() {
        let delivered = match sink.deliver(&order).await {
            Ok(result) if result.status == SinkStatus::Success => {
                tracing::info!("Sink {} delivery succeeded", sink.id());
                true
            }
            Ok(result) => {
                tracing::warn!("Sink {} delivery failed: {:?}", sink.id(), result.response);
                false
            }
            Err(e) => {
                tracing::warn!("Sink {} delivery failed: {e}", sink.id());
                false
            }
        };
        details.insert(sink.id().to_string(), Value::Bool(delivered));
        any_success = any_success || delivered;
    }

    if !any_success {
        return Err(AppError::AllSinksFailed);
    }

    Ok((
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": "Order submitted successfully",
            "details": details,
        })),
    )
        .into_response())
}

/// Plain OPTIONS without preflight headers lands here; the CORS layer
/// decorates the response.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
