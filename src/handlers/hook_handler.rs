use std::sync::Arc;

use axum::body::Bytes;
use axum::http::{HeaderMap, StatusCode};
use axum::{Extension, Json};
use tracing::Instrument;

use crate::app_state::AppState;
use crate::dispatch::{HookResponse, Outcome};
use crate::error::HookError;
use crate::events::inbound_event::{HEADER_DELIVERY, HEADER_EVENT};

pub async fn hook_handler(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<HookResponse>) {
    let event = header_value(&headers, HEADER_EVENT);
    let delivery = header_value(&headers, HEADER_DELIVERY);

    let span = tracing::info_span!("hook", event = %event, delivery = %delivery);

    async move {
        tracing::info!("Received webhook");

        let report = state.engine().handle(event, &body).await;
        let status = status_for(&report.outcome);

        if status.is_success() {
            tracing::debug!("Responding {}", report.response.result);
        } else {
            tracing::warn!(status = status.as_u16(), "Responding {}", report.response.result);
        }

        (status, Json(report.response))
    }
    .instrument(span)
    .await
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

fn status_for(outcome: &Outcome) -> StatusCode {
    match outcome {
        Outcome::Ignored | Outcome::Dispatched | Outcome::Mutated => StatusCode::OK,
        Outcome::Failed(HookError::MalformedPayload { .. }) => StatusCode::BAD_REQUEST,
        Outcome::Failed(HookError::ConcurrencyConflict { .. }) => StatusCode::CONFLICT,
        Outcome::Failed(HookError::QueueUnavailable(_) | HookError::TableUnavailable(_)) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
