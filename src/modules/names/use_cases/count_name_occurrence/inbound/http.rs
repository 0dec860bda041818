use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::names::core::name_event::{CloudEvent, NameEvent};
use crate::modules::names::use_cases::count_name_occurrence::handler::{
    Acknowledgment, ApplicationError,
};
use crate::shell::state::AppState;

// Accepts any media type. An empty or unparseable body reaches the handler as
// an absent event.
fn name_event_from_body(body: &[u8]) -> Option<NameEvent> {
    if body.is_empty() {
        return None;
    }
    match serde_json::from_slice::<CloudEvent<NameEvent>>(body) {
        Ok(envelope) => {
            tracing::debug!(
                id = envelope.id.as_deref().unwrap_or_default(),
                topic = envelope.topic.as_deref().unwrap_or_default(),
                "received cloud event"
            );
            envelope.data
        }
        Err(err) => {
            tracing::warn!(error = %err, "discarding malformed cloud event");
            None
        }
    }
}

pub async fn handle(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let event = name_event_from_body(&body);

    match state.count_handler.handle(event).await {
        Ok(_) => (StatusCode::OK, Acknowledgment::SUCCESS).into_response(),
        Err(err @ ApplicationError::EventDelivery(_)) => {
            tracing::warn!(error = %err, "rejecting name event");
            StatusCode::BAD_REQUEST.into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to count name event");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
