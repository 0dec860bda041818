use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::names::use_cases::count_name_occurrence::inbound::http as count_http;
use crate::modules::names::use_cases::subscribe_to_names::inbound::http as subscribe_http;
use crate::shell::state::{AppState, NAMES_ROUTE};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(NAMES_ROUTE, post(count_http::handle))
        .route("/dapr/subscribe", get(subscribe_http::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
