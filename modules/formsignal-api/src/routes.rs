use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use formsignal_common::EventFragment;
use formsignal_session::SessionStore;

pub struct AppState {
    pub store: SessionStore,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    // The tracker script posts from arbitrary origins.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/events", post(ingest_event))
        .with_state(state)
        .layer(cors)
        // Request spans carry method + path only
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}

async fn health() -> &'static str {
    "ok"
}

/// Single collection endpoint. Decode failures are a server-side error;
/// validation failures map to a client error. Success acknowledges with the
/// `{statusCode, message}` body the tracker script expects.
async fn ingest_event(
    State(state): State<Arc<AppState>>,
    body: Result<Json<EventFragment>, JsonRejection>,
) -> Response {
    let Json(fragment) = match body {
        Ok(json) => json,
        Err(rejection) => {
            warn!(error = %rejection, "Failed to decode event payload");
            return respond(StatusCode::INTERNAL_SERVER_ERROR, &rejection.body_text());
        }
    };

    match state.store.process(fragment) {
        Ok(_) => respond(StatusCode::OK, "SUCCESS"),
        Err(e) => respond(StatusCode::BAD_REQUEST, &e.to_string()),
    }
}

fn respond(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({
            "statusCode": status.as_u16(),
            "message": message,
        })),
    )
        .into_response()
}
