//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the REST endpoints the browser display layer talks to.
//! The display layer renders images and forwards pointer events; all image
//! state lives server-side, so every endpoint is a thin translation onto
//! the session service.

pub mod annotate;
pub mod sessions;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/sessions", post(sessions::create_session))
        .route(
            "/api/sessions/{id}",
            get(sessions::get_session).delete(sessions::delete_session),
        )
        .route("/api/sessions/{id}/select", post(sessions::select_style))
        .route("/api/sessions/{id}/region", post(annotate::set_region))
        .route("/api/sessions/{id}/stroke/begin", post(annotate::begin_stroke))
        .route("/api/sessions/{id}/stroke/point", post(annotate::continue_stroke))
        .route("/api/sessions/{id}/stroke/end", post(annotate::end_stroke))
        .route("/api/sessions/{id}/undo", post(annotate::undo))
        .route("/api/sessions/{id}/clear", post(annotate::clear))
        .route("/api/sessions/{id}/composite", get(sessions::download_composite))
        .route("/api/sessions/{id}/edit", post(sessions::request_edit))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
