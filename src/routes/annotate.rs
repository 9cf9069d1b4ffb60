//! Annotation routes: pointer gestures, undo, clear, region updates.
//!
//! The display layer forwards raw pointer events in raster-local
//! coordinates; all gesture state and drawing lives in the session's
//! annotation surface.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use surface::{Brush, Point, Region};
use uuid::Uuid;

use crate::routes::sessions::session_error_to_status;
use crate::services::session;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RegionBody {
    pub region: Region,
}

#[derive(Deserialize)]
pub struct StrokeBeginBody {
    pub point: Point,
    /// Absent means the default red annotation brush.
    #[serde(default)]
    pub brush: Option<Brush>,
}

#[derive(Deserialize)]
pub struct StrokePointBody {
    pub point: Point,
}

#[derive(Serialize)]
pub struct ChangedResponse {
    pub changed: bool,
}

/// `POST /api/sessions/:id/region` — display region changed; refit the surface.
pub async fn set_region(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<RegionBody>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    session::set_region(&state, id, body.region)
        .await
        .map_err(session_error_to_status)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// `POST /api/sessions/:id/stroke/begin` — pointer down.
pub async fn begin_stroke(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<StrokeBeginBody>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    session::begin_stroke(&state, id, body.point, body.brush.unwrap_or_default())
        .await
        .map_err(session_error_to_status)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// `POST /api/sessions/:id/stroke/point` — pointer move while drawing.
pub async fn continue_stroke(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<StrokePointBody>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    session::continue_stroke(&state, id, body.point)
        .await
        .map_err(session_error_to_status)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// `POST /api/sessions/:id/stroke/end` — pointer up; commit the stroke.
pub async fn end_stroke(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    session::end_stroke(&state, id)
        .await
        .map_err(session_error_to_status)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// `POST /api/sessions/:id/undo` — drop the most recent committed stroke.
pub async fn undo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ChangedResponse>, StatusCode> {
    let changed = session::undo(&state, id)
        .await
        .map_err(session_error_to_status)?;
    Ok(Json(ChangedResponse { changed }))
}

/// `POST /api/sessions/:id/clear` — drop all marks.
pub async fn clear(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ChangedResponse>, StatusCode> {
    let changed = session::clear(&state, id)
        .await
        .map_err(session_error_to_status)?;
    Ok(Json(ChangedResponse { changed }))
}

#[cfg(test)]
#[path = "annotate_test.rs"]
mod tests;
