//! Session lifecycle routes: upload, gallery, style selection, edit, download.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use surface::{Region, SurfaceError};
use tracing::warn;
use uuid::Uuid;

use crate::genai::{GenAiError, ImagePayload};
use crate::services::edit::EditError;
use crate::services::generate::GeneratedStyle;
use crate::services::session::{self, ChatMessage, Session, SessionError};
use crate::state::AppState;

// =============================================================================
// VIEWS
// =============================================================================

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub gallery: Vec<GeneratedStyle>,
    pub selected_style: Option<String>,
    pub current_image: Option<ImagePayload>,
    pub chat: Vec<ChatMessage>,
}

fn to_view(session: &Session) -> SessionView {
    SessionView {
        id: session.id,
        gallery: session.gallery.clone(),
        selected_style: session.editor.as_ref().map(|e| e.style_id.clone()),
        current_image: session.editor.as_ref().map(|e| e.current_image.clone()),
        chat: session.chat.clone(),
    }
}

#[derive(Deserialize)]
pub struct SelectStyleBody {
    pub style_id: String,
    pub region: Region,
}

#[derive(Deserialize)]
pub struct EditBody {
    pub instruction: String,
    #[serde(default)]
    pub reference_images: Vec<ImagePayload>,
}

#[derive(Serialize)]
pub struct EditResponse {
    pub image: ImagePayload,
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/sessions` — upload a room photo and generate the style gallery.
pub async fn create_session(
    State(state): State<AppState>,
    Json(body): Json<ImagePayload>,
) -> Result<Json<SessionView>, StatusCode> {
    let id = session::create_session(&state, body)
        .await
        .map_err(session_error_to_status)?;
    view_of(&state, id).await
}

/// `GET /api/sessions/:id` — current session state.
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, StatusCode> {
    view_of(&state, id).await
}

/// `DELETE /api/sessions/:id` — discard a session.
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    session::remove_session(&state, id)
        .await
        .map_err(session_error_to_status)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// `POST /api/sessions/:id/select` — pick a gallery style and enter the editor.
pub async fn select_style(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<SelectStyleBody>,
) -> Result<Json<SessionView>, StatusCode> {
    session::select_style(&state, id, &body.style_id, body.region)
        .await
        .map_err(session_error_to_status)?;
    view_of(&state, id).await
}

/// `GET /api/sessions/:id/composite` — download the current image with marks.
pub async fn download_composite(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, StatusCode> {
    let (style_id, png) = session::export_composite(&state, id)
        .await
        .map_err(session_error_to_status)?;

    let filename = format!("restyle-{style_id}.png");
    Ok((
        [
            (CONTENT_TYPE, "image/png".to_string()),
            (CONTENT_DISPOSITION, format!("attachment; filename=\"{filename}\"")),
        ],
        png,
    )
        .into_response())
}

/// `POST /api/sessions/:id/edit` — chat edit request against the composite.
pub async fn request_edit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<EditBody>,
) -> Result<Json<EditResponse>, StatusCode> {
    let image = session::request_edit(&state, id, &body.instruction, body.reference_images)
        .await
        .map_err(session_error_to_status)?;
    Ok(Json(EditResponse { image }))
}

async fn view_of(state: &AppState, id: Uuid) -> Result<Json<SessionView>, StatusCode> {
    let sessions = state.sessions.read().await;
    let session = sessions.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(to_view(session)))
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

pub(crate) fn session_error_to_status(err: SessionError) -> StatusCode {
    warn!(error = %err, "session operation failed");
    match err {
        SessionError::NotFound(_) => StatusCode::NOT_FOUND,
        SessionError::UnknownStyle(_) => StatusCode::BAD_REQUEST,
        SessionError::NoStyleSelected => StatusCode::CONFLICT,
        SessionError::Surface(e) => surface_error_to_status(&e),
        SessionError::Payload(GenAiError::BadPayload(_)) => StatusCode::BAD_REQUEST,
        SessionError::Payload(_) => StatusCode::BAD_GATEWAY,
        SessionError::Edit(EditError::TooManyReferences(_)) => StatusCode::BAD_REQUEST,
        SessionError::Edit(EditError::GenAi(_)) => StatusCode::BAD_GATEWAY,
        SessionError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
    }
}

fn surface_error_to_status(err: &SurfaceError) -> StatusCode {
    match err {
        SurfaceError::Decode(_)
        | SurfaceError::EmptyRegion { .. }
        | SurfaceError::EmptyImage
        | SurfaceError::RegionTooLarge { .. }
        | SurfaceError::InvalidBrush(_) => StatusCode::BAD_REQUEST,
        SurfaceError::RasterAlloc { .. } | SurfaceError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "sessions_test.rs"]
mod tests;
