//! Session service — per-user in-memory workflow state.
//!
//! DESIGN
//! ======
//! A session is the server-side form of the three-screen flow: an upload
//! creates it with a generated gallery, selecting a style binds an editor
//! (current image plus annotation surface), and strokes and chat edits
//! mutate the editor. Nothing is persisted; a background task prunes
//! sessions idle longer than the configured TTL.
//!
//! The editor exists iff a style has been selected, so stroke operations
//! on a gallery-stage session are rejected rather than acting on a surface
//! that does not exist.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use surface::{AnnotationSurface, Brush, Point, Region, SurfaceError};
use tokio::task::JoinHandle;
use tracing::info;
use uuid::Uuid;

use crate::genai::{GenAiError, ImagePayload};
use crate::rate_limit::RateLimitError;
use crate::services::edit::{self, EditError};
use crate::services::generate::{self, GeneratedStyle};
use crate::services::styles::STYLES;
use crate::state::AppState;

const DEFAULT_SESSION_TTL_SECS: u64 = 3600;
const DEFAULT_SESSION_SWEEP_INTERVAL_SECS: u64 = 60;

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    User,
    Bot,
}

/// One entry in a session's edit-chat log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: ChatSender,
    pub text: String,
    /// Reference images attached to the request, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reference_images: Vec<ImagePayload>,
}

/// Editor-stage state: present once a style has been selected.
pub struct Editor {
    /// Catalog id of the selected style.
    pub style_id: String,
    /// The image currently shown, replaced by successful edits.
    pub current_image: ImagePayload,
    /// Last display region reported by the client.
    pub region: Region,
    /// Raster surface carrying the image and its annotation marks.
    pub surface: AnnotationSurface,
}

/// Per-session live state. Kept in memory only.
pub struct Session {
    pub id: Uuid,
    pub original: ImagePayload,
    pub gallery: Vec<GeneratedStyle>,
    pub editor: Option<Editor>,
    pub chat: Vec<ChatMessage>,
    pub last_activity: Instant,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session not found: {0}")]
    NotFound(Uuid),
    #[error("unknown style: {0}")]
    UnknownStyle(String),
    #[error("no style selected")]
    NoStyleSelected,
    #[error("surface error: {0}")]
    Surface(#[from] SurfaceError),
    #[error("image payload error: {0}")]
    Payload(#[from] GenAiError),
    #[error("edit error: {0}")]
    Edit(#[from] EditError),
    #[error("rate limited: {0}")]
    RateLimited(String),
}

impl From<RateLimitError> for SessionError {
    fn from(err: RateLimitError) -> Self {
        Self::RateLimited(err.to_string())
    }
}

// =============================================================================
// LIFECYCLE
// =============================================================================

/// Create a session from an uploaded room photo: validate the payload,
/// fan out the style generation, and insert the session once the whole
/// gallery exists. A failed fan-out leaves no session behind.
pub async fn create_session(state: &AppState, original: ImagePayload) -> Result<Uuid, SessionError> {
    let id = Uuid::new_v4();
    state.rate_limiter.check_and_record_batch(id, STYLES.len())?;

    // A failed create never reaches the sessions map, so the expiry sweep
    // would never reclaim its limiter entry; drop it here.
    let gallery = match build_gallery(state, &original).await {
        Ok(gallery) => gallery,
        Err(err) => {
            state.rate_limiter.forget_session(id);
            return Err(err.into());
        }
    };

    let session = Session {
        id,
        original,
        gallery,
        editor: None,
        chat: Vec::new(),
        last_activity: Instant::now(),
    };
    state.sessions.write().await.insert(id, session);
    info!(session_id = %id, "session created");
    Ok(id)
}

async fn build_gallery(
    state: &AppState,
    original: &ImagePayload,
) -> Result<Vec<GeneratedStyle>, GenAiError> {
    // Reject malformed uploads before spending remote calls.
    original.decode()?;
    generate::generate_gallery(state.genai.as_ref(), original).await
}

/// Remove a session and its rate-limit counters.
pub async fn remove_session(state: &AppState, id: Uuid) -> Result<(), SessionError> {
    let removed = state.sessions.write().await.remove(&id);
    if removed.is_none() {
        return Err(SessionError::NotFound(id));
    }
    state.rate_limiter.forget_session(id);
    info!(session_id = %id, "session removed");
    Ok(())
}

/// Bind the editor to a gallery style: load the styled image into a fresh
/// annotation surface fitted to the reported display region.
pub async fn select_style(
    state: &AppState,
    id: Uuid,
    style_id: &str,
    region: Region,
) -> Result<(), SessionError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;

    let entry = session
        .gallery
        .iter()
        .find(|s| s.id == style_id)
        .ok_or_else(|| SessionError::UnknownStyle(style_id.to_string()))?;

    let bytes = entry.image.decode()?;
    let surface = AnnotationSurface::load(&bytes, region)?;
    session.editor = Some(Editor {
        style_id: style_id.to_string(),
        current_image: entry.image.clone(),
        region,
        surface,
    });
    session.last_activity = Instant::now();
    Ok(())
}

/// Rebuild the surface for a new display region. Annotation marks do not
/// survive a region change; the current image is reloaded pristine.
pub async fn set_region(state: &AppState, id: Uuid, region: Region) -> Result<(), SessionError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
    let editor = session.editor.as_mut().ok_or(SessionError::NoStyleSelected)?;

    let bytes = editor.current_image.decode()?;
    editor.surface = AnnotationSurface::load(&bytes, region)?;
    editor.region = region;
    session.last_activity = Instant::now();
    Ok(())
}

// =============================================================================
// STROKES
// =============================================================================

pub async fn begin_stroke(state: &AppState, id: Uuid, point: Point, brush: Brush) -> Result<(), SessionError> {
    with_editor(state, id, |editor| Ok(editor.surface.begin_stroke(point, &brush)?)).await
}

pub async fn continue_stroke(state: &AppState, id: Uuid, point: Point) -> Result<(), SessionError> {
    with_editor(state, id, |editor| {
        editor.surface.continue_stroke(point);
        Ok(())
    })
    .await
}

pub async fn end_stroke(state: &AppState, id: Uuid) -> Result<(), SessionError> {
    with_editor(state, id, |editor| {
        editor.surface.end_stroke();
        Ok(())
    })
    .await
}

/// Undo the most recent committed stroke. Returns `false` at pristine.
pub async fn undo(state: &AppState, id: Uuid) -> Result<bool, SessionError> {
    with_editor(state, id, |editor| Ok(editor.surface.undo())).await
}

/// Drop all annotation marks. Returns `false` when already pristine.
pub async fn clear(state: &AppState, id: Uuid) -> Result<bool, SessionError> {
    with_editor(state, id, |editor| Ok(editor.surface.clear_all())).await
}

/// Run `f` against a session's editor under the write lock, refreshing
/// the activity timestamp on success.
async fn with_editor<T>(
    state: &AppState,
    id: Uuid,
    f: impl FnOnce(&mut Editor) -> Result<T, SessionError>,
) -> Result<T, SessionError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
    let editor = session.editor.as_mut().ok_or(SessionError::NoStyleSelected)?;
    let result = f(editor)?;
    session.last_activity = Instant::now();
    Ok(result)
}

// =============================================================================
// EXPORT + EDIT
// =============================================================================

/// Encode the current surface (image plus marks) as PNG. Returns the
/// selected style id alongside for download naming.
pub async fn export_composite(state: &AppState, id: Uuid) -> Result<(String, Vec<u8>), SessionError> {
    let sessions = state.sessions.read().await;
    let session = sessions.get(&id).ok_or(SessionError::NotFound(id))?;
    let editor = session.editor.as_ref().ok_or(SessionError::NoStyleSelected)?;
    let png = editor.surface.export_png()?;
    Ok((editor.style_id.clone(), png))
}

/// Run one chat edit: snapshot the composite, release the lock for the
/// remote call, then apply the result. A failed call leaves the current
/// image and surface untouched; the user's message stays in the log.
pub async fn request_edit(
    state: &AppState,
    id: Uuid,
    instruction: &str,
    references: Vec<ImagePayload>,
) -> Result<ImagePayload, SessionError> {
    state.rate_limiter.check_and_record(id)?;

    // Snapshot under the lock, then drop it so other sessions keep moving
    // while the remote call is in flight.
    let composite = {
        let mut sessions = state.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        let editor = session.editor.as_ref().ok_or(SessionError::NoStyleSelected)?;
        let composite = ImagePayload::from_png_bytes(&editor.surface.export_png()?);
        session.chat.push(ChatMessage {
            sender: ChatSender::User,
            text: instruction.to_string(),
            reference_images: references.clone(),
        });
        session.last_activity = Instant::now();
        composite
    };

    let image = edit::edit_image(state.genai.as_ref(), &composite, instruction, &references).await?;

    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
    let editor = session.editor.as_mut().ok_or(SessionError::NoStyleSelected)?;

    // The edited image becomes the new baseline: marks are consumed.
    let bytes = image.decode()?;
    editor.surface = AnnotationSurface::load(&bytes, editor.region)?;
    editor.current_image = image.clone();
    session.chat.push(ChatMessage {
        sender: ChatSender::Bot,
        text: "Edit applied.".to_string(),
        reference_images: Vec::new(),
    });
    session.last_activity = Instant::now();
    Ok(image)
}

// =============================================================================
// EXPIRY
// =============================================================================

/// Spawn the background task that prunes idle sessions. Returns a handle
/// for shutdown.
pub fn spawn_expiry_task(state: AppState) -> JoinHandle<()> {
    let ttl = Duration::from_secs(env_parse("SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS));
    let sweep_secs = env_parse("SESSION_SWEEP_INTERVAL_SECS", DEFAULT_SESSION_SWEEP_INTERVAL_SECS);
    info!(ttl_secs = ttl.as_secs(), sweep_secs, "session expiry configured");
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(sweep_secs));
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            prune_idle(&state, ttl).await;
        }
    })
}

/// Remove every session idle longer than `ttl`.
async fn prune_idle(state: &AppState, ttl: Duration) {
    let expired: Vec<Uuid> = {
        let mut sessions = state.sessions.write().await;
        let expired: Vec<Uuid> = sessions
            .iter()
            .filter(|(_, s)| s.last_activity.elapsed() > ttl)
            .map(|(id, _)| *id)
            .collect();
        for id in &expired {
            sessions.remove(id);
        }
        expired
    };
    for id in &expired {
        state.rate_limiter.forget_session(*id);
    }
    if !expired.is_empty() {
        info!(count = expired.len(), "pruned idle sessions");
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
