//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the live session map, the generative-image client, and the
//! rate limiter. Sessions live behind a single `RwLock`; every surface
//! mutation takes the write lock, so raster operations on one session
//! are serialized through a single owner.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::genai::GenerateImage;
use crate::rate_limit::RateLimiter;
use crate::services::session::Session;

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    /// Generative-image client behind the mockable trait.
    pub genai: Arc<dyn GenerateImage>,
    /// In-memory rate limiter for remote image-generation calls.
    pub rate_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(genai: Arc<dyn GenerateImage>) -> Self {
        Self { sessions: Arc::new(RwLock::new(HashMap::new())), genai, rate_limiter: RateLimiter::new() }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::genai::{GenAiError, ImagePayload};
    use std::io::Cursor;
    use std::sync::Mutex;

    /// Mock image generator. Pops canned results front-to-back; once the
    /// list is empty every call echoes a fresh tiny PNG. Received prompts
    /// are recorded for assertions.
    pub struct MockGen {
        responses: Mutex<Vec<Result<ImagePayload, GenAiError>>>,
        pub prompts: Mutex<Vec<String>>,
        pub reference_counts: Mutex<Vec<usize>>,
    }

    impl MockGen {
        #[must_use]
        pub fn with_responses(responses: Vec<Result<ImagePayload, GenAiError>>) -> Self {
            Self { responses: Mutex::new(responses), prompts: Mutex::new(Vec::new()), reference_counts: Mutex::new(Vec::new()) }
        }

        #[must_use]
        pub fn always_ok() -> Self {
            Self::with_responses(Vec::new())
        }
    }

    #[async_trait::async_trait]
    impl GenerateImage for MockGen {
        async fn generate(
            &self,
            _primary: &ImagePayload,
            references: &[ImagePayload],
            prompt: &str,
        ) -> Result<ImagePayload, GenAiError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reference_counts.lock().unwrap().push(references.len());
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() { Ok(png_payload()) } else { responses.remove(0) }
        }
    }

    /// A decodable 2x2 red PNG wrapped as a payload.
    #[must_use]
    pub fn png_payload() -> ImagePayload {
        ImagePayload::from_png_bytes(&png_bytes(2, 2))
    }

    /// Encode a solid red `w`x`h` PNG.
    #[must_use]
    pub fn png_bytes(w: u32, h: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(w, h, image::Rgba([255, 0, 0, 255]));
        let mut out = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut out, image::ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    /// Create a test `AppState` with an echoing mock generator.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(Arc::new(MockGen::always_ok()))
    }

    /// Create a test `AppState` with a specific mock generator.
    #[must_use]
    pub fn test_app_state_with(genai: Arc<MockGen>) -> AppState {
        AppState::new(genai)
    }
}
