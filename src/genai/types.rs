//! Generative-image types — image payloads, errors, and the provider trait.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by generative-image client operations.
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the image provider failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The image provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The image provider response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The response contained text or nothing at all, but no image part.
    #[error("no image in response")]
    NoImage,

    /// An image payload carried invalid base64 data.
    #[error("image payload is not valid base64: {0}")]
    BadPayload(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// IMAGE PAYLOAD
// =============================================================================

/// An encoded image plus its media type. Uploads arrive in this shape and
/// the remote capability returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagePayload {
    /// Standard (non-url-safe, padded) base64 of the raw image bytes.
    pub base64: String,
    /// Media type, e.g. `image/png` or `image/jpeg`.
    pub mime_type: String,
}

impl ImagePayload {
    /// Wrap already-encoded PNG bytes as a payload.
    #[must_use]
    pub fn from_png_bytes(bytes: &[u8]) -> Self {
        Self { base64: BASE64.encode(bytes), mime_type: "image/png".into() }
    }

    /// Decode the payload back to raw image bytes.
    ///
    /// # Errors
    ///
    /// Returns [`GenAiError::BadPayload`] when the base64 data is malformed.
    pub fn decode(&self) -> Result<Vec<u8>, GenAiError> {
        BASE64.decode(&self.base64).map_err(|e| GenAiError::BadPayload(e.to_string()))
    }
}

// =============================================================================
// GENERATE IMAGE TRAIT
// =============================================================================

/// Provider-neutral async trait for image generation. Enables mocking in tests.
#[async_trait::async_trait]
pub trait GenerateImage: Send + Sync {
    /// Produce one new image from a primary image, optional reference images,
    /// and a text prompt.
    ///
    /// # Errors
    ///
    /// Returns a [`GenAiError`] if the request fails, the response is
    /// malformed, or the response carries no image part.
    async fn generate(
        &self,
        primary: &ImagePayload,
        references: &[ImagePayload],
        prompt: &str,
    ) -> Result<ImagePayload, GenAiError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
