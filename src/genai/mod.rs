//! Generative image adapter — hosted image-to-image capability.
//!
//! DESIGN
//! ======
//! The [`GenerateImage`] trait is the seam the rest of the server talks to:
//! one call in, one image out. The Gemini client is the only production
//! implementation; tests substitute a mock. Configuration comes from
//! environment variables and is validated once at startup.

pub mod config;
pub mod gemini;
pub mod types;

pub use config::GenAiConfig;
pub use gemini::GeminiClient;
pub use types::{GenAiError, GenerateImage, ImagePayload};
