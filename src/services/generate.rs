//! Gallery generation — concurrent fan-out of one request per style.
//!
//! DESIGN
//! ======
//! All seven styles are requested concurrently and the batch is fail-fast:
//! the first failure aborts the whole gallery, so callers never see a
//! partial result.

use futures::future::try_join_all;
use tracing::info;

use crate::genai::{GenAiError, GenerateImage, ImagePayload};
use crate::services::styles::{STYLES, StyleDefinition};

/// A generated gallery entry: style copy plus the produced image.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GeneratedStyle {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: ImagePayload,
}

/// Generate one styled variant per catalog entry, concurrently.
///
/// # Errors
///
/// Returns the first [`GenAiError`] any style request produces; remaining
/// in-flight requests are dropped.
pub async fn generate_gallery(
    genai: &dyn GenerateImage,
    original: &ImagePayload,
) -> Result<Vec<GeneratedStyle>, GenAiError> {
    let requests = STYLES.iter().map(|style| generate_one(genai, original, style));
    try_join_all(requests).await
}

async fn generate_one(
    genai: &dyn GenerateImage,
    original: &ImagePayload,
    style: &StyleDefinition,
) -> Result<GeneratedStyle, GenAiError> {
    info!(style = style.id, "generating styled variant");
    let image = genai.generate(original, &[], &style.prompt()).await?;
    Ok(GeneratedStyle {
        id: style.id.to_string(),
        name: style.name.to_string(),
        description: style.description.to_string(),
        image,
    })
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
