//! Edit requests — compose the instruction prompt and request one new image.
//!
//! DESIGN
//! ======
//! The composite sent as the primary image already carries the user's red
//! annotation marks, so the prompt tells the model to treat those marks as
//! areas of interest. Reference images ride along as extra inline parts.

use crate::genai::{GenAiError, GenerateImage, ImagePayload};
use crate::services::styles::STRUCTURE_SUFFIX;

/// Hard cap on reference images per edit request.
pub const MAX_REFERENCE_IMAGES: usize = 3;

#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error("too many reference images: {0} (max {MAX_REFERENCE_IMAGES})")]
    TooManyReferences(usize),
    #[error(transparent)]
    GenAi(#[from] GenAiError),
}

/// Build the full edit prompt from a user instruction.
#[must_use]
pub fn build_edit_prompt(instruction: &str) -> String {
    format!(
        "Edit the main image according to the user's request: \"{instruction}\". \
        The red marks drawn on the main image indicate areas of interest to remove or modify. \
        If additional reference images are provided, integrate them realistically into the \
        scene. {STRUCTURE_SUFFIX}"
    )
}

/// Request an edited version of `composite` from the remote capability.
///
/// # Errors
///
/// Returns [`EditError::TooManyReferences`] before any remote call when the
/// reference list exceeds [`MAX_REFERENCE_IMAGES`], or the underlying
/// [`GenAiError`] when the call fails.
pub async fn edit_image(
    genai: &dyn GenerateImage,
    composite: &ImagePayload,
    instruction: &str,
    references: &[ImagePayload],
) -> Result<ImagePayload, EditError> {
    if references.len() > MAX_REFERENCE_IMAGES {
        return Err(EditError::TooManyReferences(references.len()));
    }
    let prompt = build_edit_prompt(instruction);
    Ok(genai.generate(composite, references, &prompt).await?)
}

#[cfg(test)]
#[path = "edit_test.rs"]
mod tests;
