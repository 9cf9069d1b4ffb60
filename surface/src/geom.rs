//! Geometry: raster points, display regions, and aspect-ratio fitting.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in raster-local coordinates (pixels, origin at the top-left).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The display region available for the surface, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub width: f32,
    pub height: f32,
}

impl Region {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether the region has no drawable area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Fit an image's aspect ratio into a display region, keeping the image
/// fully contained.
///
/// Width-limited when `region.width / aspect <= region.height`, otherwise
/// height-limited. Dimensions are rounded and clamped to at least 1 pixel.
/// Callers must reject empty regions and zero-dimension images first.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn fit_region(image_width: u32, image_height: u32, region: Region) -> (u32, u32) {
    let aspect = image_width as f32 / image_height as f32;
    let (w, h) = if region.width / aspect <= region.height {
        (region.width, region.width / aspect)
    } else {
        (region.height * aspect, region.height)
    };
    ((w.round() as u32).max(1), (h.round() as u32).max(1))
}
