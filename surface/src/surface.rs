//! The Annotation Surface: a drawable raster bound to a base image.
//!
//! DESIGN
//! ======
//! A surface only exists after a successful [`AnnotationSurface::load`], so
//! "operation before load" is unrepresentable rather than a runtime guard.
//! Strokes draw onto the raster immediately as segments arrive — exports
//! taken mid-stroke include them — but history only advances when a stroke
//! ends, so undo reverts whole strokes, never partial ones. Binding to a new
//! base image (style selection, a successful edit, a display resize) means
//! building a fresh surface; prior history is deliberately discarded.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use tiny_skia::Pixmap;

use crate::consts::MAX_RASTER_DIM;
use crate::geom::{Point, Region, fit_region};
use crate::history::{History, Snapshot};
use crate::raster;
use crate::stroke::{ActiveBrush, Brush, Gesture, parse_hex_color};

/// Errors produced by annotation surface operations.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// The base image bytes could not be decoded.
    #[error("image decode failed: {0}")]
    Decode(String),

    /// The display region has no drawable area.
    #[error("display region is empty: {width}x{height}")]
    EmptyRegion { width: f32, height: f32 },

    /// The decoded base image has a zero dimension.
    #[error("base image has a zero dimension")]
    EmptyImage,

    /// The fitted raster would exceed [`MAX_RASTER_DIM`] on a side.
    #[error("fitted raster {width}x{height} exceeds the maximum dimension")]
    RegionTooLarge { width: u32, height: u32 },

    /// The brush color could not be parsed or its width is not positive.
    #[error("invalid brush: {0}")]
    InvalidBrush(String),

    /// The raster buffer could not be allocated.
    #[error("raster allocation failed for {width}x{height}")]
    RasterAlloc { width: u32, height: u32 },

    /// The raster could not be serialized to PNG.
    #[error("PNG encode failed: {0}")]
    Encode(String),
}

/// A stateful drawing engine bound to a base image: raster buffer, bounded
/// snapshot history, and pointer-gesture state.
#[derive(Debug)]
pub struct AnnotationSurface {
    pixmap: Pixmap,
    history: History,
    gesture: Gesture,
}

impl AnnotationSurface {
    /// Bind a new surface to a base image.
    ///
    /// Decodes `image_bytes` (PNG, JPEG, or WebP), fits its aspect ratio
    /// into `region`, draws it scaled into a fresh raster, and seeds history
    /// with that single pristine snapshot. Re-invoke (building a new surface)
    /// whenever the base image or the display region changes.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::EmptyRegion`], [`SurfaceError::Decode`],
    /// [`SurfaceError::EmptyImage`], [`SurfaceError::RegionTooLarge`], or
    /// [`SurfaceError::RasterAlloc`].
    pub fn load(image_bytes: &[u8], region: Region) -> Result<Self, SurfaceError> {
        if region.is_empty() {
            return Err(SurfaceError::EmptyRegion { width: region.width, height: region.height });
        }

        let decoded = image::load_from_memory(image_bytes)
            .map_err(|e| SurfaceError::Decode(e.to_string()))?;
        let rgba = decoded.to_rgba8();
        let (image_width, image_height) = rgba.dimensions();
        if image_width == 0 || image_height == 0 {
            return Err(SurfaceError::EmptyImage);
        }

        let src = raster::pixmap_from_rgba(image_width, image_height, rgba.into_raw())
            .ok_or(SurfaceError::RasterAlloc { width: image_width, height: image_height })?;

        let (width, height) = fit_region(image_width, image_height, region);
        if width > MAX_RASTER_DIM || height > MAX_RASTER_DIM {
            return Err(SurfaceError::RegionTooLarge { width, height });
        }
        let mut pixmap =
            Pixmap::new(width, height).ok_or(SurfaceError::RasterAlloc { width, height })?;
        raster::blit_scaled(&mut pixmap, &src);

        let pristine = Snapshot::new(width, height, pixmap.data().to_vec());
        Ok(Self { pixmap, history: History::new(pristine), gesture: Gesture::Idle })
    }

    /// Open a new stroke at `point` with the given brush.
    ///
    /// Nothing is drawn until the first [`Self::continue_stroke`] arrives,
    /// and nothing is committed to history until [`Self::end_stroke`]. A
    /// begin while a stroke is already in progress commits the in-progress
    /// stroke first (implicit end-then-begin).
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::InvalidBrush`] for an unparsable color or a
    /// non-positive width; the gesture state is left unchanged.
    pub fn begin_stroke(&mut self, point: Point, brush: &Brush) -> Result<(), SurfaceError> {
        let color = parse_hex_color(&brush.color)
            .ok_or_else(|| SurfaceError::InvalidBrush(format!("bad color {:?}", brush.color)))?;
        if brush.width <= 0.0 || !brush.width.is_finite() {
            return Err(SurfaceError::InvalidBrush(format!("bad width {}", brush.width)));
        }

        if matches!(self.gesture, Gesture::Drawing { .. }) {
            self.end_stroke();
        }
        self.gesture = Gesture::Drawing { brush: ActiveBrush { color, width: brush.width }, last: point };
        Ok(())
    }

    /// Extend the in-progress stroke to `point`, drawing a rounded segment
    /// from the last visited point. No-op when no stroke is in progress.
    pub fn continue_stroke(&mut self, point: Point) {
        let Gesture::Drawing { brush, last } = &mut self.gesture else {
            return;
        };
        raster::draw_segment(&mut self.pixmap, *last, point, *brush);
        *last = point;
    }

    /// Close the in-progress stroke and commit a snapshot of the raster, so
    /// the next [`Self::undo`] reverts exactly this stroke. No-op when no
    /// stroke is in progress.
    pub fn end_stroke(&mut self) {
        if matches!(self.gesture, Gesture::Idle) {
            return;
        }
        self.gesture = Gesture::Idle;
        let snapshot = Snapshot::new(self.pixmap.width(), self.pixmap.height(), self.pixmap.data().to_vec());
        self.history.push(snapshot);
    }

    /// Revert the most recently committed stroke. Returns `false` (raster
    /// untouched) when only the pristine snapshot remains.
    ///
    /// A stroke still in progress is discarded, not committed: the revert
    /// replaces its uncommitted marks and the gesture goes back to idle, so
    /// later pointer-move events cannot resume from a stale point.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.gesture = Gesture::Idle;
        self.pixmap.data_mut().copy_from_slice(snapshot.data());
        true
    }

    /// Restore the pristine post-load raster and truncate history to it.
    /// Returns `false` when there is nothing to clear. As with
    /// [`Self::undo`], a stroke still in progress is discarded.
    pub fn clear_all(&mut self) -> bool {
        let Some(pristine) = self.history.clear() else {
            return false;
        };
        self.gesture = Gesture::Idle;
        self.pixmap.data_mut().copy_from_slice(pristine.data());
        true
    }

    /// Flatten the current raster (base image + all drawn marks, committed
    /// or not) to PNG bytes. Pure read: history, raster, and gesture state
    /// are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Encode`] if PNG serialization fails.
    pub fn export_png(&self) -> Result<Vec<u8>, SurfaceError> {
        self.pixmap.encode_png().map_err(|e| SurfaceError::Encode(e.to_string()))
    }

    /// Raster width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Raster height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Number of retained snapshots (1 = pristine only).
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Whether a stroke is currently in progress.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self.gesture, Gesture::Drawing { .. })
    }
}
