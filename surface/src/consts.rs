//! Shared constants for the annotation surface.

/// Brush color used when the display layer doesn't send one (red).
pub const DEFAULT_BRUSH_COLOR: &str = "#ef4444";

/// Brush width in raster pixels used when the display layer doesn't send one.
pub const DEFAULT_BRUSH_WIDTH: f32 = 5.0;

/// Maximum snapshots retained in history (pristine + committed strokes).
/// Oldest committed strokes are evicted past this; the pristine snapshot
/// is never evicted.
pub const MAX_HISTORY: usize = 64;

/// Maximum raster width or height in pixels. Region dimensions arrive from
/// the display layer, so the fitted size must be bounded before allocation.
pub const MAX_RASTER_DIM: u32 = 8192;
