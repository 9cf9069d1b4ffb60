//! Brush settings and the stroke gesture state machine.
//!
//! `Brush` is what the display layer sends on pointer-down; `ActiveBrush` is
//! its parsed, validated form carried by the in-progress gesture. `Gesture`
//! enforces at most one stroke in progress: the engine stays `Idle` until a
//! pointer-down and tracks the last visited point while `Drawing` so that
//! consecutive pointer-move events connect into one continuous line.

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;

use serde::{Deserialize, Serialize};
use tiny_skia::Color;

use crate::consts::{DEFAULT_BRUSH_COLOR, DEFAULT_BRUSH_WIDTH};
use crate::geom::Point;

/// Brush settings for a stroke, as supplied by the display layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brush {
    /// Stroke color as a `#rrggbb` or `#rrggbbaa` hex string.
    pub color: String,
    /// Stroke width in raster pixels. Must be positive.
    pub width: f32,
}

impl Default for Brush {
    fn default() -> Self {
        Self { color: DEFAULT_BRUSH_COLOR.to_string(), width: DEFAULT_BRUSH_WIDTH }
    }
}

/// A parsed, validated brush carried by an in-progress gesture.
#[derive(Debug, Clone, Copy)]
pub struct ActiveBrush {
    pub color: Color,
    pub width: f32,
}

/// Parse a `#rrggbb` or `#rrggbbaa` hex string into a color.
#[must_use]
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    let channel = |i: usize| {
        hex.get(i..i + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
    };
    let (r, g, b, a) = match hex.len() {
        6 => (channel(0)?, channel(2)?, channel(4)?, 255),
        8 => (channel(0)?, channel(2)?, channel(4)?, channel(6)?),
        _ => return None,
    };
    Some(Color::from_rgba8(r, g, b, a))
}

/// The gesture state machine: at most one stroke in progress at a time.
#[derive(Debug, Clone)]
pub enum Gesture {
    /// No stroke in progress; waiting for the next pointer-down.
    Idle,
    /// A stroke is being drawn.
    Drawing {
        /// Color and width locked in at pointer-down.
        brush: ActiveBrush,
        /// Last visited point; the next segment starts here.
        last: Point,
    },
}

impl Default for Gesture {
    fn default() -> Self {
        Self::Idle
    }
}
