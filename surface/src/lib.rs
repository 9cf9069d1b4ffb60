//! Annotation surface engine for the interior restyling studio.
//!
//! This crate owns the drawable raster bound to a generated room image:
//! translating pointer gestures into brush strokes, maintaining a snapshot
//! history for undo and full clear, and flattening the base image plus all
//! markup into a PNG for the edit workflow. It has no HTTP or async
//! dependencies so the whole engine is testable as plain synchronous code;
//! the host server is responsible only for delivering raster-local pointer
//! coordinates and serializing calls through a single owner.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`surface`] | The [`surface::AnnotationSurface`] engine and its operations |
//! | [`history`] | Bounded snapshot stack backing undo and clear |
//! | [`stroke`] | Brush settings and the gesture state machine |
//! | [`raster`] | tiny-skia raster primitives (blit, segment, premultiply) |
//! | [`geom`] | Points, display regions, and aspect-ratio fitting |
//! | [`consts`] | Shared constants (brush defaults, history cap) |

pub mod consts;
pub mod geom;
pub mod history;
mod raster;
pub mod stroke;
pub mod surface;

pub use geom::{Point, Region};
pub use stroke::Brush;
pub use surface::{AnnotationSurface, SurfaceError};
