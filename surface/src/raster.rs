//! Raster primitives over tiny-skia: building premultiplied pixmaps from
//! decoded image data, scaled blits, and stroked line segments with rounded
//! caps and joins.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use tiny_skia::{
    FilterQuality, IntSize, LineCap, LineJoin, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke,
    Transform,
};

use crate::geom::Point;
use crate::stroke::ActiveBrush;

/// Build a pixmap from straight-alpha RGBA bytes (as produced by the `image`
/// crate), premultiplying in place. Returns `None` for zero dimensions or a
/// length mismatch.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn pixmap_from_rgba(width: u32, height: u32, mut data: Vec<u8>) -> Option<Pixmap> {
    for px in data.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a < 255 {
            px[0] = ((u16::from(px[0]) * a) / 255) as u8;
            px[1] = ((u16::from(px[1]) * a) / 255) as u8;
            px[2] = ((u16::from(px[2]) * a) / 255) as u8;
        }
    }
    Pixmap::from_vec(data, IntSize::from_wh(width, height)?)
}

/// Draw `src` scaled to exactly cover `dst`, bilinear-filtered.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn blit_scaled(dst: &mut Pixmap, src: &Pixmap) {
    let sx = dst.width() as f32 / src.width() as f32;
    let sy = dst.height() as f32 / src.height() as f32;
    let paint = PixmapPaint { quality: FilterQuality::Bilinear, ..PixmapPaint::default() };
    dst.draw_pixmap(0, 0, src.as_ref(), &paint, Transform::from_scale(sx, sy), None);
}

/// Stroke one line segment from `from` to `to` with rounded caps and joins,
/// so consecutive segments form a continuous rounded line.
pub(crate) fn draw_segment(pixmap: &mut Pixmap, from: Point, to: Point, brush: ActiveBrush) {
    let mut pb = PathBuilder::new();
    pb.move_to(from.x, from.y);
    pb.line_to(to.x, to.y);
    let Some(path) = pb.finish() else {
        return;
    };

    let mut paint = Paint::default();
    paint.set_color(brush.color);
    paint.anti_alias = true;

    let stroke = Stroke {
        width: brush.width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    };
    pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
}
