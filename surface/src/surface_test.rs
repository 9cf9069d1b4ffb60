use super::*;

fn png_bytes(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(rgba));
    let mut out = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut out, image::ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

/// 2:1 base image in an 800x400 region -> exact 800x400 raster.
fn load_surface() -> AnnotationSurface {
    AnnotationSurface::load(&png_bytes(200, 100, [40, 80, 120, 255]), Region::new(800.0, 400.0))
        .unwrap()
}

fn draw_stroke(surface: &mut AnnotationSurface, y: f32) {
    surface
        .begin_stroke(Point::new(10.0, y), &Brush::default())
        .unwrap();
    surface.continue_stroke(Point::new(100.0, y));
    surface.continue_stroke(Point::new(200.0, y));
    surface.end_stroke();
}

// =============================================================
// load
// =============================================================

#[test]
fn load_fits_region_and_seeds_single_snapshot() {
    let surface = load_surface();
    assert_eq!((surface.width(), surface.height()), (800, 400));
    assert_eq!(surface.history_len(), 1);
    assert!(!surface.is_drawing());
}

#[test]
fn load_height_limited_square_image() {
    let surface =
        AnnotationSurface::load(&png_bytes(100, 100, [0, 0, 0, 255]), Region::new(800.0, 400.0))
            .unwrap();
    assert_eq!((surface.width(), surface.height()), (400, 400));
}

#[test]
fn load_rejects_undecodable_bytes() {
    let err = AnnotationSurface::load(b"not an image", Region::new(800.0, 400.0)).unwrap_err();
    assert!(matches!(err, SurfaceError::Decode(_)));
}

#[test]
fn load_rejects_empty_region() {
    let err =
        AnnotationSurface::load(&png_bytes(10, 10, [0, 0, 0, 255]), Region::new(0.0, 400.0))
            .unwrap_err();
    assert!(matches!(err, SurfaceError::EmptyRegion { .. }));
}

#[test]
fn load_rejects_oversized_region() {
    // Region dimensions come from the client; a huge fitted raster must be
    // rejected before allocation rather than aborting on OOM.
    let err =
        AnnotationSurface::load(&png_bytes(10, 10, [0, 0, 0, 255]), Region::new(1e8, 1e8))
            .unwrap_err();
    assert!(matches!(err, SurfaceError::RegionTooLarge { .. }));
}

#[test]
fn reload_replaces_raster_and_history() {
    // A resize re-runs load; annotations on the old surface are discarded.
    let mut surface = load_surface();
    draw_stroke(&mut surface, 50.0);
    let reloaded =
        AnnotationSurface::load(&png_bytes(200, 100, [40, 80, 120, 255]), Region::new(400.0, 400.0))
            .unwrap();
    assert_eq!((reloaded.width(), reloaded.height()), (400, 200));
    assert_eq!(reloaded.history_len(), 1);
}

// =============================================================
// strokes and history
// =============================================================

#[test]
fn stroke_modifies_raster_and_commits_snapshot() {
    let mut surface = load_surface();
    let pristine = surface.pixmap.data().to_vec();
    draw_stroke(&mut surface, 50.0);
    assert_ne!(surface.pixmap.data(), pristine.as_slice());
    assert_eq!(surface.history_len(), 2);
    assert!(!surface.is_drawing());
}

#[test]
fn begin_without_segments_leaves_raster_unchanged() {
    let mut surface = load_surface();
    let before = surface.pixmap.data().to_vec();
    surface
        .begin_stroke(Point::new(10.0, 10.0), &Brush::default())
        .unwrap();
    assert_eq!(surface.pixmap.data(), before.as_slice());
    surface.end_stroke();
    // The (empty) stroke still commits, matching pointer-up semantics.
    assert_eq!(surface.history_len(), 2);
    assert_eq!(surface.pixmap.data(), before.as_slice());
}

#[test]
fn continue_and_end_are_noops_when_idle() {
    let mut surface = load_surface();
    let before = surface.pixmap.data().to_vec();
    surface.continue_stroke(Point::new(50.0, 50.0));
    surface.end_stroke();
    assert_eq!(surface.pixmap.data(), before.as_slice());
    assert_eq!(surface.history_len(), 1);
}

#[test]
fn reentrant_begin_commits_previous_stroke() {
    let mut surface = load_surface();
    surface
        .begin_stroke(Point::new(10.0, 10.0), &Brush::default())
        .unwrap();
    surface.continue_stroke(Point::new(50.0, 10.0));
    surface
        .begin_stroke(Point::new(10.0, 30.0), &Brush::default())
        .unwrap();
    // First stroke snapshotted by the implicit end; second still in progress.
    assert_eq!(surface.history_len(), 2);
    assert!(surface.is_drawing());
}

#[test]
fn begin_rejects_bad_color() {
    let mut surface = load_surface();
    let err = surface
        .begin_stroke(Point::new(0.0, 0.0), &Brush { color: "red".into(), width: 5.0 })
        .unwrap_err();
    assert!(matches!(err, SurfaceError::InvalidBrush(_)));
    assert!(!surface.is_drawing());
}

#[test]
fn begin_rejects_non_positive_width() {
    let mut surface = load_surface();
    let err = surface
        .begin_stroke(Point::new(0.0, 0.0), &Brush { color: "#ff0000".into(), width: 0.0 })
        .unwrap_err();
    assert!(matches!(err, SurfaceError::InvalidBrush(_)));
}

// =============================================================
// undo / clear
// =============================================================

#[test]
fn undo_n_strokes_restores_pristine_bit_for_bit() {
    let mut surface = load_surface();
    let pristine = surface.pixmap.data().to_vec();
    for i in 0..3 {
        #[allow(clippy::cast_precision_loss)]
        draw_stroke(&mut surface, 40.0 + 30.0 * i as f32);
    }
    assert!(surface.undo());
    assert!(surface.undo());
    assert!(surface.undo());
    assert_eq!(surface.pixmap.data(), pristine.as_slice());
    assert_eq!(surface.history_len(), 1);
}

#[test]
fn undo_at_pristine_is_noop() {
    let mut surface = load_surface();
    let pristine = surface.pixmap.data().to_vec();
    assert!(!surface.undo());
    assert_eq!(surface.pixmap.data(), pristine.as_slice());
    assert_eq!(surface.history_len(), 1);
}

#[test]
fn clear_equals_undoing_every_stroke() {
    let mut cleared = load_surface();
    let mut undone = load_surface();
    draw_stroke(&mut cleared, 50.0);
    draw_stroke(&mut cleared, 90.0);
    draw_stroke(&mut undone, 50.0);
    draw_stroke(&mut undone, 90.0);

    assert!(cleared.clear_all());
    assert!(undone.undo());
    assert!(undone.undo());

    assert_eq!(cleared.pixmap.data(), undone.pixmap.data());
    assert_eq!(cleared.history_len(), 1);
    assert_eq!(undone.history_len(), 1);
}

#[test]
fn undo_mid_stroke_discards_the_gesture() {
    let mut surface = load_surface();
    draw_stroke(&mut surface, 50.0);
    surface
        .begin_stroke(Point::new(10.0, 90.0), &Brush::default())
        .unwrap();
    surface.continue_stroke(Point::new(200.0, 90.0));

    assert!(surface.undo());
    assert!(!surface.is_drawing());
    // The reverted raster is not resumable: a stray move draws nothing.
    let after_undo = surface.export_png().unwrap();
    surface.continue_stroke(Point::new(400.0, 90.0));
    assert_eq!(surface.export_png().unwrap(), after_undo);
}

#[test]
fn clear_mid_stroke_discards_the_gesture() {
    let mut surface = load_surface();
    let pristine_export = surface.export_png().unwrap();
    draw_stroke(&mut surface, 50.0);
    surface
        .begin_stroke(Point::new(10.0, 90.0), &Brush::default())
        .unwrap();
    surface.continue_stroke(Point::new(200.0, 90.0));

    assert!(surface.clear_all());
    assert!(!surface.is_drawing());
    surface.continue_stroke(Point::new(400.0, 90.0));
    assert_eq!(surface.export_png().unwrap(), pristine_export);
}

#[test]
fn clear_at_pristine_is_noop() {
    let mut surface = load_surface();
    let pristine = surface.pixmap.data().to_vec();
    assert!(!surface.clear_all());
    assert_eq!(surface.pixmap.data(), pristine.as_slice());
}

// =============================================================
// export
// =============================================================

#[test]
fn export_is_pure_and_repeatable() {
    let mut surface = load_surface();
    draw_stroke(&mut surface, 50.0);
    let first = surface.export_png().unwrap();
    let second = surface.export_png().unwrap();
    assert_eq!(first, second);
    assert_eq!(surface.history_len(), 2);
}

#[test]
fn export_after_undo_shows_only_remaining_strokes() {
    // A + S1 + S2, undo -> export matches a surface that only ever drew S1.
    let mut surface = load_surface();
    draw_stroke(&mut surface, 50.0);
    draw_stroke(&mut surface, 90.0);
    assert!(surface.undo());

    let mut reference = load_surface();
    draw_stroke(&mut reference, 50.0);

    assert_eq!(surface.export_png().unwrap(), reference.export_png().unwrap());
}

#[test]
fn export_after_clear_equals_pristine_export() {
    let surface = load_surface();
    let pristine_export = surface.export_png().unwrap();

    let mut annotated = load_surface();
    draw_stroke(&mut annotated, 50.0);
    assert!(annotated.clear_all());

    assert_eq!(annotated.export_png().unwrap(), pristine_export);
}

#[test]
fn export_includes_uncommitted_midstroke_marks() {
    let mut surface = load_surface();
    let pristine_export = surface.export_png().unwrap();
    surface
        .begin_stroke(Point::new(10.0, 50.0), &Brush::default())
        .unwrap();
    surface.continue_stroke(Point::new(200.0, 50.0));

    // The mark is exported even though nothing is committed yet...
    assert_ne!(surface.export_png().unwrap(), pristine_export);
    // ...so undo has nothing to revert.
    assert_eq!(surface.history_len(), 1);
    assert!(!surface.undo());
}
