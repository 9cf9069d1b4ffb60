use super::*;

#[test]
fn pixmap_from_rgba_keeps_opaque_pixels() {
    let data = vec![10, 20, 30, 255, 40, 50, 60, 255];
    let pm = pixmap_from_rgba(2, 1, data.clone()).unwrap();
    assert_eq!(pm.data(), data.as_slice());
}

#[test]
fn pixmap_from_rgba_premultiplies_translucent_pixels() {
    // 50%-alpha pure red: channels scale by 128/255.
    let pm = pixmap_from_rgba(1, 1, vec![255, 0, 0, 128]).unwrap();
    assert_eq!(pm.data(), &[128, 0, 0, 128]);
}

#[test]
fn pixmap_from_rgba_rejects_zero_size() {
    assert!(pixmap_from_rgba(0, 1, vec![]).is_none());
    assert!(pixmap_from_rgba(1, 0, vec![]).is_none());
}

#[test]
fn pixmap_from_rgba_rejects_length_mismatch() {
    assert!(pixmap_from_rgba(2, 2, vec![0; 4]).is_none());
}

#[test]
fn blit_scaled_covers_destination() {
    // A uniform source survives any filtering exactly.
    let src = pixmap_from_rgba(2, 1, vec![0, 255, 0, 255, 0, 255, 0, 255]).unwrap();
    let mut dst = Pixmap::new(4, 2).unwrap();
    blit_scaled(&mut dst, &src);
    for px in dst.data().chunks_exact(4) {
        assert_eq!(px, &[0, 255, 0, 255]);
    }
}

#[test]
fn draw_segment_marks_pixels() {
    let mut pm = Pixmap::new(10, 10).unwrap();
    let brush = ActiveBrush { color: tiny_skia::Color::from_rgba8(255, 0, 0, 255), width: 3.0 };
    draw_segment(&mut pm, Point::new(2.0, 5.0), Point::new(8.0, 5.0), brush);
    let center = pm.pixel(5, 5).unwrap();
    assert!(center.alpha() > 0);
    assert!(center.red() > 0);
}

#[test]
fn draw_segment_leaves_far_pixels_untouched() {
    let mut pm = Pixmap::new(10, 10).unwrap();
    let brush = ActiveBrush { color: tiny_skia::Color::from_rgba8(255, 0, 0, 255), width: 1.0 };
    draw_segment(&mut pm, Point::new(1.0, 1.0), Point::new(3.0, 1.0), brush);
    let corner = pm.pixel(9, 9).unwrap();
    assert_eq!(corner.alpha(), 0);
}
