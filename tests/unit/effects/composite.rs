use super::*;
use crate::foundation::core::CanvasSize;

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    assert_eq!(over(dst, [0, 0, 0, 0]), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    assert_eq!(over([0, 0, 0, 255], [255, 0, 0, 255]), [255, 0, 0, 255]);
}

#[test]
fn over_dst_transparent_returns_src() {
    let src = [100, 110, 120, 200];
    assert_eq!(over([0, 0, 0, 0], src), src);
}

#[test]
fn over_onto_opaque_stays_opaque() {
    for a in [1u8, 90, 180, 229, 254] {
        let out = over([40, 50, 60, 255], [0, 0, 0, a]);
        assert_eq!(out[3], 255, "alpha {a}");
    }
}

#[test]
fn fill_over_darkens_with_overlay() {
    let mut c = Canvas::filled(CanvasSize::new(2, 1), Rgba8([200, 100, 50, 255]));
    fill_over(&mut c, Rgba8([0, 0, 0, 229]));
    // 200 * 26 / 255 ~= 20
    assert_eq!(c.pixel(0, 0), Some([20, 10, 5, 255]));
}

#[test]
fn flatten_removes_transparency() {
    let mut c = Canvas::from_premul(2, 1, vec![0, 0, 0, 0, 64, 0, 0, 128]).unwrap();
    flatten_onto(&mut c, [0, 0, 0]);
    assert!(c.is_opaque());
    assert_eq!(c.pixel(0, 0), Some([0, 0, 0, 255]));
    assert_eq!(c.pixel(1, 0), Some([64, 0, 0, 255]));
}

#[test]
fn over_in_place_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
}

#[test]
fn over_at_clips_to_canvas() {
    let mut c = Canvas::filled(CanvasSize::new(4, 4), Rgba8([0, 0, 0, 255]));
    let src = PreparedImage {
        width: 3,
        height: 3,
        rgba8_premul: [255u8, 0, 0, 255].repeat(9),
    };
    over_at(&mut c, &src, 2, -1).unwrap();
    assert_eq!(c.pixel(2, 0), Some([255, 0, 0, 255]));
    assert_eq!(c.pixel(3, 1), Some([255, 0, 0, 255]));
    assert_eq!(c.pixel(1, 0), Some([0, 0, 0, 255]));
    assert_eq!(c.pixel(2, 2), Some([0, 0, 0, 255]));

    over_at(&mut c, &src, 10, 10).unwrap();
    over_at(&mut c, &src, -3, 0).unwrap();
    assert_eq!(c.pixel(0, 3), Some([0, 0, 0, 255]));
}

#[test]
fn over_at_respects_logo_alpha() {
    let mut c = Canvas::filled(CanvasSize::new(2, 1), Rgba8([0, 0, 255, 255]));
    let src = PreparedImage {
        width: 2,
        height: 1,
        rgba8_premul: vec![0, 0, 0, 0, 255, 0, 0, 255],
    };
    over_at(&mut c, &src, 0, 0).unwrap();
    assert_eq!(c.pixel(0, 0), Some([0, 0, 255, 255]));
    assert_eq!(c.pixel(1, 0), Some([255, 0, 0, 255]));
}
