use super::*;

#[test]
fn viewport_rejects_zero_dimensions() {
    assert!(Viewport::new(0, 10).is_err());
    assert!(Viewport::new(10, 0).is_err());
    let vp = Viewport::new(1280, 720).unwrap();
    assert_eq!(vp.rect(), Rect::new(0.0, 0.0, 1280.0, 720.0));
}

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.len_frames(), 3);
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn fps_frames_secs_roundtrip_floor() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(123);
    assert_eq!(fps.secs_to_frames_floor(secs), 123);
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn css_colors_trim_alpha() {
    let c = Color::rgb(0, 153, 255).with_alpha(0.8);
    assert_eq!(c.to_css(), "rgba(0, 153, 255, 0.8)");
    assert_eq!(Color::rgb(255, 215, 0).to_hex(), "#ffd700");
    assert_eq!(Color::rgb(0, 0, 0).with_alpha(3.0).alpha, 1.0);
}

#[test]
fn fmt_num_trims_trailing_zeros() {
    assert_eq!(fmt_num(585.0, 2), "585");
    assert_eq!(fmt_num(0.08000000000000002, 3), "0.08");
    assert_eq!(fmt_num(-0.0001, 2), "0");
    assert_eq!(fmt_num(12.346, 2), "12.35");
}
